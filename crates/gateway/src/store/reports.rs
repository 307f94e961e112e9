//! ReportStore — the in-memory holder of all daily reports.
//!
//! Append-only plus read: reports are created, listed, and fetched by id;
//! there is no update or delete. State lives for the process lifetime and
//! is reseeded from [`seed_reports`](super::seed_reports) on every start —
//! durability is deliberately out of scope.

use parking_lot::RwLock;

use shiplog_domain::report::{CreateReport, Report};

use super::seed::seed_reports;

pub struct ReportStore {
    inner: RwLock<Vec<Report>>,
}

impl ReportStore {
    /// Create a store pre-populated with the fixed example reports so the
    /// system is non-empty on first run.
    pub fn new() -> Self {
        let seed = seed_reports();
        tracing::info!(count = seed.len(), "report store seeded");
        Self::with_reports(seed)
    }

    /// Create a store with explicit initial contents (empty in tests).
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            inner: RwLock::new(reports),
        }
    }

    /// Snapshot of all reports ordered by `created_at` descending.
    ///
    /// The sort is stable, so reports stamped in the same instant keep
    /// their insertion order (newest-created at the front).
    pub fn list(&self) -> Vec<Report> {
        let mut reports = self.inner.read().clone();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports
    }

    /// Fetch one report by exact, case-sensitive id. `None` is a valid
    /// miss, not an error.
    pub fn get(&self, id: &str) -> Option<Report> {
        self.inner.read().iter().find(|r| r.id == id).cloned()
    }

    /// Materialize and insert a new report at the front of the sequence.
    ///
    /// Assigns the id and timestamp and applies the numeric clamps; see
    /// [`Report::materialize`]. Never fails for well-typed input.
    pub fn create(&self, input: CreateReport) -> Report {
        let report = Report::materialize(input);
        self.inner.write().insert(0, report.clone());
        tracing::debug!(id = %report.id, ai_score = report.ai_score, "report created");
        report
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
