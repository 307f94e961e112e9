//! The daily-report record and its creation input.
//!
//! A [`Report`] is immutable once created: the store assigns `id` and
//! `created_at`, clamps the numeric fields, and never touches the record
//! again (there is no update or delete).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Report
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One daily work-log record, including its (currently mocked) AI
/// evaluation. Serialized in camelCase for the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique for the store's lifetime; never reused.
    pub id: String,
    /// Stamped from the system clock at creation (ISO 8601 on the wire).
    pub created_at: DateTime<Utc>,
    pub work_duration_sec: u64,
    /// May be empty if the author did not link a PR.
    pub github_url: String,
    pub content: String,
    pub diff_summary: String,
    pub changed_file_count: i64,
    /// Always within [0, 100].
    pub ai_score: u8,
    pub ai_feedback: String,
    pub ai_short_comment: String,
}

/// A candidate report as submitted by a client: everything a [`Report`]
/// carries except the store-assigned `id` and `created_at`.
///
/// Numeric fields are accepted as arbitrary JSON numbers and normalized
/// by [`Report::materialize`]; the HTTP layer only checks shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    pub work_duration_sec: f64,
    pub github_url: String,
    pub content: String,
    pub diff_summary: String,
    pub changed_file_count: f64,
    pub ai_score: f64,
    pub ai_feedback: String,
    pub ai_short_comment: String,
}

impl Report {
    /// Turn a creation input into a fully materialized report: assign a
    /// fresh UUIDv4 `id`, stamp `created_at` with the current time, and
    /// clamp the numeric fields. Cannot fail for well-typed input.
    pub fn materialize(input: CreateReport) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            work_duration_sec: clamp_duration_sec(input.work_duration_sec),
            github_url: input.github_url,
            content: input.content,
            diff_summary: input.diff_summary,
            changed_file_count: input.changed_file_count.round() as i64,
            ai_score: clamp_score(input.ai_score),
            ai_feedback: input.ai_feedback,
            ai_short_comment: input.ai_short_comment,
        }
    }
}

/// Round to nearest and clamp into [0, 100].
pub fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Round to nearest and clamp negative durations to zero.
pub fn clamp_duration_sec(sec: f64) -> u64 {
    sec.round().max(0.0) as u64
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
