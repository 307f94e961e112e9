//! Fixed example reports inserted at store construction.

use chrono::{Duration, Utc};

use shiplog_domain::report::Report;

/// Three example reports spread over the last two days, so the list and
/// detail views have content on a fresh start.
pub fn seed_reports() -> Vec<Report> {
    let now = Utc::now();

    vec![
        Report {
            id: "seed-1".into(),
            created_at: now - Duration::days(2),
            work_duration_sec: 2 * 3600 + 15 * 60,
            github_url: "https://github.com/example/repo/pull/120".into(),
            content: "Debugging-heavy day. Tracked down a crash with AI assistance.".into(),
            diff_summary: "Added exception handling to session management and tuned the \
                           reconnect retry interval."
                .into(),
            changed_file_count: 7,
            ai_score: 82,
            ai_feedback: "Solid work squashing a hard-to-reproduce bug. Telemetry around \
                          the failure path is still thin; consider beefing up the logging."
                .into(),
            ai_short_comment: "Stability steadily improving. Logging needs one more pass.".into(),
        },
        Report {
            id: "seed-2".into(),
            created_at: now - Duration::days(1),
            work_duration_sec: 3600 + 40 * 60,
            github_url: "https://github.com/example/repo/pull/121".into(),
            content: "Improved the search UI and added an empty-state message.".into(),
            diff_summary: "Debounced the search bar, added a CTA for empty results, minor \
                           style tweaks."
                .into(),
            changed_file_count: 5,
            ai_score: 76,
            ai_feedback: "Good change that lowers UX friction. Accessibility labels are in \
                          place, which is commendable. Adding performance measurements \
                          would make the impact quantifiable."
                .into(),
            ai_short_comment: "Clear UX win. Instrumentation is the next move.".into(),
        },
        Report {
            id: "seed-3".into(),
            created_at: now,
            work_duration_sec: 45 * 60,
            github_url: "https://github.com/example/repo/pull/122".into(),
            content: "Normalized API responses and adjusted cache settings.".into(),
            diff_summary: "Unified status codes, extended the SWR cache to 30 seconds, \
                           added two tests."
                .into(),
            changed_file_count: 9,
            ai_score: 88,
            ai_feedback: "API consistency is much better. The cache extension looks \
                          low-risk, but an invalidation path would be a sensible safety \
                          net."
                .into(),
            ai_short_comment: "Consistency up. An escape hatch for the cache would seal it.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_distinct() {
        let seed = seed_reports();
        let ids: std::collections::HashSet<_> = seed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn seed_respects_creation_invariants() {
        for report in seed_reports() {
            assert!(report.ai_score <= 100);
            assert!(!report.id.is_empty());
        }
    }
}
