//! The dummy evaluation provider: random scores and canned feedback.
//!
//! Stands in for a real AI reviewer so the rest of the system (store,
//! API, UI) behaves exactly as it would in production.

use shiplog_domain::error::Result;
use shiplog_domain::format::format_duration;
use shiplog_domain::report::clamp_duration_sec;

use crate::traits::{Evaluation, EvaluationRequest, Evaluator};

const DIFF_SUMMARIES: &[&str] = &[
    "Addressed review comments and extracted the validation into a helper.",
    "Polished UI microcopy and added an empty-state call to action.",
    "Added a cache invalidation path and made the logging more granular.",
    "Added one performance test and tightened a request timeout.",
];

const FEEDBACKS: &[&str] = &[
    "Steady quality improvements. Telemetry is in place, so tracking success metrics numerically is a good next step.",
    "The UI copy reads much clearer now. The accessibility labels are thorough, which is great to see.",
    "The refactoring is split into small, reviewable pieces. Consider adding a note to the docs as well.",
    "Test coverage keeps improving. Pairing it with a load test and written release criteria would round this out.",
];

pub struct MockEvaluator {
    score_floor: u8,
    score_ceiling: u8,
}

impl MockEvaluator {
    pub fn new(score_floor: u8, score_ceiling: u8) -> Self {
        Self {
            score_floor,
            score_ceiling: score_ceiling.min(100),
        }
    }

    fn pick_score(&self, r: u128) -> u8 {
        let span = u128::from(self.score_ceiling.saturating_sub(self.score_floor)) + 1;
        self.score_floor + (r % span) as u8
    }
}

#[async_trait::async_trait]
impl Evaluator for MockEvaluator {
    async fn evaluate(&self, req: EvaluationRequest) -> Result<Evaluation> {
        // UUIDv4 entropy is the stack's only randomness source; good
        // enough for placeholder output.
        let r = uuid::Uuid::new_v4().as_u128();

        let ai_score = self.pick_score(r);
        let changed_file_count = (3 + (r >> 8) % 7).max(2) as i64;
        let diff_summary = DIFF_SUMMARIES[((r >> 16) % DIFF_SUMMARIES.len() as u128) as usize];
        let feedback = FEEDBACKS[((r >> 24) % FEEDBACKS.len() as u128) as usize];

        let pr_line = if req.github_url.is_empty() {
            "(no URL given)".to_string()
        } else {
            req.github_url.clone()
        };
        let duration = format_duration(clamp_duration_sec(req.work_duration_sec));

        tracing::debug!(ai_score, changed_file_count, "mock evaluation generated");

        Ok(Evaluation {
            ai_score,
            changed_file_count,
            diff_summary: diff_summary.to_string(),
            ai_feedback: format!("{feedback}\n\nPR: {pr_line}\nTime spent: {duration}"),
            ai_short_comment: short_comment_for(ai_score).to_string(),
        })
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}

fn short_comment_for(score: u8) -> &'static str {
    if score > 85 {
        "Polished work. Close it out with a quick retrospective."
    } else {
        "Good momentum. One more push to tighten things up."
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
