use serde::{Deserialize, Serialize};

use shiplog_domain::error::Result;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request / Response types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// What the author hands the evaluator: the day's write-up, the PR link
/// (possibly empty), and the measured work duration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub content: String,
    pub github_url: String,
    pub work_duration_sec: f64,
}

/// The evaluator's verdict, shaped to slot straight into a report's
/// AI fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub ai_score: u8,
    pub changed_file_count: i64,
    pub diff_summary: String,
    pub ai_feedback: String,
    pub ai_short_comment: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Core evaluator trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Trait every evaluation provider must implement.
///
/// The shipped implementation is the random mock; an AI-backed provider
/// would make a network call here, which is why the method is async even
/// though the mock completes immediately.
#[async_trait::async_trait]
pub trait Evaluator: Send + Sync {
    /// Produce a score and feedback for one daily report.
    async fn evaluate(&self, req: EvaluationRequest) -> Result<Evaluation>;

    /// A unique identifier for this evaluator instance.
    fn provider_id(&self) -> &str;
}
