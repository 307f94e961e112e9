pub mod mock;
pub mod traits;

use std::sync::Arc;

use shiplog_domain::config::{EvaluationConfig, EvaluationProvider};

// Re-exports for convenience.
pub use mock::MockEvaluator;
pub use traits::{Evaluation, EvaluationRequest, Evaluator};

/// Build the evaluator selected by configuration.
pub fn create_evaluator(config: &EvaluationConfig) -> Arc<dyn Evaluator> {
    match config.provider {
        EvaluationProvider::Mock => Arc::new(MockEvaluator::new(
            config.score_floor,
            config.score_ceiling,
        )),
    }
}
