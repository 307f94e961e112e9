use std::sync::Arc;

use shiplog_domain::config::Config;
use shiplog_evaluator::Evaluator;

use crate::store::ReportStore;

/// Shared application state passed to all API handlers.
///
/// Everything lives behind an `Arc`: the state is cloned per request,
/// but there is exactly one store and one evaluator per process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The single source of truth for all reports in this process.
    pub reports: Arc<ReportStore>,
    /// Pluggable evaluation provider (the random mock by default).
    pub evaluator: Arc<dyn Evaluator>,
}
