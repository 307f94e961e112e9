//! AppState construction extracted from `main.rs`.

use std::sync::Arc;

use shiplog_domain::config::{Config, ConfigSeverity};
use shiplog_evaluator::create_evaluator;

use crate::state::AppState;

/// Validate config, initialize the store and evaluator, and return a
/// fully-wired [`AppState`].
pub fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    // ── Config validation ────────────────────────────────────────────
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }
    if issues.iter().any(|i| i.severity == ConfigSeverity::Error) {
        anyhow::bail!(
            "config validation failed with {} error(s)",
            issues
                .iter()
                .filter(|i| i.severity == ConfigSeverity::Error)
                .count()
        );
    }

    // ── Report store (seeded, process-lifetime) ──────────────────────
    let reports = Arc::new(crate::store::ReportStore::new());

    // ── Evaluation provider ──────────────────────────────────────────
    let evaluator = create_evaluator(&config.evaluation);
    tracing::info!(provider = evaluator.provider_id(), "evaluator ready");

    Ok(AppState {
        config,
        reports,
        evaluator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_boots() {
        let state = build_app_state(Arc::new(Config::default())).unwrap();
        assert_eq!(state.reports.len(), 3);
        assert_eq!(state.evaluator.provider_id(), "mock");
    }

    #[test]
    fn invalid_config_refuses_to_boot() {
        let mut config = Config::default();
        config.evaluation.score_floor = 90;
        config.evaluation.score_ceiling = 10;
        assert!(build_app_state(Arc::new(config)).is_err());
    }
}
