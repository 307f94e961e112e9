mod evaluation;
mod server;

pub use evaluation::*;
pub use server::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Config {
    /// Sanity-check the resolved configuration. Errors prevent startup;
    /// warnings are logged and tolerated.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.max_concurrent_requests == 0 {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                message: "server.max_concurrent_requests must be > 0".into(),
            });
        }

        if self
            .server
            .cors
            .allowed_origins
            .iter()
            .any(|o| o == "*")
        {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                message: "server.cors allows all origins (\"*\") — not recommended".into(),
            });
        }

        if self.evaluation.score_floor > self.evaluation.score_ceiling {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                message: format!(
                    "evaluation.score_floor ({}) exceeds score_ceiling ({})",
                    self.evaluation.score_floor, self.evaluation.score_ceiling
                ),
            });
        }

        if self.evaluation.score_ceiling > 100 {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Error,
                message: format!(
                    "evaluation.score_ceiling ({}) exceeds the maximum score of 100",
                    self.evaluation.score_ceiling
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates_clean() {
        let issues = Config::default().validate();
        assert!(
            issues.iter().all(|i| i.severity != ConfigSeverity::Error),
            "default config should not produce errors: {issues:?}"
        );
    }

    #[test]
    fn inverted_score_bounds_is_an_error() {
        let mut cfg = Config::default();
        cfg.evaluation.score_floor = 90;
        cfg.evaluation.score_ceiling = 50;
        assert!(cfg
            .validate()
            .iter()
            .any(|i| i.severity == ConfigSeverity::Error));
    }

    #[test]
    fn wildcard_cors_is_a_warning() {
        let mut cfg = Config::default();
        cfg.server.cors.allowed_origins = vec!["*".into()];
        let issues = cfg.validate();
        assert!(issues
            .iter()
            .any(|i| i.severity == ConfigSeverity::Warning));
    }
}
