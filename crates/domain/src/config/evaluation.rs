use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Evaluation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which evaluation provider generates scores and feedback for reports.
///
/// Only the mock (random) provider ships today; the variant enum exists
/// so a real AI-backed provider can be configured without touching the
/// store or the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationProvider {
    #[default]
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub provider: EvaluationProvider,
    /// Lowest score the mock provider will hand out.
    #[serde(default = "d_score_floor")]
    pub score_floor: u8,
    /// Highest score the mock provider will hand out (≤ 100).
    #[serde(default = "d_score_ceiling")]
    pub score_ceiling: u8,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            provider: EvaluationProvider::Mock,
            score_floor: d_score_floor(),
            score_ceiling: d_score_ceiling(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_score_floor() -> u8 {
    60
}
fn d_score_ceiling() -> u8 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_mock_provider() {
        let cfg: EvaluationConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.provider, EvaluationProvider::Mock);
        assert_eq!(cfg.score_floor, 60);
        assert_eq!(cfg.score_ceiling, 100);
    }

    #[test]
    fn parses_explicit_provider() {
        let cfg: EvaluationConfig = toml::from_str(r#"provider = "mock""#).unwrap();
        assert_eq!(cfg.provider, EvaluationProvider::Mock);
    }
}
