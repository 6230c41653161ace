use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scoring weights and selection limits for the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub audience_match_points: f64,
    pub wildcard_points: f64,
    pub saved_topic_points: f64,
    pub foundational_points: f64,
    pub foundational_topic: String,
    pub max_results: usize,
    /// Below this many candidates the primary-tag diversity rule is relaxed.
    pub diversity_min_pool: usize,
    pub max_jitter: f64,
    pub jitter: JitterMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            audience_match_points: 50.0,
            wildcard_points: 10.0,
            saved_topic_points: 30.0,
            foundational_points: 15.0,
            foundational_topic: "Basics".to_string(),
            max_results: 3,
            diversity_min_pool: 5,
            max_jitter: 5.0,
            jitter: JitterMode::Off,
        }
    }
}

/// Source of the tie-break addend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum JitterMode {
    #[default]
    Off,
    Seeded {
        seed: u64,
    },
    Entropy,
}

impl fmt::Display for JitterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JitterMode::Off => f.write_str("off"),
            JitterMode::Seeded { seed } => write!(f, "seeded:{seed}"),
            JitterMode::Entropy => f.write_str("entropy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("jitter mode must be 'off', 'entropy' or 'seeded:<u64>' (got '{0}')")]
pub struct JitterModeParseError(pub String);

impl FromStr for JitterMode {
    type Err = JitterModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "off" | "none" | "0" => return Ok(Self::Off),
            "entropy" | "random" => return Ok(Self::Entropy),
            _ => {}
        }

        normalized
            .strip_prefix("seeded:")
            .and_then(|seed| seed.trim().parse::<u64>().ok())
            .map(|seed| Self::Seeded { seed })
            .ok_or_else(|| JitterModeParseError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_mode_round_trips_through_display() {
        for mode in [
            JitterMode::Off,
            JitterMode::Entropy,
            JitterMode::Seeded { seed: 42 },
        ] {
            assert_eq!(mode.to_string().parse::<JitterMode>(), Ok(mode));
        }
        assert!("seeded:abc".parse::<JitterMode>().is_err());
        assert!("loud".parse::<JitterMode>().is_err());
    }

    #[test]
    fn defaults_match_documented_weights() {
        let config = EngineConfig::default();
        assert_eq!(config.audience_match_points, 50.0);
        assert_eq!(config.wildcard_points, 10.0);
        assert_eq!(config.saved_topic_points, 30.0);
        assert_eq!(config.foundational_points, 15.0);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.jitter, JitterMode::Off);
    }
}
