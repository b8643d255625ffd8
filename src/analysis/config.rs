//! Analyzer tuning: match weights, result limits and key-relevance scores
//!
//! Every field has a default, so a YAML document (or JS object) only needs
//! to name what it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theory::KeyRelation;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid analyzer config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid analyzer config: {0}")]
    Invalid(String),
}

/// Which key progression relevance is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAnchor {
    /// First key in table order containing any input chord
    #[default]
    FirstContaining,
    /// Top-ranked scale match for the input
    BestScale,
}

/// Score for each key relation, in priority order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceWeights {
    pub exact: f64,
    pub relative: f64,
    pub enharmonic: f64,
    pub parallel: f64,
    pub weak: f64,
    pub unrelated: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            exact: 1.5,
            relative: 1.0,
            enharmonic: 0.8,
            parallel: 0.6,
            weak: -0.5,
            unrelated: -1.0,
        }
    }
}

impl RelevanceWeights {
    pub fn score(&self, relation: KeyRelation) -> f64 {
        match relation {
            KeyRelation::Same => self.exact,
            KeyRelation::Relative => self.relative,
            KeyRelation::Enharmonic => self.enharmonic,
            KeyRelation::Parallel => self.parallel,
            KeyRelation::Weak => self.weak,
            KeyRelation::Unrelated => self.unrelated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub exact_match_weight: f64,
    pub enharmonic_match_weight: f64,
    /// Added to plain major / natural minor keys that matched at least one chord
    pub purity_bonus: f64,
    pub max_suggestions: usize,
    pub max_progressions: usize,
    pub key_anchor: KeyAnchor,
    pub relevance: RelevanceWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exact_match_weight: 1.0,
            enharmonic_match_weight: 0.9,
            purity_bonus: 0.1,
            max_suggestions: 3,
            max_progressions: 5,
            key_anchor: KeyAnchor::default(),
            relevance: RelevanceWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// An exact match must be worth more than an enharmonic one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enharmonic_match_weight <= 0.0 {
            return Err(ConfigError::Invalid(
                "enharmonic_match_weight must be positive".to_string(),
            ));
        }
        if self.exact_match_weight <= self.enharmonic_match_weight {
            return Err(ConfigError::Invalid(format!(
                "exact_match_weight ({}) must exceed enharmonic_match_weight ({})",
                self.exact_match_weight, self.enharmonic_match_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.exact_match_weight, 1.0);
        assert_eq!(config.enharmonic_match_weight, 0.9);
        assert_eq!(config.max_progressions, 5);
        assert_eq!(config.key_anchor, KeyAnchor::FirstContaining);
        assert_eq!(config.relevance.score(KeyRelation::Same), 1.5);
        assert_eq!(config.relevance.score(KeyRelation::Unrelated), -1.0);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "max_suggestions: 2\nkey_anchor: best_scale\nrelevance:\n  weak: -0.25\n";
        let config = AnalyzerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_suggestions, 2);
        assert_eq!(config.key_anchor, KeyAnchor::BestScale);
        assert_eq!(config.relevance.weak, -0.25);
        assert_eq!(config.relevance.exact, 1.5);
        assert_eq!(config.purity_bonus, 0.1);
    }

    #[test]
    fn test_rejects_inverted_weights() {
        let yaml = "exact_match_weight: 0.5\nenharmonic_match_weight: 0.9\n";
        assert!(matches!(AnalyzerConfig::from_yaml(yaml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_yaml() {
        assert!(matches!(AnalyzerConfig::from_yaml("max_suggestions: [1"), Err(ConfigError::Yaml(_))));
    }
}
