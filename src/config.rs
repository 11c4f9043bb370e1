//! Matcher configuration loaded from JSON.

use crate::fuzzy::FuzzyStrategy;
use crate::intent::ComparisonIntent;
use crate::scoring::ScoringRules;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config: {0}")]
  ReadError(#[from] std::io::Error),

  #[error("Failed to parse config: {0}")]
  ParseError(#[from] serde_json::Error),

  #[error("Character overlap percent must be between 1 and 100, got {0}")]
  InvalidOverlapPercent(u32),

  #[error("Jaro-Winkler threshold must be in (0, 1], got {0}")]
  InvalidSimilarityThreshold(f64),
}

/// Everything that tunes a [`QueryMatcher`](crate::matcher::QueryMatcher)
/// apart from the catalog itself.
///
/// Every field is optional in JSON; omitted fields keep their defaults.
///
/// ```json
/// {
///   "scoring": { "fuzzy": { "strategy": "character_overlap", "percent": 80 } },
///   "comparison_triggers": ["compare", "vs"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
  pub scoring: ScoringRules,
  pub comparison_triggers: ComparisonIntent,
}

impl MatcherConfig {
  /// Parse and validate a config from a JSON string.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Load a config from a JSON file.
  pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Self::from_json(&content)
  }

  /// Checks the fuzzy strategy parameters.
  pub fn validate(&self) -> Result<(), ConfigError> {
    match self.scoring.fuzzy {
      FuzzyStrategy::CharacterOverlap { percent } if !(1..=100).contains(&percent) => {
        Err(ConfigError::InvalidOverlapPercent(percent))
      }
      #[cfg(feature = "fuzzy")]
      FuzzyStrategy::JaroWinkler { threshold } if !(threshold > 0.0 && threshold <= 1.0) => {
        Err(ConfigError::InvalidSimilarityThreshold(threshold))
      }
      _ => Ok(()),
    }
  }

  /// Sets the scoring rules.
  pub fn scoring(mut self, scoring: ScoringRules) -> Self {
    self.scoring = scoring;
    self
  }

  /// Sets the comparison-intent detector.
  pub fn comparison_triggers(mut self, intent: ComparisonIntent) -> Self {
    self.comparison_triggers = intent;
    self
  }
}
