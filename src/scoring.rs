//! Scoring rules for matching a query against one catalog entry.

use crate::fuzzy::FuzzyStrategy;
use crate::types::{Algorithm, AlgorithmMatch, MatchDetail};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which kind of request a score is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
  /// Looking up a single algorithm.
  Single,
  /// Picking the algorithms to place side by side.
  Comparison,
}

/// Weights and thresholds for scoring.
///
/// For a lowercased query `q` and a catalog entry:
///
/// * `name_weight` when `q` contains the entry's lowercased name,
/// * for each keyword contained in `q`, `long_keyword_weight` when the keyword
///   has at least `long_keyword_min_chars` characters, `short_keyword_weight`
///   otherwise,
/// * for each keyword not contained in `q` that the `fuzzy` strategy accepts,
///   `fuzzy_weight`.
///
/// Scoring is presence based: repeating a keyword in the query does not add
/// to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
  pub name_weight: u32,
  pub long_keyword_weight: u32,
  pub short_keyword_weight: u32,
  pub long_keyword_min_chars: usize,
  pub fuzzy_weight: u32,
  pub fuzzy: FuzzyStrategy,
  /// Whether the fuzzy fallback also applies in [`ScoreMode::Comparison`].
  pub comparison_fuzzy: bool,
}

impl Default for ScoringRules {
  fn default() -> Self {
    Self {
      name_weight: 10,
      long_keyword_weight: 6,
      short_keyword_weight: 4,
      long_keyword_min_chars: 6,
      fuzzy_weight: 3,
      fuzzy: FuzzyStrategy::default(),
      comparison_fuzzy: false,
    }
  }
}

impl ScoringRules {
  /// Sets the weight for name containment.
  pub fn name_weight(mut self, weight: u32) -> Self {
    self.name_weight = weight;
    self
  }

  /// Sets the weights for long and short exact keyword matches.
  pub fn keyword_weights(mut self, long: u32, short: u32) -> Self {
    self.long_keyword_weight = long;
    self.short_keyword_weight = short;
    self
  }

  /// Sets the minimum character count of a "long" keyword.
  pub fn long_keyword_min_chars(mut self, chars: usize) -> Self {
    self.long_keyword_min_chars = chars;
    self
  }

  /// Sets the weight for a fuzzy keyword match.
  pub fn fuzzy_weight(mut self, weight: u32) -> Self {
    self.fuzzy_weight = weight;
    self
  }

  /// Sets the fuzzy strategy.
  pub fn fuzzy(mut self, strategy: FuzzyStrategy) -> Self {
    self.fuzzy = strategy;
    self
  }

  /// Enables or disables the fuzzy fallback for comparison scoring.
  pub fn comparison_fuzzy(mut self, enabled: bool) -> Self {
    self.comparison_fuzzy = enabled;
    self
  }

  fn fuzzy_enabled(&self, mode: ScoreMode) -> bool {
    match mode {
      ScoreMode::Single => true,
      ScoreMode::Comparison => self.comparison_fuzzy,
    }
  }

  /// Scores one catalog entry.
  ///
  /// # Arguments
  ///
  /// * `normalized_query` - The query, already lowercased.
  /// * `algorithm` - The entry to score.
  /// * `index` - The entry's position in catalog order.
  /// * `keywords` - The entry's keywords; pass an empty slice when it has none.
  /// * `mode` - Whether the fuzzy fallback may be consulted.
  pub fn score<'a>(
    &self,
    normalized_query: &str,
    algorithm: &'a Algorithm,
    index: usize,
    keywords: &[String],
    mode: ScoreMode,
  ) -> AlgorithmMatch<'a> {
    let mut m = AlgorithmMatch::new(algorithm, index);

    let name = algorithm.name.to_lowercase();
    if !name.trim().is_empty() && normalized_query.contains(&name) {
      m.add(MatchDetail::Name {
        name,
        weight: self.name_weight,
      });
    }

    let fuzzy = self.fuzzy_enabled(mode);

    for keyword in keywords {
      let lowered = keyword.to_lowercase();
      if lowered.trim().is_empty() {
        continue;
      }

      if normalized_query.contains(&lowered) {
        let weight = if lowered.chars().count() >= self.long_keyword_min_chars {
          self.long_keyword_weight
        } else {
          self.short_keyword_weight
        };
        m.add(MatchDetail::Keyword {
          keyword: keyword.clone(),
          weight,
        });
      } else if fuzzy && self.fuzzy.matches(normalized_query, &lowered) {
        m.add(MatchDetail::Fuzzy {
          keyword: keyword.clone(),
          weight: self.fuzzy_weight,
        });
      }
    }

    trace!(id = %algorithm.id, score = m.score, ?mode, "Scored algorithm");
    m
  }
}
