//! Approximate keyword matching for misspelled queries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[cfg(feature = "fuzzy")]
use crate::tokenizer::tokenize;
#[cfg(feature = "fuzzy")]
use strsim::jaro_winkler;

/// Default share of a keyword's characters that must appear in the query.
pub const DEFAULT_OVERLAP_PERCENT: u32 = 70;

/// Default Jaro-Winkler similarity for the token-level strategy.
#[cfg(feature = "fuzzy")]
pub const DEFAULT_JARO_WINKLER_THRESHOLD: f64 = 0.85;

/// How a keyword that is not contained verbatim may still count as present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum FuzzyStrategy {
  /// Character overlap, see [`fuzzy_match`]. `percent` must be in `1..=100`;
  /// a zero percent never matches.
  CharacterOverlap {
    #[serde(default = "default_overlap_percent")]
    percent: u32,
  },
  /// Token-level Jaro-Winkler similarity: every keyword token needs a query
  /// token at least `threshold` similar to it.
  ///
  /// Matches far fewer queries than the overlap heuristic, so switching to it
  /// changes which algorithms are selected.
  #[cfg(feature = "fuzzy")]
  JaroWinkler {
    #[serde(default = "default_jaro_winkler_threshold")]
    threshold: f64,
  },
  /// No fuzzy fallback.
  Disabled,
}

fn default_overlap_percent() -> u32 {
  DEFAULT_OVERLAP_PERCENT
}

#[cfg(feature = "fuzzy")]
fn default_jaro_winkler_threshold() -> f64 {
  DEFAULT_JARO_WINKLER_THRESHOLD
}

impl Default for FuzzyStrategy {
  fn default() -> Self {
    FuzzyStrategy::CharacterOverlap {
      percent: DEFAULT_OVERLAP_PERCENT,
    }
  }
}

impl FuzzyStrategy {
  /// Returns whether `pattern` approximately occurs in `text`.
  ///
  /// Both arguments are expected to be lowercased already.
  pub fn matches(&self, text: &str, pattern: &str) -> bool {
    match *self {
      FuzzyStrategy::CharacterOverlap { percent } => overlap_match(text, pattern, percent),
      #[cfg(feature = "fuzzy")]
      FuzzyStrategy::JaroWinkler { threshold } => token_match(text, pattern, threshold),
      FuzzyStrategy::Disabled => false,
    }
  }
}

/// Coarse misspelling tolerance: succeeds when at least 70% of the pattern's
/// characters, repeats included, occur somewhere in `text`.
///
/// Character order and position are ignored, so this is not an edit distance.
/// Transposed or doubled letters still match (`"bubbel"` covers all of
/// `"bubble"`). Short patterns are prone to false positives: a three character
/// keyword only needs its letters to appear anywhere in the query, and a long
/// query contains most of the alphabet.
pub fn fuzzy_match(text: &str, pattern: &str) -> bool {
  overlap_match(text, pattern, DEFAULT_OVERLAP_PERCENT)
}

fn overlap_match(text: &str, pattern: &str, percent: u32) -> bool {
  let pattern_len = pattern.chars().count();
  if pattern_len == 0 || percent == 0 {
    return false;
  }

  let text_chars: HashSet<char> = text.chars().collect();
  let present = pattern.chars().filter(|c| text_chars.contains(c)).count();

  // present / len >= percent / 100, without rounding
  (present as u64) * 100 >= (percent as u64) * (pattern_len as u64)
}

#[cfg(feature = "fuzzy")]
fn token_match(text: &str, pattern: &str, threshold: f64) -> bool {
  let pattern_terms = tokenize(pattern);
  if pattern_terms.is_empty() {
    return false;
  }
  let text_terms = tokenize(text);

  pattern_terms.iter().all(|pattern_term| {
    text_terms
      .iter()
      .any(|text_term| jaro_winkler(text_term, pattern_term) >= threshold)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_overlap_accepts_misspelling() {
    // b, i, n, a, r present; y missing: 5 of 6.
    assert!(fuzzy_match("how does binar serch work", "binary"));
  }

  #[test]
  fn test_overlap_threshold_is_exact() {
    // 7 of 10 characters is exactly 70%.
    assert!(fuzzy_match("abcdefg", "abcdefghij"));
    assert!(!fuzzy_match("abcdef", "abcdefghij"));
  }

  #[test]
  fn test_overlap_counts_repeated_characters() {
    // Every b counts: 6 of 6.
    assert!(fuzzy_match("bubbel", "bubble"));
    // Three missing b's out of six: 3/6 < 70%.
    assert!(!fuzzy_match("ule", "bubble"));
    assert!(fuzzy_match("quick", "quick"));
  }

  #[test]
  fn test_empty_inputs() {
    assert!(!fuzzy_match("anything", ""));
    assert!(!fuzzy_match("", "bst"));
    assert!(!fuzzy_match("", ""));
  }

  #[test]
  fn test_short_pattern_false_positive() {
    assert!(fuzzy_match("the best way to sort", "bst"));
  }

  #[test]
  fn test_zero_percent_never_matches() {
    let strategy = FuzzyStrategy::CharacterOverlap { percent: 0 };
    assert!(!strategy.matches("", "bubble"));
    assert!(!strategy.matches("bubble", "bubble"));
  }

  #[test]
  fn test_disabled_never_matches() {
    assert!(!FuzzyStrategy::Disabled.matches("binary", "binary"));
  }

  #[cfg(feature = "fuzzy")]
  #[test]
  fn test_jaro_winkler_tokens() {
    let strategy = FuzzyStrategy::JaroWinkler { threshold: 0.85 };
    assert!(strategy.matches("explain quik sort", "quick sort"));
    assert!(!strategy.matches("explain heap", "quick sort"));
    assert!(!strategy.matches("anything", ""));
  }

  #[test]
  fn test_strategy_config_shape() {
    let strategy: FuzzyStrategy =
      serde_json::from_str(r#"{ "strategy": "character_overlap" }"#).unwrap();
    assert_eq!(strategy, FuzzyStrategy::default());

    let strategy: FuzzyStrategy = serde_json::from_str(r#"{ "strategy": "disabled" }"#).unwrap();
    assert_eq!(strategy, FuzzyStrategy::Disabled);
  }
}
