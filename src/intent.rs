//! Detection of comparison intent in a query.

use serde::{Deserialize, Serialize};

/// Words and phrases that mark a query as asking for a comparison.
pub const DEFAULT_COMPARISON_TRIGGERS: &[&str] = &[
  "compare",
  "comparison",
  "versus",
  "vs",
  "difference",
  "better",
  "faster",
  "efficient",
  "which is",
];

/// Classifies a query as a comparison request by plain substring containment
/// of any trigger phrase.
///
/// Containment is not word-bounded, so `"vs"` also fires inside words such as
/// `"obvs"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ComparisonIntent {
  triggers: Vec<String>,
}

impl ComparisonIntent {
  /// Creates a detector with custom triggers. Triggers are lowercased and
  /// blank ones are dropped.
  pub fn new<I, S>(triggers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      triggers: triggers
        .into_iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| !t.trim().is_empty())
        .collect(),
    }
  }

  /// A detector that never fires.
  pub fn disabled() -> Self {
    Self {
      triggers: Vec::new(),
    }
  }

  /// Returns the first trigger contained in the already-lowercased query.
  pub fn trigger<'a>(&'a self, normalized_query: &str) -> Option<&'a str> {
    self
      .triggers
      .iter()
      .find(|t| normalized_query.contains(t.as_str()))
      .map(String::as_str)
  }

  pub fn detect(&self, normalized_query: &str) -> bool {
    self.trigger(normalized_query).is_some()
  }

  pub fn triggers(&self) -> &[String] {
    &self.triggers
  }
}

impl Default for ComparisonIntent {
  fn default() -> Self {
    Self::new(DEFAULT_COMPARISON_TRIGGERS)
  }
}

impl From<Vec<String>> for ComparisonIntent {
  fn from(triggers: Vec<String>) -> Self {
    Self::new(triggers)
  }
}

impl From<ComparisonIntent> for Vec<String> {
  fn from(intent: ComparisonIntent) -> Self {
    intent.triggers
  }
}
