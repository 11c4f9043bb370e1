//! Core data types for the algorithm matcher.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type alias for algorithm identifiers.
///
/// Identifiers are slug-style strings such as `"bubble-sort"` and are unique
/// across a catalog.
pub type AlgorithmId = String;

/// The closed set of categories an algorithm can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Sorting,
  Searching,
  Tree,
  Graph,
  Other,
}

/// An algorithm record supplied by the hosting application.
///
/// The matcher only reads `id` and `name`. Every other field is carried through
/// untouched for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Algorithm {
  /// Stable slug-style identifier.
  pub id: AlgorithmId,
  /// Human-readable display name. Containment of the lowercased name in a
  /// query is the strongest matching signal.
  pub name: String,
  pub category: Category,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub time_complexity: String,
  #[serde(default)]
  pub space_complexity: String,
  /// Source code shown next to the visualization.
  #[serde(default)]
  pub code: String,
  /// A real-world application of the algorithm, if known.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub use_case: Option<String>,
  /// The ordered sequence of visualization steps.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub steps: Vec<VisualizationStep>,
}

impl Algorithm {
  /// Creates an algorithm record with only the fields the matcher needs.
  pub fn new(id: impl Into<AlgorithmId>, name: impl Into<String>, category: Category) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      category,
      description: String::new(),
      time_complexity: String::new(),
      space_complexity: String::new(),
      code: String::new(),
      use_case: None,
      steps: Vec::new(),
    }
  }

  /// Sets the description.
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  /// Sets the time and space complexity annotations.
  pub fn with_complexity(mut self, time: impl Into<String>, space: impl Into<String>) -> Self {
    self.time_complexity = time.into();
    self.space_complexity = space.into();
    self
  }

  /// Sets the real-world use case.
  pub fn with_use_case(mut self, use_case: impl Into<String>) -> Self {
    self.use_case = Some(use_case.into());
    self
  }

  /// Appends a visualization step.
  pub fn with_step(mut self, step: VisualizationStep) -> Self {
    self.steps.push(step);
    self
  }
}

/// Highlight state of a visualized array cell, tree node or graph node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
  #[default]
  Default,
  Visited,
  Current,
  Highlighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayElement {
  pub value: i64,
  #[serde(default)]
  pub state: NodeState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
  pub value: i64,
  #[serde(default)]
  pub state: NodeState,
  #[serde(default)]
  pub left: Option<Box<TreeNode>>,
  #[serde(default)]
  pub right: Option<Box<TreeNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
  pub id: String,
  /// Node label; either a string or a number in the source data.
  pub value: serde_json::Value,
  #[serde(default)]
  pub state: NodeState,
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub source: String,
  pub target: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
  pub nodes: Vec<GraphNode>,
  pub edges: Vec<GraphEdge>,
}

/// A single frame of an algorithm visualization.
///
/// Exactly which of `array`, `tree` and `graph` is populated depends on the
/// algorithm's category; the matcher never inspects any of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationStep {
  pub explanation: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub array: Option<Vec<ArrayElement>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tree: Option<TreeNode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub graph: Option<Graph>,
  /// Named indices into `array` (e.g. `low`, `mid`, `high`).
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub pointers: BTreeMap<String, i64>,
  /// Free-form variable snapshot shown beside the visualization.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub variables: BTreeMap<String, serde_json::Value>,
}

/// A scored catalog entry, the result of matching one algorithm against a query.
///
/// Scores are non-negative integers; the `details` list explains which rule
/// contributed which part of the score.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmMatch<'a> {
  /// The catalog entry that was scored.
  pub algorithm: &'a Algorithm,
  /// Sum of every rule that fired for this entry.
  pub score: u32,
  /// Position of the entry in catalog iteration order. Used for tie-breaking.
  pub index: usize,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub details: Vec<MatchDetail>,
}

impl<'a> AlgorithmMatch<'a> {
  /// Creates a zero-score match for the entry at `index`.
  pub fn new(algorithm: &'a Algorithm, index: usize) -> Self {
    Self {
      algorithm,
      score: 0,
      index,
      details: Vec::new(),
    }
  }

  /// Records a fired rule and adds its weight to the score.
  pub fn add(&mut self, detail: MatchDetail) {
    self.score = self.score.saturating_add(detail.weight());
    self.details.push(detail);
  }
}

/// Which scoring rule fired for an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchDetail {
  /// The query contains the algorithm's display name.
  Name { name: String, weight: u32 },
  /// The query contains a keyword verbatim.
  Keyword { keyword: String, weight: u32 },
  /// A keyword was only approximately present.
  Fuzzy { keyword: String, weight: u32 },
}

impl MatchDetail {
  /// The number of points this rule contributed.
  pub fn weight(&self) -> u32 {
    match self {
      MatchDetail::Name { weight, .. }
      | MatchDetail::Keyword { weight, .. }
      | MatchDetail::Fuzzy { weight, .. } => *weight,
    }
  }
}

/// The outcome of resolving a query against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
  /// A single algorithm best matches the query.
  Single(&'a Algorithm),
  /// The query asks for a comparison; holds one or two entries in descending
  /// score order.
  Comparison(Vec<&'a Algorithm>),
  /// Nothing in the catalog scored above zero.
  NoMatch,
}

impl<'a> Resolution<'a> {
  /// The primary algorithm of the resolution, if any.
  pub fn primary(&self) -> Option<&'a Algorithm> {
    match self {
      Resolution::Single(algorithm) => Some(algorithm),
      Resolution::Comparison(algorithms) => algorithms.first().copied(),
      Resolution::NoMatch => None,
    }
  }

  pub fn is_match(&self) -> bool {
    !matches!(self, Resolution::NoMatch)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_algorithm_json_shape() {
    let json = r#"{
      "id": "bubble-sort",
      "name": "Bubble Sort",
      "category": "sorting",
      "timeComplexity": "O(n^2)",
      "steps": [
        {
          "explanation": "start",
          "array": [{ "value": 3, "state": "current" }, { "value": 1 }],
          "variables": { "swapped": false }
        }
      ]
    }"#;

    let algorithm: Algorithm = serde_json::from_str(json).unwrap();
    assert_eq!(algorithm.category, Category::Sorting);
    assert_eq!(algorithm.time_complexity, "O(n^2)");
    assert!(algorithm.space_complexity.is_empty());

    let array = algorithm.steps[0].array.as_ref().unwrap();
    assert_eq!(array[0].state, NodeState::Current);
    assert_eq!(array[1].state, NodeState::Default);
    assert_eq!(
      algorithm.steps[0].variables.get("swapped"),
      Some(&serde_json::Value::Bool(false))
    );
    assert!(algorithm.use_case.is_none());
  }

  #[test]
  fn test_use_case_serializes_camel_case() {
    let algorithm = Algorithm::new("quick-sort", "Quick Sort", Category::Sorting)
      .with_use_case("Default sort in many standard libraries");
    let value = serde_json::to_value(&algorithm).unwrap();
    assert_eq!(value["useCase"], "Default sort in many standard libraries");

    let bare = serde_json::to_value(Algorithm::new("a", "A", Category::Other)).unwrap();
    assert!(bare.get("useCase").is_none());
  }

  #[test]
  fn test_match_accumulates_detail_weights() {
    let algorithm = Algorithm::new("heap-sort", "Heap Sort", Category::Sorting);
    let mut m = AlgorithmMatch::new(&algorithm, 5);
    m.add(MatchDetail::Name { name: "heap sort".into(), weight: 10 });
    m.add(MatchDetail::Fuzzy { keyword: "heapsort".into(), weight: 3 });

    assert_eq!(m.score, 13);
    assert_eq!(m.details.len(), 2);
    assert_eq!(m.index, 5);
  }

  #[test]
  fn test_resolution_primary() {
    let a = Algorithm::new("a", "A", Category::Other);
    let b = Algorithm::new("b", "B", Category::Other);

    assert_eq!(Resolution::Single(&a).primary().map(|x| x.id.as_str()), Some("a"));
    assert_eq!(
      Resolution::Comparison(vec![&b, &a]).primary().map(|x| x.id.as_str()),
      Some("b")
    );
    assert!(Resolution::NoMatch.primary().is_none());
    assert!(!Resolution::NoMatch.is_match());
  }
}
