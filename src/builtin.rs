//! The catalog shipped with the crate.
//!
//! Eight algorithms with their keyword lists, descriptions and a handful of
//! visualization steps. Load it with [`CatalogData::load_embedded`] or
//! [`QueryMatcher::with_builtin`].
//!
//! [`CatalogData::load_embedded`]: crate::catalog::CatalogData::load_embedded
//! [`QueryMatcher::with_builtin`]: crate::matcher::QueryMatcher::with_builtin

/// The embedded catalog in [`CatalogData`](crate::catalog::CatalogData) JSON format.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Prompts suggested to users who do not know what to ask.
///
/// Some of these name algorithms the embedded catalog does not carry (depth
/// first search, Dijkstra); those resolve to the closest entry or to nothing.
pub const EXAMPLE_QUERIES: &[&str] = &[
  "Show me how binary search works",
  "Visualize bubble sort",
  "Explain quick sort algorithm",
  "How does a binary search tree work?",
  "Show me breadth first search",
  "Compare bubble sort vs quick sort",
  "Explain merge sort with examples",
  "How does heap sort work?",
  "Visualize depth first search",
  "Show me how Dijkstra's algorithm works",
];

/// Study hints shown alongside a visualization.
pub const LEARNING_TIPS: &[&str] = &[
  "Try to trace the algorithm on paper as you watch the visualization",
  "Pay attention to the time and space complexity differences between algorithms",
  "Watch for patterns in how data structures are accessed and modified",
  "Look at edge cases like empty arrays or single elements",
  "Try to predict the next step before clicking forward",
];
