//! The query matcher that maps free text onto catalog entries.

use crate::catalog::{Catalog, CatalogData, CatalogError, KeywordIndex};
use crate::config::MatcherConfig;
use crate::intent::ComparisonIntent;
use crate::scoring::{ScoreMode, ScoringRules};
use crate::types::{Algorithm, AlgorithmMatch, Resolution};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The maximum number of algorithms a comparison returns.
pub const MAX_COMPARISON_RESULTS: usize = 2;

/// Maps free-text queries onto a catalog of algorithms.
///
/// `QueryMatcher` owns an immutable catalog, keyword index, scoring rules and
/// comparison-intent detector. Every operation is a pure function of those and
/// the query, so a matcher can be shared across threads and queried
/// concurrently.
///
/// Create one with [`QueryMatcher::builder`] or [`QueryMatcher::with_builtin`].
///
/// # Examples
///
/// ```rust
/// use algomatch::prelude::*;
///
/// let catalog = Catalog::new(vec![
///     Algorithm::new("bubble-sort", "Bubble Sort", Category::Sorting),
///     Algorithm::new("quick-sort", "Quick Sort", Category::Sorting),
/// ])
/// .unwrap();
/// let keywords = KeywordIndex::default()
///     .with("bubble-sort", ["bubble sort", "bubble", "swap"])
///     .with("quick-sort", ["quick sort", "quicksort", "pivot"]);
///
/// let matcher = QueryMatcher::builder()
///     .catalog(catalog)
///     .keywords(keywords)
///     .build();
///
/// let found = matcher.match_single("How does bubble sort work?").unwrap();
/// assert_eq!(found.id, "bubble-sort");
///
/// let pair = matcher.match_comparison("compare bubble sort vs quick sort");
/// assert_eq!(pair.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryMatcher {
  catalog: Catalog,
  keywords: KeywordIndex,
  rules: ScoringRules,
  intent: ComparisonIntent,
}

impl QueryMatcher {
  /// Creates a new `QueryMatcherBuilder` to construct a matcher.
  pub fn builder() -> QueryMatcherBuilder {
    QueryMatcherBuilder::new()
  }

  /// Creates a matcher over the given catalog with default rules.
  pub fn new(catalog: Catalog, keywords: KeywordIndex) -> Self {
    Self::builder().catalog(catalog).keywords(keywords).build()
  }

  /// Creates a matcher over the catalog embedded in the crate.
  pub fn with_builtin() -> Result<Self, CatalogError> {
    let (catalog, keywords) = CatalogData::load_embedded()?;
    Ok(Self::new(catalog, keywords))
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn keywords(&self) -> &KeywordIndex {
    &self.keywords
  }

  pub fn rules(&self) -> &ScoringRules {
    &self.rules
  }

  pub fn intent(&self) -> &ComparisonIntent {
    &self.intent
  }

  /// Returns whether the query asks for a comparison.
  pub fn is_comparison(&self, query: &str) -> bool {
    self.intent.detect(&query.to_lowercase())
  }

  /// Finds the single algorithm that best matches `query`.
  ///
  /// Comparison queries return the top entry of [`QueryMatcher::match_comparison`].
  /// Otherwise every entry is scored and the highest score wins, the earliest
  /// entry in catalog order winning ties. Returns `None` when nothing scores
  /// above zero.
  pub fn match_single(&self, query: &str) -> Option<&Algorithm> {
    let normalized = query.to_lowercase();

    if let Some(trigger) = self.intent.trigger(&normalized) {
      debug!(trigger, "Comparison intent detected");
      return self.compare_normalized(&normalized).into_iter().next();
    }

    let best = self
      .rank_normalized(&normalized, ScoreMode::Single)
      .into_iter()
      .next()
      .map(|m| m.algorithm);

    debug!(
      query = %normalized,
      matched = best.map(|a| a.id.as_str()),
      "Resolved single query"
    );
    best
  }

  /// Finds up to two algorithms to compare, in descending score order.
  ///
  /// Only entries scoring above zero are returned, so the result has fewer
  /// than two entries when fewer than two algorithms are mentioned.
  pub fn match_comparison(&self, query: &str) -> Vec<&Algorithm> {
    self.compare_normalized(&query.to_lowercase())
  }

  /// Resolves a query into a single match, a comparison, or nothing.
  pub fn resolve(&self, query: &str) -> Resolution<'_> {
    let normalized = query.to_lowercase();

    if self.intent.detect(&normalized) {
      let algorithms = self.compare_normalized(&normalized);
      if algorithms.is_empty() {
        return Resolution::NoMatch;
      }
      return Resolution::Comparison(algorithms);
    }

    match self.rank_normalized(&normalized, ScoreMode::Single).into_iter().next() {
      Some(m) => Resolution::Single(m.algorithm),
      None => Resolution::NoMatch,
    }
  }

  /// Scores every catalog entry and returns those scoring above zero, sorted
  /// by descending score with ties kept in catalog order.
  pub fn rank(&self, query: &str, mode: ScoreMode) -> Vec<AlgorithmMatch<'_>> {
    self.rank_normalized(&query.to_lowercase(), mode)
  }

  /// Scores a single algorithm against `query`.
  ///
  /// The algorithm need not belong to the catalog; keywords are looked up by
  /// its id either way.
  pub fn score<'a>(&self, query: &str, algorithm: &'a Algorithm, mode: ScoreMode) -> AlgorithmMatch<'a> {
    let index = self
      .catalog
      .position(&algorithm.id)
      .unwrap_or(self.catalog.len());
    self.rules.score(
      &query.to_lowercase(),
      algorithm,
      index,
      self.keywords.keywords_for(&algorithm.id),
      mode,
    )
  }

  fn compare_normalized(&self, normalized: &str) -> Vec<&Algorithm> {
    let algorithms: Vec<&Algorithm> = self
      .rank_normalized(normalized, ScoreMode::Comparison)
      .into_iter()
      .take(MAX_COMPARISON_RESULTS)
      .map(|m| m.algorithm)
      .collect();

    debug!(
      query = %normalized,
      matched = ?algorithms.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
      "Resolved comparison query"
    );
    algorithms
  }

  fn rank_normalized(&self, normalized: &str, mode: ScoreMode) -> Vec<AlgorithmMatch<'_>> {
    let mut matches: Vec<AlgorithmMatch<'_>> = self
      .score_all(normalized, mode)
      .into_iter()
      .filter(|m| m.score > 0)
      .collect();

    // Stable, so equal scores keep catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
  }

  #[cfg(not(feature = "parallel"))]
  fn score_all(&self, normalized: &str, mode: ScoreMode) -> Vec<AlgorithmMatch<'_>> {
    self
      .catalog
      .iter()
      .enumerate()
      .map(|(index, algorithm)| {
        self.rules.score(
          normalized,
          algorithm,
          index,
          self.keywords.keywords_for(&algorithm.id),
          mode,
        )
      })
      .collect()
  }

  #[cfg(feature = "parallel")]
  fn score_all(&self, normalized: &str, mode: ScoreMode) -> Vec<AlgorithmMatch<'_>> {
    // Indexed collect keeps catalog order.
    self
      .catalog
      .as_slice()
      .par_iter()
      .enumerate()
      .map(|(index, algorithm)| {
        self.rules.score(
          normalized,
          algorithm,
          index,
          self.keywords.keywords_for(&algorithm.id),
          mode,
        )
      })
      .collect()
  }
}

/// A builder for creating `QueryMatcher` instances.
///
/// Anything not set falls back to its default: an empty catalog, an empty
/// keyword index, [`ScoringRules::default`] and the default comparison
/// triggers.
#[derive(Debug, Default)]
pub struct QueryMatcherBuilder {
  catalog: Option<Catalog>,
  keywords: Option<KeywordIndex>,
  rules: Option<ScoringRules>,
  intent: Option<ComparisonIntent>,
}

impl QueryMatcherBuilder {
  /// Creates a new, empty `QueryMatcherBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the catalog to match against.
  pub fn catalog(mut self, catalog: Catalog) -> Self {
    self.catalog = Some(catalog);
    self
  }

  /// Sets the keyword index.
  pub fn keywords(mut self, keywords: KeywordIndex) -> Self {
    self.keywords = Some(keywords);
    self
  }

  /// Sets the scoring rules.
  pub fn rules(mut self, rules: ScoringRules) -> Self {
    self.rules = Some(rules);
    self
  }

  /// Sets the comparison-intent detector.
  pub fn intent(mut self, intent: ComparisonIntent) -> Self {
    self.intent = Some(intent);
    self
  }

  /// Applies the scoring rules and comparison triggers of a config.
  pub fn config(self, config: MatcherConfig) -> Self {
    self
      .rules(config.scoring)
      .intent(config.comparison_triggers)
  }

  /// Builds the `QueryMatcher`.
  pub fn build(self) -> QueryMatcher {
    QueryMatcher {
      catalog: self.catalog.unwrap_or_default(),
      keywords: self.keywords.unwrap_or_default(),
      rules: self.rules.unwrap_or_default(),
      intent: self.intent.unwrap_or_default(),
    }
  }
}
