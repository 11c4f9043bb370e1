//! The algorithm catalog and its keyword index.

use crate::types::{Algorithm, AlgorithmId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("Failed to read catalog: {0}")]
  ReadError(#[from] std::io::Error),

  #[error("Failed to parse catalog: {0}")]
  ParseError(#[from] serde_json::Error),

  #[error("Algorithm at position {0} has an empty id")]
  EmptyId(usize),

  #[error("Algorithm '{0}' has an empty name")]
  EmptyName(AlgorithmId),

  #[error("Duplicate algorithm id '{0}'")]
  DuplicateId(AlgorithmId),

  #[error("Keyword index references unknown algorithm '{0}'")]
  UnknownKeywordId(AlgorithmId),
}

/// Catalog format version written by this crate.
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format: the algorithms plus their keyword lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
  #[serde(default = "default_version")]
  pub version: String,
  pub algorithms: Vec<Algorithm>,
  #[serde(default)]
  pub keywords: HashMap<AlgorithmId, Vec<String>>,
}

fn default_version() -> String {
  CATALOG_VERSION.to_string()
}

impl CatalogData {
  /// Validates the data and splits it into a catalog and a keyword index.
  ///
  /// Keyword lists naming an id that is not in the catalog are rejected. A
  /// catalog entry without keywords is accepted with a warning; it can still
  /// match by name.
  pub fn into_parts(self) -> Result<(Catalog, KeywordIndex), CatalogError> {
    let catalog = Catalog::new(self.algorithms)?;
    let keywords = KeywordIndex::new(self.keywords);

    if let Some(unknown) = keywords
      .ids()
      .filter(|id| !catalog.contains(id))
      .min()
    {
      return Err(CatalogError::UnknownKeywordId(unknown.clone()));
    }

    for algorithm in catalog.iter() {
      if !keywords.contains(&algorithm.id) {
        warn!(id = %algorithm.id, "Algorithm has no keyword entry; it can only match by name");
      }
    }

    info!(
      algorithms = catalog.len(),
      keyword_lists = keywords.len(),
      "Loaded algorithm catalog"
    );

    Ok((catalog, keywords))
  }

  /// Parse catalog data from a JSON string.
  pub fn from_json(json: &str) -> Result<(Catalog, KeywordIndex), CatalogError> {
    let data: CatalogData = serde_json::from_str(json)?;
    data.into_parts()
  }

  /// Load catalog data from a JSON file.
  pub fn load_from_file(path: &Path) -> Result<(Catalog, KeywordIndex), CatalogError> {
    let content = std::fs::read_to_string(path)?;
    Self::from_json(&content)
  }

  /// Load the catalog embedded in the crate.
  pub fn load_embedded() -> Result<(Catalog, KeywordIndex), CatalogError> {
    Self::from_json(crate::builtin::EMBEDDED_CATALOG)
  }
}

/// An ordered, read-only collection of algorithms.
///
/// Iteration order is the order the algorithms were supplied in and is the
/// tie-break order for equal scores.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  algorithms: Vec<Algorithm>,
  /// Index: algorithm id -> position in `algorithms`
  id_to_index: HashMap<AlgorithmId, usize>,
}

impl Catalog {
  /// Builds a catalog, rejecting empty ids, empty names and duplicate ids.
  pub fn new(algorithms: Vec<Algorithm>) -> Result<Self, CatalogError> {
    let mut id_to_index = HashMap::with_capacity(algorithms.len());

    for (index, algorithm) in algorithms.iter().enumerate() {
      if algorithm.id.trim().is_empty() {
        return Err(CatalogError::EmptyId(index));
      }
      if algorithm.name.trim().is_empty() {
        return Err(CatalogError::EmptyName(algorithm.id.clone()));
      }
      if id_to_index.insert(algorithm.id.clone(), index).is_some() {
        return Err(CatalogError::DuplicateId(algorithm.id.clone()));
      }
    }

    Ok(Self {
      algorithms,
      id_to_index,
    })
  }

  /// Get an algorithm by id.
  pub fn get(&self, id: &str) -> Option<&Algorithm> {
    self.id_to_index.get(id).map(|&index| &self.algorithms[index])
  }

  /// Position of an algorithm in catalog order.
  pub fn position(&self, id: &str) -> Option<usize> {
    self.id_to_index.get(id).copied()
  }

  pub fn contains(&self, id: &str) -> bool {
    self.id_to_index.contains_key(id)
  }

  /// Iterate the algorithms in catalog order.
  pub fn iter(&self) -> std::slice::Iter<'_, Algorithm> {
    self.algorithms.iter()
  }

  pub fn as_slice(&self) -> &[Algorithm] {
    &self.algorithms
  }

  pub fn len(&self) -> usize {
    self.algorithms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.algorithms.is_empty()
  }
}

impl<'a> IntoIterator for &'a Catalog {
  type Item = &'a Algorithm;
  type IntoIter = std::slice::Iter<'a, Algorithm>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Maps each algorithm id to its ordered list of trigger phrases.
///
/// Phrases are stored as authored; matching lowercases them. An id with no
/// entry behaves exactly like an id with an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordIndex {
  entries: HashMap<AlgorithmId, Vec<String>>,
}

impl KeywordIndex {
  pub fn new(entries: HashMap<AlgorithmId, Vec<String>>) -> Self {
    Self { entries }
  }

  /// Adds or replaces the keyword list for an algorithm.
  pub fn insert<I, S>(&mut self, id: impl Into<AlgorithmId>, keywords: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .entries
      .insert(id.into(), keywords.into_iter().map(Into::into).collect());
  }

  /// Builder-style variant of [`KeywordIndex::insert`].
  pub fn with<I, S>(mut self, id: impl Into<AlgorithmId>, keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.insert(id, keywords);
    self
  }

  /// The keywords for `id`, or an empty slice when the id has no entry.
  pub fn keywords_for(&self, id: &str) -> &[String] {
    self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn contains(&self, id: &str) -> bool {
    self.entries.contains_key(id)
  }

  pub fn ids(&self) -> impl Iterator<Item = &AlgorithmId> {
    self.entries.keys()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<(AlgorithmId, Vec<String>)> for KeywordIndex {
  fn from_iter<I: IntoIterator<Item = (AlgorithmId, Vec<String>)>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
