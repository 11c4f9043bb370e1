use algomatch::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG_JSON: &str = r#"{
  "version": "1.0.0",
  "algorithms": [
    { "id": "depth-first-search", "name": "Depth First Search", "category": "graph" },
    { "id": "dijkstra", "name": "Dijkstra's Algorithm", "category": "graph" }
  ],
  "keywords": {
    "depth-first-search": ["dfs", "depth first", "backtracking"],
    "dijkstra": ["shortest path", "dijkstra", "weighted graph"]
  }
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(contents.as_bytes()).unwrap();
  file
}

#[test]
fn test_load_catalog_from_file() {
  let file = write_temp(CATALOG_JSON);
  let (catalog, keywords) = CatalogData::load_from_file(file.path()).unwrap();
  assert_eq!(catalog.len(), 2);
  assert_eq!(keywords.keywords_for("dijkstra").len(), 3);

  let matcher = QueryMatcher::new(catalog, keywords);
  let found = matcher.match_single("find the shortest path in a weighted graph").unwrap();
  assert_eq!(found.id, "dijkstra");
  assert_eq!(found.category, Category::Graph);
}

#[test]
fn test_load_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let err = CatalogData::load_from_file(&dir.path().join("missing.json")).unwrap_err();
  assert!(matches!(err, CatalogError::ReadError(_)));
}

#[test]
fn test_load_malformed_catalog() {
  let file = write_temp(r#"{ "algorithms": [{ "id": "x" }] }"#);
  let err = CatalogData::load_from_file(file.path()).unwrap_err();
  assert!(matches!(err, CatalogError::ParseError(_)));
}

#[test]
fn test_config_from_file_drives_matcher() {
  let config = write_temp(
    r#"{
      "scoring": { "fuzzy": { "strategy": "disabled" } },
      "comparison_triggers": ["contrast"]
    }"#,
  );
  let config = MatcherConfig::load_from_file(config.path()).unwrap();

  let (catalog, keywords) = CatalogData::from_json(CATALOG_JSON).unwrap();
  let matcher = QueryMatcher::builder()
    .catalog(catalog)
    .keywords(keywords)
    .config(config)
    .build();

  assert!(!matcher.is_comparison("compare dfs and dijkstra"));
  assert_eq!(
    matcher.match_single("compare dfs and dijkstra").map(|a| a.id.as_str()),
    Some("dijkstra")
  );

  let pair = matcher.match_comparison("contrast dfs with dijkstra");
  let ids: Vec<&str> = pair.iter().map(|a| a.id.as_str()).collect();
  assert_eq!(ids, vec!["dijkstra", "depth-first-search"]);
}
