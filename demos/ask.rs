//! Resolves a question against the embedded catalog and explains the result.
//!
//! ```text
//! cargo run --example ask -- "compare bubble sort vs quick sort"
//! RUST_LOG=algomatch=trace cargo run --example ask -- "binar serch"
//! ```

use algomatch::builtin::{EXAMPLE_QUERIES, LEARNING_TIPS};
use algomatch::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("algomatch=warn")))
    .with_target(false)
    .without_time()
    .init();

  let matcher = QueryMatcher::with_builtin()?;

  let args: Vec<String> = std::env::args().skip(1).collect();
  let queries: Vec<String> = if args.is_empty() {
    EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect()
  } else {
    vec![args.join(" ")]
  };

  for (i, query) in queries.iter().enumerate() {
    println!("Query: \"{}\"", query);

    match matcher.resolve(query) {
      Resolution::Single(algorithm) => {
        println!("  → {} ({})", algorithm.name, algorithm.time_complexity);
        if let Some(use_case) = &algorithm.use_case {
          println!("    {}", use_case);
        }
      }
      Resolution::Comparison(algorithms) => {
        let names: Vec<&str> = algorithms.iter().map(|a| a.name.as_str()).collect();
        println!("  → compare {}", names.join(" vs "));
      }
      Resolution::NoMatch => {
        println!("  → couldn't identify an algorithm");
      }
    }

    let mode = if matcher.is_comparison(query) {
      ScoreMode::Comparison
    } else {
      ScoreMode::Single
    };

    for m in matcher.rank(query, mode).iter().take(3) {
      println!("    {:>3}  {}", m.score, m.algorithm.id);
      for detail in &m.details {
        match detail {
          MatchDetail::Name { name, weight } => println!("         +{} name \"{}\"", weight, name),
          MatchDetail::Keyword { keyword, weight } => {
            println!("         +{} keyword \"{}\"", weight, keyword)
          }
          MatchDetail::Fuzzy { keyword, weight } => {
            println!("         +{} fuzzy \"{}\"", weight, keyword)
          }
        }
      }
    }
    println!("    tip: {}", LEARNING_TIPS[i % LEARNING_TIPS.len()]);
    println!();
  }

  Ok(())
}
