//! Text tokenization utilities.

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into lowercase words.
pub fn tokenize(text: &str) -> Vec<String> {
  text
    .unicode_words()
    .map(|word| word.to_lowercase())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize() {
    let text = "How does Quick-Sort work?";
    let tokens = tokenize(text);
    assert_eq!(tokens, vec!["how", "does", "quick", "sort", "work"]);
  }

  #[test]
  fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" ?! ").is_empty());
  }
}
