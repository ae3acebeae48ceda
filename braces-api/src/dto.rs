//! Data Transfer Objects for API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered result of expanding one pattern
///
/// `Display` joins the words with the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// Expanded words, leftmost group varying slowest
    pub words: Vec<String>,
    /// Delimiter used when joining
    pub delimiter: String,
}

impl Expansion {
    /// Create a new expansion
    pub fn new(words: Vec<String>, delimiter: impl Into<String>) -> Self {
        Self {
            words,
            delimiter: delimiter.into(),
        }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// The expanded words
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Delimiter used when joining
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Take the words, dropping the delimiter
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Join the words with the delimiter
    pub fn join(&self) -> String {
        self.words.join(&self.delimiter)
    }

    /// Serialize to JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.delimiter)?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl IntoIterator for Expansion {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Expansion {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expansion {
        Expansion::new(vec!["ab".into(), "ac".into(), "".into()], ", ")
    }

    #[test]
    fn test_display_matches_join() {
        let expansion = sample();
        assert_eq!(expansion.to_string(), "ab, ac, ");
        assert_eq!(expansion.to_string(), expansion.join());
    }

    #[test]
    fn test_accessors() {
        let expansion = sample();
        assert_eq!(expansion.len(), 3);
        assert!(!expansion.is_empty());
        assert_eq!(expansion.words(), ["ab", "ac", ""]);
        assert_eq!(expansion.delimiter(), ", ");
        assert_eq!(expansion.iter().next().map(String::as_str), Some("ab"));
    }

    #[test]
    fn test_iteration() {
        let expansion = sample();
        let lengths: Vec<usize> = (&expansion).into_iter().map(String::len).collect();
        assert_eq!(lengths, [2, 2, 0]);

        let owned: Vec<String> = expansion.into_iter().collect();
        assert_eq!(owned, ["ab", "ac", ""]);
    }

    #[test]
    fn test_empty_expansion_displays_nothing() {
        let expansion = Expansion::new(Vec::new(), " ");
        assert!(expansion.is_empty());
        assert_eq!(expansion.to_string(), "");
    }
}
