//! Text carrier: words plus the exact whitespace between them.
//!
//! Splitting keeps every separator so that rendering the carrier after
//! embedding reproduces the original layout. Only invisible code points are
//! ever added, at the end of words.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::text::invisible::InvisibleCodeMap;

/// A cover text split into whitespace-delimited words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCarrier {
    words: Vec<String>,
    /// Whitespace runs; always `words.len() + 1` entries (leading, between, trailing).
    separators: Vec<String>,
}

impl TextCarrier {
    /// Splits text into words, keeping the whitespace between them.
    pub fn parse(text: &str) -> Self {
        let mut words = Vec::new();
        let mut separators = Vec::new();
        let mut current_space = String::new();
        let mut current_word = String::new();

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current_word.is_empty() {
                    words.push(std::mem::take(&mut current_word));
                }
                current_space.push(ch);
            } else {
                if current_word.is_empty() {
                    separators.push(std::mem::take(&mut current_space));
                }
                current_word.push(ch);
            }
        }

        if !current_word.is_empty() {
            words.push(current_word);
        }
        separators.push(current_space);

        debug_assert_eq!(separators.len(), words.len() + 1);
        Self { words, separators }
    }

    /// Reads a carrier from a UTF-8 text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the carrier has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Replaces the words, keeping the separators.
    ///
    /// `words` must have the same length as the current word list.
    pub fn with_words(mut self, words: Vec<String>) -> Self {
        debug_assert_eq!(words.len(), self.words.len());
        self.words = words;
        self
    }

    /// Removes all code points of `map` from every word.
    pub fn strip_hidden(&mut self, map: &InvisibleCodeMap) {
        for word in &mut self.words {
            word.retain(|ch| !map.contains(ch));
        }
    }

    /// The carrier text with all code points of `map` removed.
    pub fn visible_text(&self, map: &InvisibleCodeMap) -> String {
        let mut visible = self.to_string();
        visible.retain(|ch| !map.contains(ch));
        visible
    }
}

impl fmt::Display for TextCarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (separator, word) in self.separators.iter().zip(&self.words) {
            f.write_str(separator)?;
            f.write_str(word)?;
        }
        if let Some(trailing) = self.separators.last() {
            f.write_str(trailing)?;
        }
        Ok(())
    }
}
