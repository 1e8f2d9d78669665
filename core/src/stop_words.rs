use crate::error::{Error, Result};
use crate::tokenizer::{is_valid_word, split_into_words};
use std::collections::BTreeSet;

/// Immutable set of words excluded from indexing and from plus/minus query
/// classification.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build from pre-split words. Empty strings are skipped; any word with
    /// control characters fails the whole construction.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(Error::InvalidStopWord(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    /// Build from a single space-delimited string.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
