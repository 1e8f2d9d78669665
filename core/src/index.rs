use crate::DocId;
use std::collections::{BTreeMap, HashMap};

/// Term frequencies of one term, keyed by document.
pub type Postings = HashMap<DocId, f64>;

/// Inverted index from term to per-document term frequency.
///
/// Append-only: every document is indexed exactly once and its postings are
/// never revisited.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Add the stop-word-filtered words of a document. Each occurrence
    /// contributes `1 / words.len()` to the term frequency.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) {
        if words.is_empty() {
            return;
        }
        let inv_word_count = 1.0 / words.len() as f64;
        for &word in words {
            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inv_word_count;
        }
    }

    pub fn postings(&self, word: &str) -> Option<&Postings> { self.word_to_document_freqs.get(word) }

    /// Number of documents containing the term.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings(word).map_or(0, |p| p.len())
    }

    /// True when the document has at least one occurrence of the term.
    pub fn contains(&self, word: &str, doc_id: DocId) -> bool {
        self.postings(word).is_some_and(|p| p.contains_key(&doc_id))
    }

    /// ln(total / df). The term must be present, so df > 0.
    pub fn inverse_document_freq(&self, word: &str, document_count: usize) -> f64 {
        (document_count as f64 / self.document_frequency(word) as f64).ln()
    }

    /// Term frequencies of one document; empty for unknown or word-less documents.
    /// Scans the whole vocabulary.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<String, f64> {
        self.word_to_document_freqs
            .iter()
            .filter_map(|(word, postings)| postings.get(&doc_id).map(|&tf| (word.clone(), tf)))
            .collect()
    }

    pub fn term_count(&self) -> usize { self.word_to_document_freqs.len() }
}
