use crate::documents::DocumentStore;
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::matching::matched_words;
use crate::query::{Query, QueryParser};
use crate::ranking::find_top;
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_into_words};
use crate::{DocId, DocumentStatus, SearchHit};
use std::collections::BTreeMap;
use std::str::FromStr;

/// In-memory search server: stop words, document metadata and the inverted
/// index behind one insert-only API.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    documents: DocumentStore,
    index: InvertedIndex,
}

impl SearchServer {
    /// Server without stop words.
    pub fn new() -> Self { Self::default() }

    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { stop_words: StopWords::from_words(words)?, ..Self::default() })
    }

    /// Stop words given as one space-delimited string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self { stop_words: StopWords::from_text(text)?, ..Self::default() })
    }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Index a document. On error the server is left untouched.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.documents.check_new_id(doc_id)?;
        let words = self.split_into_words_no_stop(text)?;
        self.index.add_document(doc_id, &words);
        self.documents.insert(doc_id, status, ratings);
        tracing::debug!(doc_id, words = words.len(), %status, "indexed document");
        Ok(())
    }

    /// Top documents with the default `Active` status.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Active)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by(raw_query, move |_, document_status, _| document_status == status)
    }

    /// Top documents accepted by `predicate(doc_id, status, rating)`.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<SearchHit>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        if !is_valid_word(raw_query) {
            return Err(Error::InvalidQuery);
        }
        if raw_query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let query = self.parse_query(raw_query)?;
        let hits = find_top(&self.index, &self.documents, &query, predicate);
        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            stop = query.stop_words.len(),
            hits = hits.len(),
            "ranked query"
        );
        Ok(hits)
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Id of the document at the given insertion position.
    pub fn document_id(&self, index: usize) -> Result<DocId> { self.documents.id_at(index) }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ { self.documents.ids() }

    pub fn document_status(&self, doc_id: DocId) -> Option<DocumentStatus> {
        self.documents.get(doc_id).map(|d| d.status)
    }

    pub fn document_rating(&self, doc_id: DocId) -> Option<i32> {
        self.documents.get(doc_id).map(|d| d.rating)
    }

    /// Term frequencies of one document; empty for an unknown id.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<String, f64> {
        self.index.word_frequencies(doc_id)
    }

    /// Plus words of the query found in the document, with the document status.
    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let data = *self.documents.get(doc_id).ok_or(Error::UnknownDocument(doc_id))?;
        let query = self.parse_query(raw_query)?;
        if query.is_stop_only() {
            return Ok((Vec::new(), DocumentStatus::default()));
        }
        Ok((matched_words(&self.index, &query, doc_id), data.status))
    }

    fn parse_query(&self, raw_query: &str) -> Result<Query> {
        QueryParser::new(&self.stop_words).parse(raw_query)
    }

    /// Every word is validated, stop words included, before any is dropped.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(Error::InvalidTerm(word.to_string()));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

impl FromStr for SearchServer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Self::from_stop_words_text(s) }
}
