use crate::DocId;

/// Errors returned by the search server.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("document id {0} already exists")]
    DuplicateId(DocId),
    #[error("document id {0} is negative")]
    InvalidId(DocId),
    /// A document word contains control characters.
    #[error("invalid word in document text: {0:?}")]
    InvalidTerm(String),
    #[error("invalid stop word: {0:?}")]
    InvalidStopWord(String),
    /// Control characters, a bare `-` or a double minus.
    #[error("invalid query word: {0:?}")]
    InvalidQueryTerm(String),
    #[error("query contains control characters")]
    InvalidQuery,
    #[error("query is empty")]
    EmptyQuery,
    #[error("document {0} is not indexed")]
    UnknownDocument(DocId),
    #[error("document index {index} is out of range (document count {count})")]
    OutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
