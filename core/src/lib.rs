use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod documents;
pub mod error;
pub mod index;
pub mod matching;
pub mod query;
pub mod ranking;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub use error::{Error, Result};
pub use server::SearchServer;

/// Caller-supplied document identifier. Must be non-negative.
pub type DocId = i32;

/// Upper bound on the number of hits returned by a top-documents search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevances closer than this are ordered by rating instead.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
    Irrelevant,
    Excluded,
    Removed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Excluded => "excluded",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(DocumentStatus::Active),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "excluded" => Ok(DocumentStatus::Excluded),
            "removed" => Ok(DocumentStatus::Removed),
            other => Err(format!("unknown document status: {other}")),
        }
    }
}

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {:.6}, rating = {} }}",
            self.doc_id, self.relevance, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_and_prints() {
        assert_eq!("Excluded".parse::<DocumentStatus>(), Ok(DocumentStatus::Excluded));
        assert!("banned".parse::<DocumentStatus>().is_err());
        assert_eq!(DocumentStatus::default().to_string(), "active");
    }

    #[test]
    fn hit_prints_like_document_line() {
        let hit = SearchHit { doc_id: 4, relevance: 0.6506724, rating: 6 };
        assert_eq!(hit.to_string(), "{ document_id = 4, relevance = 0.650672, rating = 6 }");
    }
}
