use crate::error::{Error, Result};
use crate::{DocId, DocumentStatus};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Per-document metadata plus the insertion order of ids.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocId, DocumentData>,
    ids: Vec<DocId>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Reject ids that are already present or negative.
    pub fn check_new_id(&self, id: DocId) -> Result<()> {
        if self.documents.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        if id < 0 {
            return Err(Error::InvalidId(id));
        }
        Ok(())
    }

    /// Record a document. The id must already have passed `check_new_id`.
    pub fn insert(&mut self, id: DocId, status: DocumentStatus, ratings: &[i32]) {
        let rating = compute_average_rating(ratings);
        self.documents.insert(id, DocumentData { rating, status });
        self.ids.push(id);
    }

    pub fn get(&self, id: DocId) -> Option<&DocumentData> { self.documents.get(&id) }

    pub fn len(&self) -> usize { self.ids.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Id at the given 0-based insertion position.
    pub fn id_at(&self, index: usize) -> Result<DocId> {
        self.ids
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange { index, count: self.ids.len() })
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ { self.ids.iter().copied() }
}

/// Truncating integer mean; 0 for no ratings.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}
