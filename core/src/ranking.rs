//! TF-IDF ranking of a parsed query over the index.

use crate::documents::DocumentStore;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, DocumentStatus, SearchHit, EPSILON, MAX_RESULT_DOCUMENT_COUNT};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Score every candidate document, drop those hit by a minus word or rejected
/// by the predicate, then sort and cut to the top results.
pub fn find_top<P>(index: &InvertedIndex, documents: &DocumentStore, query: &Query, predicate: P) -> Vec<SearchHit>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    if query.is_stop_only() {
        return Vec::new();
    }
    let mut hits = find_all(index, documents, query, predicate);
    sort_hits(&mut hits);
    hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
    hits
}

fn find_all<P>(index: &InvertedIndex, documents: &DocumentStore, query: &Query, predicate: P) -> Vec<SearchHit>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let document_count = documents.len();
    let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else { continue };
        let idf = index.inverse_document_freq(word, document_count);
        for (&doc_id, &term_freq) in postings {
            *document_to_relevance.entry(doc_id).or_insert(0.0) += term_freq * idf;
        }
    }

    for word in &query.minus_words {
        let Some(postings) = index.postings(word) else { continue };
        for doc_id in postings.keys() {
            document_to_relevance.remove(doc_id);
        }
    }

    document_to_relevance
        .into_iter()
        .filter_map(|(doc_id, relevance)| {
            let data = documents.get(doc_id)?;
            predicate(doc_id, data.status, data.rating).then_some(SearchHit { doc_id, relevance, rating: data.rating })
        })
        .collect()
}

/// Descending relevance; hits within `EPSILON` of each other are ordered by
/// descending rating. Remaining ties keep ascending id order.
///
/// The epsilon comparison is not transitive, so hits are first put in a total
/// order by relevance and each run that stays within `EPSILON` of its first
/// hit is re-sorted by rating. A final pass swaps any neighbours that are
/// still within `EPSILON` but in ascending rating order. Swaps only happen
/// between hits within `EPSILON`, so a hit never moves ahead of one that is
/// `EPSILON` or more ahead in relevance.
pub fn sort_hits(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.doc_id.cmp(&b.doc_id)));
    let mut start = 0;
    while start < hits.len() {
        let head = hits[start].relevance;
        let end = hits[start..]
            .iter()
            .position(|h| (head - h.relevance).abs() >= EPSILON)
            .map_or(hits.len(), |offset| start + offset);
        hits[start..end].sort_by(|a, b| match b.rating.cmp(&a.rating) {
            Ordering::Equal => a.doc_id.cmp(&b.doc_id),
            other => other,
        });
        start = end;
    }

    // Each swap removes one rating inversion, so this terminates.
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..hits.len() {
            let (a, b) = (&hits[i - 1], &hits[i]);
            if (a.relevance - b.relevance).abs() < EPSILON && a.rating < b.rating {
                hits.swap(i - 1, i);
                swapped = true;
            }
        }
    }
}
