use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocId;

/// Plus words of the query present in the document, in lexicographic order.
/// Empty as soon as any minus word is present in the document.
pub fn matched_words(index: &InvertedIndex, query: &Query, doc_id: DocId) -> Vec<String> {
    if query.minus_words.iter().any(|word| index.contains(word, doc_id)) {
        return Vec::new();
    }
    query
        .plus_words
        .iter()
        .filter(|word| index.contains(word, doc_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_word_clears_match() {
        let mut index = InvertedIndex::new();
        index.add_document(42, &["sit", "wait", "any", "angels"]);
        let mut query = Query::default();
        query.plus_words.extend(["sit".to_string(), "any".to_string(), "home".to_string()]);
        assert_eq!(matched_words(&index, &query, 42), vec!["any", "sit"]);

        query.minus_words.insert("home".into());
        assert_eq!(matched_words(&index, &query, 42), vec!["any", "sit"]);

        query.minus_words.insert("wait".into());
        assert!(matched_words(&index, &query, 42).is_empty());
    }
}
