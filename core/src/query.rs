//! Query parsing: splits raw text into required, forbidden and stop words.

use crate::error::{Error, Result};
use crate::stop_words::StopWords;
use crate::tokenizer::{is_valid_word, split_into_words};
use std::collections::BTreeSet;

/// Parsed query. The three sets are disjoint and iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
    /// Stop words as written in the query, including any leading `-`.
    pub stop_words: BTreeSet<String>,
}

impl Query {
    /// Only stop words, no plus or minus words. Callers answer such a query
    /// with an empty result.
    pub fn is_stop_only(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty() && !self.stop_words.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self { Self { stop_words } }

    pub fn parse(&self, text: &str) -> Result<Query> {
        let mut query = Query::default();
        for word in split_into_words(text) {
            let query_word = self.parse_word(word)?;
            if query_word.is_stop {
                query.stop_words.insert(word.to_string());
            } else if query_word.is_minus {
                query.minus_words.insert(query_word.data.to_string());
            } else {
                query.plus_words.insert(query_word.data.to_string());
            }
        }
        Ok(query)
    }

    fn parse_word<'w>(&self, word: &'w str) -> Result<QueryWord<'w>> {
        let (data, is_minus) = match word.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (word, false),
        };
        if data.is_empty() || data.starts_with('-') || !is_valid_word(data) {
            return Err(Error::InvalidQueryTerm(word.to_string()));
        }
        Ok(QueryWord { data, is_minus, is_stop: self.stop_words.contains(data) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn classifies_words() {
        let stop = StopWords::from_text("in the").unwrap();
        let query = QueryParser::new(&stop).parse("cat -dog in -the cat").unwrap();
        assert_eq!(query.plus_words, set(&["cat"]));
        assert_eq!(query.minus_words, set(&["dog"]));
        assert_eq!(query.stop_words, set(&["-the", "in"]));
        assert!(!query.is_stop_only());
    }

    #[test]
    fn stop_only_query() {
        let stop = StopWords::from_text("in the").unwrap();
        let parser = QueryParser::new(&stop);
        assert!(parser.parse("in -the").unwrap().is_stop_only());
        assert!(!parser.parse("").unwrap().is_stop_only());
        assert_eq!(parser.parse("   ").unwrap(), Query::default());
    }

    #[test]
    fn rejects_malformed_words() {
        let stop = StopWords::new();
        let parser = QueryParser::new(&stop);
        assert_eq!(parser.parse("cat -"), Err(Error::InvalidQueryTerm("-".into())));
        assert_eq!(parser.parse("--cat"), Err(Error::InvalidQueryTerm("--cat".into())));
        assert_eq!(parser.parse("ко\x02т"), Err(Error::InvalidQueryTerm("ко\x02т".into())));
        assert!(parser.parse("cat-dog -cat-dog").is_ok());
    }
}
