/// Split text into words on the space character. Runs of spaces collapse and
/// leading/trailing spaces never produce empty words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// A word is valid when it carries no control characters (`'\0'..' '`).
/// Shared by stop-word construction, document ingestion and query parsing.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}
