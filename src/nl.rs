use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_stopwords() -> &'static HashSet<&'static str> {
    STOPWORDS.get_or_init(|| {
        [
            "the", "and", "is", "in", "of", "a", "to", "it", "that", "with", "for", "on", "as",
            "at", "by", "an",
        ]
        .into_iter()
        .collect()
    })
}

fn get_delimiter_regex() -> &'static Regex {
    DELIMITER_REGEX.get_or_init(|| Regex::new(r"\W+").expect("delimiter pattern is valid"))
}

/// Returns true if `word` is in the fixed stop-word set. Case-insensitive.
pub fn is_stopword(word: &str) -> bool {
    let stopwords = get_stopwords();
    stopwords.contains(word) || stopwords.contains(word.to_lowercase().as_str())
}

/// Splits raw text on runs of non-word characters and lower-cases each fragment.
/// Empty fragments from leading, trailing or repeated delimiters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    get_delimiter_regex()
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.to_lowercase())
        .collect()
}

/// Removes stop words, keeping the remaining tokens in order.
pub fn filter_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_stopword(t)).collect()
}

/// Tokenize then filter. This is the token stream the frequency counter consumes.
pub fn significant_words(text: &str) -> Vec<String> {
    filter_stopwords(tokenize(text))
}
