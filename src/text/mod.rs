//! Text normalization.
//!
//! Both profiles lowercase, replace every ASCII punctuation character with a
//! space and split on whitespace. [`Profile::StopwordsRemoved`] additionally
//! drops the English stopword list. No stemming.
//!
//! The two profiles are not interchangeable: the alignment scorer keeps
//! stopwords, the mean-embedding scorer and keystring windowing drop them.

use std::collections::HashSet;
use std::sync::LazyLock;


/// Normalization profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Strip punctuation only; stopwords are kept.
    PunctuationStripped,
    /// Strip punctuation and remove stopwords.
    StopwordsRemoved,
}

/// English stopwords. Contractions appear in their punctuation-split form
/// (`don't` normalizes to `don` + `t`, both listed).
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Returns `true` if `token` is on the stopword list.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Normalizes `text` into tokens under `profile`.
pub fn normalize(text: &str, profile: Profile) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| match profile {
            Profile::PunctuationStripped => true,
            Profile::StopwordsRemoved => !is_stopword(token),
        })
        .map(str::to_string)
        .collect()
}

/// Shorthand for [`Profile::PunctuationStripped`].
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text, Profile::PunctuationStripped)
}

/// Shorthand for [`Profile::StopwordsRemoved`].
pub fn content_tokens(text: &str) -> Vec<String> {
    normalize(text, Profile::StopwordsRemoved)
}
