//! Text normalization used before vectorization.
//!
//! `normalize` is a pure function: identical input always yields identical
//! output, with no hidden state between calls.

use ahash::AHashSet;
use std::sync::OnceLock;

/// English stop words removed during normalization and again at the
/// vectorizer stage. Static, read-only configuration data.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "alone",
    "along", "already", "also", "although", "always", "am", "among", "an", "and", "another",
    "any", "anyone", "anything", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "been", "before", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "during", "each", "either", "else", "enough", "even",
    "ever", "every", "everyone", "everything", "everywhere", "few", "for", "from", "further",
    "get", "give", "go", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "however", "i", "if", "in", "indeed", "into", "is", "it",
    "its", "itself", "just", "keep", "last", "least", "less", "made", "many", "may", "me",
    "might", "mine", "more", "most", "mostly", "much", "must", "my", "myself", "neither",
    "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps",
    "rather", "same", "see", "seem", "seemed", "seeming", "seems", "several", "she", "should",
    "since", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhere", "still", "such", "take", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "therefore", "these", "they", "this", "those", "though",
    "through", "throughout", "thus", "to", "together", "too", "toward", "towards", "under",
    "until", "up", "upon", "us", "very", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereas", "wherever", "whether", "which", "while",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

pub(crate) fn stop_word_set() -> &'static AHashSet<&'static str> {
    static SET: OnceLock<AHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

#[inline]
pub(crate) fn is_stop_word(token: &str) -> bool {
    stop_word_set().contains(token)
}

/// Clean raw text for vectorization.
///
/// Steps, in order: lowercase, remove bracketed spans, delete ASCII
/// punctuation, drop tokens containing digits, drop stop words, rejoin with
/// single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let unbracketed = strip_bracketed(&lower);
    let depunct: String = unbracketed
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    depunct
        .split_whitespace()
        .filter(|tok| !tok.chars().any(|c| c.is_ascii_digit()))
        .filter(|tok| !is_stop_word(tok))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove `[...]` spans including the brackets. An unmatched `[` is kept;
/// the punctuation pass deletes the bracket itself.
fn strip_bracketed(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        match rest[open + 1..].find(']') {
            Some(close) => rest = &rest[open + 1 + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
