//! Free-text tokenizer: lowercase alphanumeric words minus a fixed stop
//! list. Pure and deterministic; no stemming, no token length cap.

/// Words too common to carry matching signal.
const STOP_WORDS: [&str; 21] = [
    "a", "an", "the", "and", "or", "to", "of", "in", "on", "for", "with", "by", "at", "as", "is",
    "are", "be", "this", "that", "it", "from",
];

/// Splits text into lowercase alphanumeric tokens with stop words removed.
///
/// Anything that is neither alphanumeric nor whitespace collapses to a
/// space, so "C++/Rust (remote)" yields ["c", "rust", "remote"]. Empty
/// input yields an empty bag.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }

    normalized
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}
