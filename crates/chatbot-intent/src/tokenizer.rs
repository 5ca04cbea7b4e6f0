//! Tokenization and stemming.
//!
//! Processing steps:
//! 1. Lowercase the input
//! 2. Split on Unicode word boundaries
//! 3. Keep only alphanumeric characters of each word
//! 4. Reduce each word with the Snowball English stemmer
//! 5. Drop stems of two characters or fewer
//!
//! There is no stop-word list: the length filter removes most of them.

use std::sync::OnceLock;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Stems shorter than this are dropped.
const MIN_STEM_LENGTH: usize = 3;

static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Tokenizes text into a list of stems.
///
/// Pure and deterministic: the same text always yields the same stems, in
/// the order their words appear.
pub fn tokenize(text: &str) -> Vec<String> {
    let stemmer = stemmer();
    let lowered = text.to_lowercase();

    lowered
        .unicode_words()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .map(|word| stemmer.stem(&word).into_owned())
        .filter(|stem| stem.chars().count() >= MIN_STEM_LENGTH)
        .collect()
}

/// Strips non-alphanumeric characters ("don't" -> "dont").
fn normalize_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_question() {
        assert_eq!(tokenize("How can I donate?"), vec!["how", "can", "donat"]);
    }

    #[test]
    fn tokenize_lowercases() {
        assert_eq!(tokenize("Who is the CEO?"), tokenize("who is the ceo"));
        assert!(tokenize("Who is the CEO?").contains(&"ceo".to_string()));
    }

    #[test]
    fn morphological_variants_collapse() {
        let donate = tokenize("donate");
        assert_eq!(tokenize("donation"), donate);
        assert_eq!(tokenize("donating"), donate);
        assert_eq!(tokenize("donations"), donate);
    }

    #[test]
    fn short_stems_dropped() {
        assert!(tokenize("I am ok").is_empty());
        assert_eq!(tokenize("Is it a big cat"), vec!["big", "cat"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tokenize_only_punctuation() {
        assert!(tokenize("... ??? !!!").is_empty());
    }

    #[test]
    fn apostrophes_removed() {
        let tokens = tokenize("officials' qualifications");
        assert!(tokens.iter().all(|t| t.chars().all(char::is_alphanumeric)));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn tokenize_is_deterministic() {
        let text = "What volunteer opportunities are available?";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn repeated_words_kept() {
        assert_eq!(tokenize("donate donate"), vec!["donat", "donat"]);
    }
}
