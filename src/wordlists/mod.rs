//! Word lists for hangman
//!
//! Provides the embedded corpora compiled into the binary and loaders for custom files.

mod embedded;
pub mod loader;

pub use embedded::{PASSAGE, PASSAGE_BANNER, WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, PhraseModeConfig, filter_by_length};

    #[test]
    fn passage_banner_has_title() {
        assert!(PASSAGE_BANNER.trim_start().starts_with("THE LOG OF"));
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn every_difficulty_has_candidates() {
        let words = loader::words_from_slice(WORDS);

        for difficulty in Difficulty::ALL {
            let cfg = difficulty.config(6);
            assert!(
                filter_by_length(&words, cfg.min_len, cfg.max_len).len() >= 10,
                "too few {difficulty} words"
            );
        }
    }

    #[test]
    fn passage_yields_phrase_mode_candidates() {
        let phrases = loader::phrases_from_text(PASSAGE);
        let min_len = PhraseModeConfig::default().min_len;

        assert!(phrases.iter().filter(|p| p.chars().count() >= min_len).count() >= 10);
    }
}
