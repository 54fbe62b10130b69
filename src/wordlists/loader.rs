//! Corpus loading utilities
//!
//! Turns word list text and prose passages into lowercase candidate secrets.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Shortest passage line (exclusive) that contributes to phrases
pub const PHRASE_LINE_MIN: usize = 15;

/// Longest passage line (exclusive) that contributes to phrases
pub const PHRASE_LINE_MAX: usize = 30;

/// Split whitespace-separated text into lowercase words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_text;
///
/// assert_eq!(words_from_text("Apple  banana\nCherry\n"), vec!["apple", "banana", "cherry"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Extract sentences from a prose passage
///
/// Only lines whose length lies strictly between [`PHRASE_LINE_MIN`] and
/// [`PHRASE_LINE_MAX`] characters are kept. Kept lines are trimmed, joined with
/// a single space and split into sentences on `.`; empty sentences are dropped.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::phrases_from_text;
///
/// let text = "The lamp burned low and the\nharbor lay silent below us.\nx\n";
/// assert_eq!(phrases_from_text(text), vec!["the lamp burned low and the harbor lay silent below us"]);
/// ```
#[must_use]
pub fn phrases_from_text(text: &str) -> Vec<String> {
    let joined = text
        .lines()
        .filter(|line| {
            let len = line.chars().count();
            len > PHRASE_LINE_MIN && len < PHRASE_LINE_MAX
        })
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");

    joined
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load a whitespace-separated word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_words_from_file;
///
/// let words = load_words_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let words = words_from_text(&fs::read_to_string(path)?);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Load phrases from a prose file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_phrases_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let phrases = phrases_from_text(&fs::read_to_string(path)?);
    debug!(path = %path.display(), count = phrases.len(), "loaded phrases");
    Ok(phrases)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}
