//! Letter reveal rules
//!
//! Mask rendering, win detection and hint selection over a secret and the
//! set of letters revealed so far.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Set of revealed characters
pub type LetterSet = FxHashSet<char>;

/// Punctuation, quotes and space that are always shown unmasked
///
/// These are seeded into every new round's guessed set and never count as a guess.
pub const AUTO_REVEAL: [char; 20] = [
    '.', ',', ';', ':', '?', '!', '-', '—', '…', '\'', '’', '”', '"', '(', ')', '[', ']', '{',
    '}', ' ',
];

/// Placeholder shown for a hidden character
pub const MASK_CHAR: char = '_';

/// Check whether a character is always revealed
#[inline]
#[must_use]
pub fn is_auto_reveal(ch: char) -> bool {
    AUTO_REVEAL.contains(&ch)
}

/// Build the initial guessed set containing every auto-reveal character
#[must_use]
pub fn auto_reveal_set() -> LetterSet {
    AUTO_REVEAL.iter().copied().collect()
}

/// Check whether a character of the secret is currently visible
#[inline]
#[must_use]
pub fn is_revealed(ch: char, guessed: &LetterSet) -> bool {
    guessed.contains(&ch.to_ascii_lowercase()) || is_auto_reveal(ch)
}

/// Render the secret with hidden characters replaced by `_`, one token per character
///
/// # Examples
/// ```
/// use hangman::core::{auto_reveal_set, render_mask};
///
/// let mut guessed = auto_reveal_set();
/// guessed.insert('c');
/// assert_eq!(render_mask("cat", &guessed), "c _ _");
/// ```
#[must_use]
pub fn render_mask(secret: &str, guessed: &LetterSet) -> String {
    let mut mask = String::with_capacity(secret.len() * 2);

    for (i, ch) in secret.chars().enumerate() {
        if i > 0 {
            mask.push(' ');
        }
        mask.push(if is_revealed(ch, guessed) { ch } else { MASK_CHAR });
    }

    mask
}

/// Check whether every alphabetic character of the secret has been revealed
///
/// # Examples
/// ```
/// use hangman::core::{auto_reveal_set, is_win};
///
/// let mut guessed = auto_reveal_set();
/// assert!(!is_win("hi!", &guessed));
///
/// guessed.extend(['h', 'i']);
/// assert!(is_win("hi!", &guessed));
/// ```
#[must_use]
pub fn is_win(secret: &str, guessed: &LetterSet) -> bool {
    secret
        .chars()
        .filter(char::is_ascii_alphabetic)
        .all(|ch| guessed.contains(&ch.to_ascii_lowercase()))
}

/// Alphabetic characters of the secret that are still hidden, lowercased
///
/// Repeated letters appear once per occurrence.
#[must_use]
pub fn missing_letters(secret: &str, guessed: &LetterSet) -> Vec<char> {
    secret
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .filter(|ch| !guessed.contains(ch))
        .collect()
}

/// Pick a hidden letter of the secret uniformly at random
///
/// Each occurrence is one entry, so a letter that appears twice is twice as likely.
/// Returns `None` when nothing is left to reveal.
pub fn pick_hint<R: Rng + ?Sized>(guessed: &LetterSet, secret: &str, rng: &mut R) -> Option<char> {
    missing_letters(secret, guessed).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn guessed_with(letters: &str) -> LetterSet {
        let mut set = auto_reveal_set();
        set.extend(letters.chars());
        set
    }

    #[test]
    fn auto_reveal_set_contains_space_and_punctuation() {
        let set = auto_reveal_set();
        assert_eq!(set.len(), AUTO_REVEAL.len());
        assert!(set.contains(&' '));
        assert!(set.contains(&'’'));
        assert!(set.contains(&'…'));
        assert!(!set.contains(&'a'));
    }

    #[test]
    fn mask_hides_unguessed_letters() {
        assert_eq!(render_mask("cat", &guessed_with("")), "_ _ _");
        assert_eq!(render_mask("cat", &guessed_with("ct")), "c _ t");
    }

    #[test]
    fn mask_keeps_space_position() {
        // Tokens are "_", " ", "_" joined by single spaces
        assert_eq!(render_mask("a b", &guessed_with("")), "_   _");
    }

    #[test]
    fn mask_shows_punctuation_from_start() {
        assert_eq!(
            render_mask("it's done.", &guessed_with("")),
            "_ _ ' _   _ _ _ _ ."
        );
    }

    #[test]
    fn mask_empty_secret() {
        assert_eq!(render_mask("", &guessed_with("")), "");
    }

    #[test]
    fn win_requires_every_letter() {
        assert!(!is_win("cat", &guessed_with("ca")));
        assert!(is_win("cat", &guessed_with("cat")));
    }

    #[test]
    fn win_ignores_non_letters() {
        assert!(is_win("a, b!", &guessed_with("ab")));
        assert!(is_win("", &guessed_with("")));
    }

    #[test]
    fn win_is_case_insensitive_against_lowercase_set() {
        assert!(is_win("Cat", &guessed_with("cat")));
    }

    #[test]
    fn missing_letters_keeps_duplicates() {
        assert_eq!(missing_letters("banana", &guessed_with("b")), vec![
            'a', 'n', 'a', 'n', 'a'
        ]);
    }

    #[test]
    fn pick_hint_returns_hidden_letter() {
        let mut rng = StdRng::seed_from_u64(7);
        let guessed = guessed_with("c");

        for _ in 0..20 {
            let hint = pick_hint(&guessed, "cat", &mut rng).unwrap();
            assert!(hint == 'a' || hint == 't', "unexpected hint {hint}");
        }
    }

    #[test]
    fn pick_hint_none_when_all_revealed() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_hint(&guessed_with("cat"), "cat", &mut rng), None);
        assert_eq!(pick_hint(&guessed_with(""), "...", &mut rng), None);
    }
}
