//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::core::GameState;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// English letters, most frequent first
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next letter to guess
///
/// Implementations only look at what a player could see: the revealed
/// characters and the letters already tried.
pub trait Guesser {
    /// Pick an untried letter, or `None` if every letter has been tried
    fn next_letter<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of the guesser while keeping static dispatch.
pub enum GuesserType<'a> {
    /// Corpus-aware candidate filtering (default, strongest)
    Candidates(CandidateGuesser<'a>),
    /// Fixed English letter frequency order
    Frequency(FrequencyGuesser),
    /// Uniformly random untried letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType<'_> {
    fn next_letter<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<char> {
        match self {
            Self::Candidates(g) => g.next_letter(state, rng),
            Self::Frequency(g) => g.next_letter(state, rng),
            Self::Random(g) => g.next_letter(state, rng),
        }
    }
}

impl<'a> GuesserType<'a> {
    /// Create a guesser from its name
    ///
    /// Supported names: "candidates", "frequency", "random".
    /// Defaults to candidates if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, corpus: &'a [String]) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Candidates(CandidateGuesser::new(corpus)),
        }
    }

    /// Name of the wrapped guesser
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidates(_) => "candidates",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

fn untried(state: &GameState) -> impl Iterator<Item = char> + '_ {
    FREQUENCY_ORDER
        .chars()
        .filter(|ch| !state.guessed().contains(ch))
}

/// Guesses letters in English frequency order
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, state: &GameState, _rng: &mut R) -> Option<char> {
        untried(state).next()
    }
}

/// Guesses a random untried letter
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<char> {
        let letters: Vec<char> = untried(state).collect();
        letters.choose(rng).copied()
    }
}

/// Guesses the letter shared by the most corpus entries that still fit the board
///
/// Falls back to frequency order when no entry fits.
pub struct CandidateGuesser<'a> {
    corpus: &'a [String],
}

impl<'a> CandidateGuesser<'a> {
    #[must_use]
    pub const fn new(corpus: &'a [String]) -> Self {
        Self { corpus }
    }

    /// Corpus entries consistent with the revealed characters and tried letters
    #[must_use]
    pub fn candidates(&self, state: &GameState) -> Vec<&'a str> {
        let board = state.revealed();

        self.corpus
            .iter()
            .map(String::as_str)
            .filter(|entry| entry.chars().count() == board.len())
            .filter(|entry| {
                entry.chars().zip(&board).all(|(ch, shown)| match shown {
                    Some(shown) => ch == *shown,
                    None => ch.is_ascii_alphabetic() && !state.guessed().contains(&ch),
                })
            })
            .collect()
    }
}

impl Guesser for CandidateGuesser<'_> {
    fn next_letter<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<char> {
        let candidates = self.candidates(state);

        // Count each letter once per candidate
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for candidate in &candidates {
            let mut seen: Vec<char> = candidate
                .chars()
                .filter(|ch| ch.is_ascii_alphabetic() && !state.guessed().contains(ch))
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for ch in seen {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }

        // Ties go to the more frequent English letter
        untried(state)
            .filter_map(|ch| counts.get(&ch).map(|&count| (ch, count)))
            .fold(None, |best: Option<(char, usize)>, (ch, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((ch, count)),
            })
            .map(|(ch, _)| ch)
            .or_else(|| FrequencyGuesser.next_letter(state, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    fn state_after(secret: &str, inputs: &[&str]) -> GameState {
        let mut rng = StdRng::seed_from_u64(0);
        inputs.iter().fold(
            GameState::new(secret, 26, 0, Difficulty::Medium),
            |state, input| state.process_guess(input, &mut rng),
        )
    }

    #[test]
    fn frequency_starts_with_e() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = state_after("cat", &[]);
        assert_eq!(FrequencyGuesser.next_letter(&state, &mut rng), Some('e'));
    }

    #[test]
    fn frequency_skips_tried_letters() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = state_after("cat", &["e", "t"]);
        assert_eq!(FrequencyGuesser.next_letter(&state, &mut rng), Some('a'));
    }

    #[test]
    fn random_never_repeats() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = state_after("cat", &["e", "t", "a"]);

        for _ in 0..50 {
            let letter = RandomGuesser.next_letter(&state, &mut rng).unwrap();
            assert!(!state.guessed().contains(&letter));
        }
    }

    #[test]
    fn exhausted_alphabet_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        let inputs: Vec<String> = FREQUENCY_ORDER.chars().map(String::from).collect();
        let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        let state = state_after("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", &inputs);

        assert_eq!(FrequencyGuesser.next_letter(&state, &mut rng), None);
        assert_eq!(RandomGuesser.next_letter(&state, &mut rng), None);
    }

    #[test]
    fn candidates_follow_board() {
        let words = corpus(&["cat", "cot", "dog", "cart", "bat"]);
        let guesser = CandidateGuesser::new(&words);

        let state = state_after("cat", &["c", "e"]);
        assert_eq!(guesser.candidates(&state), vec!["cat", "cot"]);
    }

    #[test]
    fn candidates_exclude_tried_letters_in_hidden_slots() {
        let words = corpus(&["cat", "cot"]);
        let guesser = CandidateGuesser::new(&words);

        // 'o' was tried and missed, so "cot" no longer fits
        let state = state_after("cat", &["c", "o"]);
        assert_eq!(guesser.candidates(&state), vec!["cat"]);
    }

    #[test]
    fn candidate_guesser_picks_shared_letter() {
        let words = corpus(&["bat", "hat", "mat", "cot"]);
        let guesser = CandidateGuesser::new(&words);
        let mut rng = StdRng::seed_from_u64(0);

        let state = state_after("hat", &["e"]);
        // 't' is in every candidate
        assert_eq!(guesser.next_letter(&state, &mut rng), Some('t'));
    }

    #[test]
    fn candidate_guesser_falls_back_to_frequency() {
        let words = corpus(&["zebra"]);
        let guesser = CandidateGuesser::new(&words);
        let mut rng = StdRng::seed_from_u64(0);

        let state = state_after("cat", &[]);
        assert_eq!(guesser.next_letter(&state, &mut rng), Some('e'));
    }

    #[test]
    fn from_name_selects_guesser() {
        let words = corpus(&["cat"]);
        assert_eq!(GuesserType::from_name("frequency", &words).name(), "frequency");
        assert_eq!(GuesserType::from_name("random", &words).name(), "random");
        assert_eq!(GuesserType::from_name("candidates", &words).name(), "candidates");
        assert_eq!(GuesserType::from_name("unknown", &words).name(), "candidates");
    }
}
