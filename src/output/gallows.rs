//! Gallows art
//!
//! One frame list per difficulty. Easy gets the most frames because it has the
//! most tries; phrase rounds use whatever difficulty was selected.

use crate::core::Difficulty;

const EASY: [&str; 10] = [
    "+---+\n    |\n    |\n    |\n    |\n   ===",
    "+---+\n(   |\n    |\n    |\n    |\n   ===",
    "+---+\n(_  |\n    |\n    |\n    |\n   ===",
    "+---+\n(_) |\n    |\n    |\n    |\n   ===",
    "+---+\n(_) |\n/   |\n    |\n    |\n   ===",
    "+---+\n(_) |\n/|  |\n    |\n    |\n   ===",
    "+---+\n(_) |\n/|\\ |\n    |\n    |\n   ===",
    "+---+\n(_) |\n/|\\ |\n |  |\n    |\n   ===",
    "+---+\n(_) |\n/|\\ |\n |  |\n/   |\n   ===",
    "+---+\n(_) |\n/|\\ |\n |  |\n/ \\ |\n   ===",
];

const MEDIUM: [&str; 7] = [
    "+---+\n    |\n    |\n    |\n   ===",
    "+---+\n O  |\n    |\n    |\n   ===",
    "+---+\n O  |\n |  |\n    |\n   ===",
    "+---+\n O  |\n/|  |\n    |\n   ===",
    "+---+\n O  |\n/|\\ |\n    |\n   ===",
    "+---+\n O  |\n/|\\ |\n/   |\n   ===",
    "+---+\n O  |\n/|\\ |\n/ \\ |\n   ===",
];

const HARD: [&str; 4] = [
    "+---+\n    |\n    |\n    |\n   ===",
    "+---+\n O  |\n    |\n    |\n   ===",
    "+---+\n O  |\n/|\\ |\n    |\n   ===",
    "+---+\n O  |\n/|\\ |\n/ \\ |\n   ===",
];

/// All frames for a difficulty, empty gallows first
#[must_use]
pub const fn frames(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    }
}

/// Frame for a number of misses, holding at the last frame once it is reached
#[must_use]
pub fn gallows_art(misses: usize, difficulty: Difficulty) -> &'static str {
    let frames = frames(difficulty);
    frames[misses.min(frames.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counts_cover_tries() {
        for difficulty in Difficulty::ALL {
            let tries = difficulty.config(6).tries as usize;
            assert_eq!(frames(difficulty).len(), tries + 1, "{difficulty}");
        }
    }

    #[test]
    fn zero_misses_is_empty_gallows() {
        for difficulty in Difficulty::ALL {
            assert!(!gallows_art(0, difficulty).contains('O'));
            assert!(!gallows_art(0, difficulty).contains('('));
        }
    }

    #[test]
    fn frames_clamp_to_last() {
        assert_eq!(gallows_art(3, Difficulty::Hard), HARD[3]);
        assert_eq!(gallows_art(99, Difficulty::Hard), HARD[3]);
        assert_eq!(gallows_art(99, Difficulty::Easy), EASY[9]);
    }

    #[test]
    fn frames_have_equal_height_per_difficulty() {
        for difficulty in Difficulty::ALL {
            let heights: Vec<usize> = frames(difficulty).iter().map(|f| f.lines().count()).collect();
            assert!(heights.windows(2).all(|w| w[0] == w[1]), "{difficulty}");
        }
    }
}
