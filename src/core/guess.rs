//! Player input parsing

use std::fmt;

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// Empty or unrecognised input
    Invalid,
    /// Give up the round
    Quit,
    /// Spend a free hint
    Hint,
    /// Guess a single lowercase letter
    Letter(char),
}

impl Guess {
    /// Parse raw input into a guess
    ///
    /// Input is trimmed and lowercased. Commands match anywhere in the input,
    /// so "hinted" asks for a hint and "requite" quits. `hint` wins
    /// over `exit`/`quit` when both appear.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::parse(" E "), Guess::Letter('e'));
    /// assert_eq!(Guess::parse("hint please"), Guess::Hint);
    /// assert_eq!(Guess::parse("quit"), Guess::Quit);
    /// assert_eq!(Guess::parse("ab"), Guess::Invalid);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();

        if value.is_empty() {
            return Self::Invalid;
        }
        if value.contains("hint") {
            return Self::Hint;
        }
        if value.contains("exit") || value.contains("quit") {
            return Self::Quit;
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_lowercase() => Self::Letter(ch),
            _ => Self::Invalid,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Quit => write!(f, "quit"),
            Self::Hint => write!(f, "hint"),
            Self::Letter(ch) => write!(f, "{ch}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        assert_eq!(Guess::parse("a"), Guess::Letter('a'));
        assert_eq!(Guess::parse("Z"), Guess::Letter('z'));
        assert_eq!(Guess::parse("  q \n"), Guess::Letter('q'));
    }

    #[test]
    fn parse_empty_is_invalid() {
        assert_eq!(Guess::parse(""), Guess::Invalid);
        assert_eq!(Guess::parse("   "), Guess::Invalid);
    }

    #[test]
    fn parse_non_letters_are_invalid() {
        assert_eq!(Guess::parse("1"), Guess::Invalid);
        assert_eq!(Guess::parse("?"), Guess::Invalid);
        assert_eq!(Guess::parse("é"), Guess::Invalid);
        assert_eq!(Guess::parse("cat"), Guess::Invalid);
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Guess::parse("hint"), Guess::Hint);
        assert_eq!(Guess::parse("HINT"), Guess::Hint);
        assert_eq!(Guess::parse("exit"), Guess::Quit);
        assert_eq!(Guess::parse("Quit"), Guess::Quit);
    }

    #[test]
    fn parse_commands_match_substrings() {
        assert_eq!(Guess::parse("hinted"), Guess::Hint);
        assert_eq!(Guess::parse("chinting"), Guess::Hint);
        assert_eq!(Guess::parse("requite"), Guess::Quit);
        assert_eq!(Guess::parse("I want to exit now"), Guess::Quit);
    }

    #[test]
    fn parse_near_miss_words_are_invalid() {
        // "h-i-l-a-n-t-h" never spells "hint"
        assert_eq!(Guess::parse("philanthropist"), Guess::Invalid);
        assert_eq!(Guess::parse("quiet"), Guess::Invalid);
    }

    #[test]
    fn hint_takes_priority_over_quit() {
        assert_eq!(Guess::parse("quit hint"), Guess::Hint);
    }

    #[test]
    fn display_round_trips_commands() {
        assert_eq!(Guess::Letter('k').to_string(), "k");
        assert_eq!(Guess::Hint.to_string(), "hint");
        assert_eq!(Guess::parse(&Guess::Quit.to_string()), Guess::Quit);
    }
}
