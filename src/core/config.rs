//! Round configuration
//!
//! Maps a difficulty (or phrase mode) to starting tries, hints and secret length
//! bounds, and draws a secret from a corpus.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::str::FromStr;

/// Tries granted at medium difficulty; easy and hard are offset from this
pub const DEFAULT_BASE_TRIES: u32 = 6;

/// Error type for round configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Difficulty tag is not one of easy, medium or hard
    InvalidDifficulty(String),
    /// No corpus entry satisfies the length bounds
    NoCandidates,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDifficulty(tag) => {
                write!(f, "Invalid difficulty '{tag}' (expected easy, medium or hard)")
            }
            Self::NoCandidates => write!(f, "No words available for the selected settings."),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Difficulty level for word mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase name of the difficulty
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// The next difficulty, wrapping from hard back to easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Starting tries, hints and length bounds for this difficulty
    ///
    /// | difficulty | tries | length | hints |
    /// |---|---|---|---|
    /// | easy | base + 3 | 4-5 | 0 |
    /// | medium | base | 5-7 | 1 |
    /// | hard | base - 3 | 7-15 | 2 |
    ///
    /// Hard saturates at zero tries when `base_tries` is below 3.
    #[must_use]
    pub const fn config(self, base_tries: u32) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                tries: base_tries + 3,
                min_len: 4,
                max_len: 5,
                free_hints: 0,
            },
            Self::Medium => DifficultyConfig {
                tries: base_tries,
                min_len: 5,
                max_len: 7,
                free_hints: 1,
            },
            Self::Hard => DifficultyConfig {
                tries: base_tries.saturating_sub(3),
                min_len: 7,
                max_len: 15,
                free_hints: 2,
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Accepts `easy`/`e`, `medium`/`m` and `hard`/`h`, ignoring case and
    /// surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(ConfigError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings derived from a difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub tries: u32,
    pub min_len: usize,
    pub max_len: usize,
    pub free_hints: u32,
}

/// Look up the settings for a difficulty tag
///
/// # Errors
///
/// Returns `ConfigError::InvalidDifficulty` if the tag is not recognised.
///
/// # Examples
/// ```
/// use hangman::core::difficulty_config;
///
/// let easy = difficulty_config("easy", 6).unwrap();
/// assert_eq!((easy.tries, easy.min_len, easy.max_len, easy.free_hints), (9, 4, 5, 0));
///
/// assert!(difficulty_config("nightmare", 6).is_err());
/// ```
pub fn difficulty_config(tag: &str, base_tries: u32) -> Result<DifficultyConfig, ConfigError> {
    Ok(tag.parse::<Difficulty>()?.config(base_tries))
}

/// Settings for phrase mode
///
/// Phrase mode has no upper length bound and ignores difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseModeConfig {
    pub tries: u32,
    pub min_len: usize,
    pub free_hints: u32,
}

impl Default for PhraseModeConfig {
    fn default() -> Self {
        Self {
            tries: 9,
            min_len: 11,
            free_hints: 2,
        }
    }
}

/// Everything needed to start a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub secret: String,
    pub tries: u32,
    pub free_hints: u32,
}

/// Input to [`build_game_config`]
#[derive(Debug, Clone, Copy)]
pub struct ConfigRequest<'a> {
    pub words: &'a [String],
    pub phrase_mode: bool,
    pub difficulty: Difficulty,
    pub base_tries: u32,
}

impl<'a> ConfigRequest<'a> {
    /// Word-mode request with the default base tries
    #[must_use]
    pub const fn new(words: &'a [String], difficulty: Difficulty) -> Self {
        Self {
            words,
            phrase_mode: false,
            difficulty,
            base_tries: DEFAULT_BASE_TRIES,
        }
    }

    /// Switch phrase mode on or off
    #[must_use]
    pub const fn phrase_mode(mut self, phrase_mode: bool) -> Self {
        self.phrase_mode = phrase_mode;
        self
    }

    /// Override the base tries
    #[must_use]
    pub const fn base_tries(mut self, base_tries: u32) -> Self {
        self.base_tries = base_tries;
        self
    }
}

/// Keep entries whose character count lies in `min_len..=max_len`
#[must_use]
pub fn filter_by_length(words: &[String], min_len: usize, max_len: usize) -> Vec<&str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|w| (min_len..=max_len).contains(&w.chars().count()))
        .collect()
}

/// Pick one item uniformly at random, or `None` if the slice is empty
pub fn choose_random<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Draw a secret and derive tries and hints for a new round
///
/// Phrase mode keeps entries of at least 11 characters; word mode keeps
/// entries within the difficulty's length bounds.
///
/// # Errors
///
/// Returns `ConfigError::NoCandidates` if no entry satisfies the bounds.
///
/// # Examples
/// ```
/// use hangman::core::{ConfigRequest, Difficulty, build_game_config};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = vec!["cats".to_string(), "dog".to_string()];
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let config = build_game_config(&ConfigRequest::new(&words, Difficulty::Easy), &mut rng).unwrap();
/// assert_eq!(config.secret, "cats");
/// assert_eq!(config.tries, 9);
/// ```
pub fn build_game_config<R: Rng + ?Sized>(
    request: &ConfigRequest<'_>,
    rng: &mut R,
) -> Result<GameConfig, ConfigError> {
    let (candidates, tries, free_hints) = if request.phrase_mode {
        let cfg = PhraseModeConfig::default();
        (
            filter_by_length(request.words, cfg.min_len, usize::MAX),
            cfg.tries,
            cfg.free_hints,
        )
    } else {
        let cfg = request.difficulty.config(request.base_tries);
        (
            filter_by_length(request.words, cfg.min_len, cfg.max_len),
            cfg.tries,
            cfg.free_hints,
        )
    };

    let secret = choose_random(&candidates, rng).ok_or(ConfigError::NoCandidates)?;

    Ok(GameConfig {
        secret: (*secret).to_string(),
        tries,
        free_hints,
    })
}
