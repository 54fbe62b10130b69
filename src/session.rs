//! Player session
//!
//! Holds everything that outlives a single round: the player, the loaded
//! corpora, the chosen settings, the current round and running statistics.

use crate::core::{
    ConfigError, ConfigRequest, DEFAULT_BASE_TRIES, Difficulty, DisplayView, GameState, Status,
    build_game_config,
};
use rand::Rng;
use tracing::{debug, info};

/// Settings applied when the next round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub phrase_mode: bool,
    pub base_tries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            phrase_mode: false,
            base_tries: DEFAULT_BASE_TRIES,
        }
    }
}

/// Results across all finished rounds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    pub quit: usize,
}

impl Statistics {
    /// Record a finished round
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Playing => return,
            Status::Won => self.won += 1,
            Status::Lost => self.lost += 1,
            Status::Quit => self.quit += 1,
        }
        self.played += 1;
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

/// Application context shared by the front ends
#[derive(Debug, Clone)]
pub struct Session {
    player: String,
    words: Vec<String>,
    phrases: Vec<String>,
    pub settings: Settings,
    game: Option<GameState>,
    stats: Statistics,
    passage_banner: Option<&'static str>,
}

impl Session {
    /// Create a session over already loaded corpora
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        words: Vec<String>,
        phrases: Vec<String>,
        settings: Settings,
    ) -> Self {
        Self {
            player: player.into(),
            words,
            phrases,
            settings,
            game: None,
            stats: Statistics::default(),
            passage_banner: None,
        }
    }

    /// Greeting shown before the first round
    #[must_use]
    pub fn welcome(&self) -> String {
        format!(
            "Welcome, {}! Do you want to play phrase mode?",
            self.player
        )
    }

    /// Start a new round with the current settings, replacing any round in progress
    ///
    /// A round abandoned before it finished is not counted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoCandidates` if the active corpus has no entry
    /// matching the settings.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&GameState, ConfigError> {
        let request = ConfigRequest::new(self.active_corpus(), self.settings.difficulty)
            .phrase_mode(self.settings.phrase_mode)
            .base_tries(self.settings.base_tries);
        let config = build_game_config(&request, rng)?;

        info!(
            player = %self.player,
            difficulty = %self.settings.difficulty,
            phrase_mode = self.settings.phrase_mode,
            tries = config.tries,
            hints = config.free_hints,
            "new round"
        );

        Ok(&*self
            .game
            .insert(GameState::from_config(config, self.settings.difficulty)))
    }

    /// Feed one line of input to the current round
    ///
    /// Statistics are updated once, on the transition into a terminal state.
    /// Returns `None` if no round has been started.
    pub fn submit<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> Option<DisplayView> {
        let game = self.game.take()?;
        let was_playing = !game.status().is_terminal();

        let game = game.process_guess(raw, rng);
        debug!(
            input = raw,
            status = %game.status(),
            remaining = game.remaining(),
            hints = game.hints(),
            message = game.message(),
            "guess processed"
        );

        if was_playing && game.status().is_terminal() {
            self.stats.record(game.status());
            info!(status = %game.status(), misses = game.miss_count(), "round finished");
        }

        let view = game.display();
        self.game = Some(game);
        Some(view)
    }

    /// Current round, if any
    #[must_use]
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// True while a round is being played
    #[must_use]
    pub fn in_round(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| !game.status().is_terminal())
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn set_player(&mut self, player: impl Into<String>) {
        self.player = player.into();
    }

    /// Corpus the next round draws from: phrases in phrase mode, words otherwise
    #[must_use]
    pub fn active_corpus(&self) -> &[String] {
        if self.settings.phrase_mode {
            &self.phrases
        } else {
            &self.words
        }
    }

    /// Attach the banner shown before asking about phrase mode
    #[must_use]
    pub fn with_passage_banner(mut self, banner: &'static str) -> Self {
        self.passage_banner = Some(banner);
        self
    }

    #[must_use]
    pub const fn passage_banner(&self) -> Option<&'static str> {
        self.passage_banner
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(settings: Settings) -> Session {
        Session::new(
            "Ada",
            vec!["cats".to_string(), "planet".to_string()],
            vec!["the sea opened like a door".to_string()],
            settings,
        )
    }

    #[test]
    fn welcome_names_player() {
        let session = session(Settings::default());
        assert_eq!(
            session.welcome(),
            "Welcome, Ada! Do you want to play phrase mode?"
        );
    }

    #[test]
    fn submit_without_round_is_none() {
        let mut session = session(Settings::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(session.submit("a", &mut rng).is_none());
        assert!(!session.in_round());
    }

    #[test]
    fn new_round_uses_word_corpus() {
        let mut session = session(Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let game = session.new_round(&mut rng).unwrap();
        assert_eq!(game.secret(), "cats");
        assert_eq!(game.remaining(), 9);
        assert!(session.in_round());
    }

    #[test]
    fn new_round_uses_phrase_corpus() {
        let mut session = session(Settings {
            phrase_mode: true,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        let game = session.new_round(&mut rng).unwrap();
        assert_eq!(game.secret(), "the sea opened like a door");
        assert_eq!(game.hints(), 2);
    }

    #[test]
    fn new_round_reports_missing_candidates() {
        let mut session = session(Settings {
            difficulty: Difficulty::Hard,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            session.new_round(&mut rng).unwrap_err(),
            ConfigError::NoCandidates
        );
        assert!(session.game().is_none());
    }

    #[test]
    fn finished_round_is_counted_once() {
        let mut session = session(Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        session.new_round(&mut rng).unwrap();

        for letter in ["c", "a", "t", "s"] {
            session.submit(letter, &mut rng);
        }
        let view = session.submit("x", &mut rng).unwrap();

        assert_eq!(view.status, Status::Won);
        assert_eq!(session.stats().played, 1);
        assert_eq!(session.stats().won, 1);
        assert!(!session.in_round());
    }

    #[test]
    fn quit_is_counted() {
        let mut session = session(Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);
        session.new_round(&mut rng).unwrap();

        let view = session.submit("quit", &mut rng).unwrap();

        assert_eq!(view.message, "You quit the game.");
        assert_eq!(session.stats().quit, 1);
    }

    #[test]
    fn abandoned_round_is_not_counted() {
        let mut session = session(Settings {
            difficulty: Difficulty::Easy,
            ..Settings::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        session.new_round(&mut rng).unwrap();
        session.submit("c", &mut rng);
        session.new_round(&mut rng).unwrap();

        assert_eq!(session.stats().played, 0);
        assert_eq!(session.game().unwrap().display().mask, "_ _ _ _");
    }

    #[test]
    fn active_corpus_follows_phrase_mode() {
        let mut session = session(Settings::default());
        assert_eq!(session.active_corpus(), ["cats", "planet"]);

        session.settings.phrase_mode = true;
        assert_eq!(session.active_corpus(), ["the sea opened like a door"]);
    }

    #[test]
    fn passage_banner_is_optional() {
        let session = session(Settings::default());
        assert!(session.passage_banner().is_none());

        let session = session.with_passage_banner("LOG");
        assert_eq!(session.passage_banner(), Some("LOG"));
    }

    #[test]
    fn statistics_win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);

        stats.record(Status::Won);
        stats.record(Status::Lost);
        stats.record(Status::Playing);

        assert_eq!(stats.played, 2);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
