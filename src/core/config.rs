//! Engine configuration.
//!
//! - `Difficulty`: how many completed runs win the game
//! - `EngineConfig`: per-engine settings, serde-friendly with `with_*`
//!   builders

use serde::{Deserialize, Serialize};

use super::card::Suit;
use super::deck::ShuffleMode;
use super::error::EngineError;

/// Default undo depth.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Default countdown per game (15 minutes).
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 900;

/// Game difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Completed runs needed to win.
    #[must_use]
    pub const fn required_runs(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 4,
        }
    }

    /// Foundation slots shown to the player. Display only.
    #[must_use]
    pub const fn foundation_slots(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 8,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Difficulty of the first game.
    pub difficulty: Difficulty,

    /// Seed for the first deal. `None` draws fresh entropy.
    /// With a seed, every later game derives its seed from this one.
    pub seed: Option<u64>,

    /// Deck shuffle strategy.
    pub shuffle: ShuffleMode,

    /// Maximum undo snapshots kept; the oldest is evicted first.
    pub history_limit: usize,

    /// Countdown per game, in seconds.
    pub time_limit_secs: u64,

    /// Suit used for all 104 cards.
    pub suit: Suit,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            shuffle: ShuffleMode::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            suit: Suit::Spades,
        }
    }
}

impl EngineConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the undo depth. Clamped to at least 1.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = suit;
        self
    }
}
