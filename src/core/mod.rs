//! Core building blocks: cards, decks, RNG, clocks, configuration, errors.
//!
//! Nothing here knows about piles or rules; the tableau and rule modules
//! are built on top.

pub mod card;
pub mod deck;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{Deck, ShuffleMode, COPIES_PER_RANK, DECK_SIZE};
pub use rng::GameRng;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Difficulty, EngineConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_TIME_LIMIT_SECS};
pub use error::EngineError;
