//! # spider-engine
//!
//! Rules and state engine for one-suit Spider solitaire played with eight
//! decks (104 cards).
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine owns all state and answers commands.
//!    Rendering, popups and timers-as-text live in the caller, which
//!    re-reads `GameEngine::view()` after every command.
//!
//! 2. **Recoverable Failures**: Every refused command returns an
//!    `EngineError` and leaves the game untouched.
//!
//! 3. **Deterministic**: Deals come from a seedable ChaCha RNG and time
//!    from an injected `Clock`, so whole sessions replay exactly in tests.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and deck are `im` vectors, so an
//!   undo snapshot is an O(1) structural clone.
//!
//! - **Post-Command Pass**: After any command that changes pile contents
//!   the engine extracts completed runs and evaluates the win condition.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, clocks, configuration, errors
//! - `tableau`: Piles, deck, score and move counter; dealing
//! - `rules`: Move validation, completed runs, win evaluation
//! - `history`: Bounded undo snapshots
//! - `hint`: Move suggestions with repeat avoidance
//! - `timer`: Elapsed time, pauses and countdown
//! - `engine`: `GameEngine`, the command/query surface

pub mod core;
pub mod tableau;
pub mod rules;
pub mod history;
pub mod hint;
pub mod timer;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Rank, Suit,
    Deck, ShuffleMode, DECK_SIZE,
    GameRng,
    Clock, ManualClock, SystemClock,
    Difficulty, EngineConfig,
    EngineError,
};

pub use crate::tableau::{Pile, Tableau, PILE_COUNT, RUN_LENGTH, RUN_SCORE};

pub use crate::rules::{GameSummary, MoveSpec, Selection, CompletedRun};

pub use crate::history::{History, Snapshot};

pub use crate::hint::{Hint, HintEngine};

pub use crate::timer::{GameTimer, TickOutcome, TimeUrgency};

pub use crate::engine::{
    GameEngine, GameStatus, Outcome,
    CommandReport, MoveReport, DealReport, TickReport,
    EngineView, CardView,
};
