//! Spider rules, kept apart from engine bookkeeping.
//!
//! - `moves`: what can be picked up and where it can land
//! - `runs`: completed King-to-Ace runs and their score
//! - `win`: difficulty targets and end-of-game summaries
//!
//! Rule functions read or mutate a `Tableau` directly; they know nothing
//! about selections in progress, history, hints or time.

pub mod moves;
pub mod runs;
pub mod win;

pub use moves::{
    apply_move, can_place_on, legal_moves, reveals_card, select, selectable_run_len,
    validate_move, MoveSpec, Selection,
};
pub use runs::{extract_completed_runs, find_complete_run, is_complete_run, CompletedRun, CompletedRuns};
pub use win::{is_won, GameSummary};
