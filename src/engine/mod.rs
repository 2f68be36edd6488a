//! The game engine: one object owning all game state.
//!
//! ## Command Flow
//!
//! The presentation layer calls a command (`select_or_move`, `deal`,
//! `undo`, `hint`, `new_game`, `toggle_pause`, `tick`), then re-renders
//! from `view()`. Every command that changes pile contents finishes with
//! the post-command pass:
//!
//! 1. remove completed runs and score them (`rules::runs`)
//! 2. check the difficulty target (`rules::win`); on a win the clock stops
//!    and further player commands return `GameOver`
//!
//! ## Failure Contract
//!
//! A command returning `Err` leaves tableau, deck, score, moves and
//! history untouched. The one deliberate side effect: a rejected drop
//! (`IllegalMove`) clears the pending selection.
//!
//! ```
//! use spider_engine::{EngineConfig, GameEngine, ManualClock};
//!
//! let mut engine = GameEngine::with_clock(EngineConfig::default().with_seed(7), ManualClock::new());
//! assert_eq!(engine.deck_len(), 50);
//! engine.deal().unwrap();
//! assert_eq!(engine.moves(), 1);
//! engine.undo().unwrap();
//! assert_eq!(engine.moves(), 0);
//! ```

pub mod view;

pub use view::{CardView, EngineView};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{Difficulty, EngineConfig};
use crate::core::deck::Deck;
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::hint::{Hint, HintEngine};
use crate::history::History;
use crate::rules::moves::{self, MoveSpec, Selection};
use crate::rules::runs::{extract_completed_runs, CompletedRuns};
use crate::rules::win::{is_won, GameSummary};
use crate::tableau::{Pile, Tableau, PILE_COUNT};
use crate::timer::{GameTimer, TickOutcome};

/// Whether the current game is still being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(GameSummary),
}

/// What the post-command pass found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandReport {
    /// Runs removed and scored.
    pub completed: CompletedRuns,
    /// Set when this command won the game.
    pub won: Option<GameSummary>,
}

/// A move that was carried out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub spec: MoveSpec,
    /// A face-down card was turned over on the source pile.
    pub revealed: bool,
    pub after: CommandReport,
}

/// A dealt row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealReport {
    pub dealt: usize,
    pub after: CommandReport,
}

/// Result of a click on a pile position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A run was picked up.
    Selected(Selection),
    /// The pending run was dropped and moved.
    Moved(MoveReport),
    /// Nothing selectable there; no state change.
    Ignored,
}

/// Result of a periodic tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// Summary of the game that just ran out of time. A new game has
    /// already been started in its place.
    pub expired_game: Option<GameSummary>,
}

/// Spider game engine.
///
/// Owns the tableau, undo history, selection, hint memory and clock.
/// Generic over the time source so tests can drive time by hand.
#[derive(Debug)]
pub struct GameEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
    rng: GameRng,
    game_seed: u64,
    difficulty: Difficulty,
    tableau: Tableau,
    history: History,
    selection: Option<Selection>,
    hints: HintEngine,
    last_hint: Option<Hint>,
    timer: GameTimer,
    status: GameStatus,
}

impl GameEngine<SystemClock> {
    /// Create an engine on the system clock and deal the first game.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> GameEngine<C> {
    /// Create an engine on a custom clock and deal the first game.
    #[must_use]
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let timer = GameTimer::start(clock.now_ms(), config.time_limit_secs);
        let mut engine = Self {
            difficulty: config.difficulty,
            history: History::new(config.history_limit),
            config,
            clock,
            rng,
            game_seed: 0,
            tableau: Tableau::default(),
            selection: None,
            hints: HintEngine::new(),
            last_hint: None,
            timer,
            status: GameStatus::Playing,
        };
        engine.start_game(engine.difficulty);
        engine
    }

    // === Commands ===

    /// Switch difficulty and start a new game at that level.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            debug!("difficulty changed: {} -> {}", self.difficulty, difficulty);
        }
        self.start_game(difficulty);
    }

    /// Throw away the current game and deal a new one.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.start_game(difficulty);
    }

    /// Click on `pile[index]`.
    ///
    /// With nothing selected this tries to pick up the run at that card.
    /// With a run selected it tries to drop the run on `pile`; `index` is
    /// then irrelevant (pass `pile.len()` for a click on the pile itself).
    pub fn select_or_move(&mut self, pile: usize, index: usize) -> Result<Outcome, EngineError> {
        self.ensure_playable()?;
        self.tableau.pile(pile)?;

        let Some(selection) = self.selection.take() else {
            return match moves::select(&self.tableau, pile, index) {
                Ok(selection) => {
                    trace!("selected {} card(s) at pile {} index {}", selection.len, pile, index);
                    self.selection = Some(selection);
                    Ok(Outcome::Selected(selection))
                }
                Err(EngineError::InvalidCard { .. }) => {
                    trace!("nothing selectable at pile {} index {}", pile, index);
                    Ok(Outcome::Ignored)
                }
                Err(err) => Err(err),
            };
        };

        let spec = moves::validate_move(&self.tableau, &selection, pile).map_err(|err| {
            trace!("drop rejected: {}", err);
            err
        })?;
        Ok(Outcome::Moved(self.perform_move(spec)))
    }

    /// Pick up the run at `pile[index]`, replacing any pending selection.
    pub fn select(&mut self, pile: usize, index: usize) -> Result<Selection, EngineError> {
        self.ensure_playable()?;
        let selection = moves::select(&self.tableau, pile, index)?;
        self.selection = Some(selection);
        Ok(selection)
    }

    /// Drop any pending selection.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Move the run starting at `from[start]` onto `to` in one step.
    pub fn move_run(&mut self, from: usize, start: usize, to: usize) -> Result<MoveReport, EngineError> {
        self.ensure_playable()?;
        let selection = moves::select(&self.tableau, from, start)?;
        let spec = moves::validate_move(&self.tableau, &selection, to)?;
        self.selection = None;
        Ok(self.perform_move(spec))
    }

    /// Deal one card onto every pile.
    ///
    /// Refused with `InvalidDeal` if any pile is empty or the deck is
    /// exhausted; a refused deal does not count as a move.
    pub fn deal(&mut self) -> Result<DealReport, EngineError> {
        self.ensure_playable()?;

        let before = self.tableau.clone();
        let dealt = self.tableau.deal_row()?;
        self.history.record(&before);
        self.selection = None;
        self.last_hint = None;
        debug!("dealt {} card(s), {} left in deck", dealt, self.tableau.deck().len());

        Ok(DealReport {
            dealt,
            after: self.post_command(),
        })
    }

    /// Restore the state saved before the most recent move or deal.
    pub fn undo(&mut self) -> Result<CommandReport, EngineError> {
        self.ensure_playable()?;

        let snapshot = self.history.pop()?;
        self.tableau = snapshot.into_tableau();
        self.selection = None;
        self.last_hint = None;
        self.hints.reset();
        debug!("undo: {} snapshot(s) left", self.history.len());

        Ok(self.post_command())
    }

    /// Suggest a move. Does not change the tableau.
    pub fn hint(&mut self) -> Result<Hint, EngineError> {
        self.ensure_playable()?;

        let hint = self.hints.suggest(&self.tableau)?;
        debug!("hint: {}", hint);
        self.last_hint = Some(hint);
        Ok(hint)
    }

    /// Pause or resume. Returns true if the game is now paused.
    ///
    /// Pausing only affects time accounting and blocks player commands.
    pub fn toggle_pause(&mut self) -> bool {
        let now = self.clock.now_ms();
        if self.timer.is_paused() {
            self.timer.resume(now);
        } else {
            self.timer.pause(now);
        }
        debug!("paused: {}", self.timer.is_paused());
        self.timer.is_paused()
    }

    /// Periodic clock check, about once per second.
    ///
    /// When the countdown runs out the current game is abandoned and a new
    /// one is dealt at the same difficulty.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now_ms();
        let outcome = self.timer.tick(now);
        if outcome != TickOutcome::Expired {
            return TickReport {
                outcome,
                expired_game: None,
            };
        }

        let summary = GameSummary::new(self.difficulty, self.timer.elapsed_secs(now), &self.tableau);
        info!("time up: {}", summary);
        self.start_game(self.difficulty);

        TickReport {
            outcome,
            expired_game: Some(summary),
        }
    }

    /// Replace the current game with a composed position at the current
    /// difficulty. The position becomes the undo baseline and the clock
    /// restarts.
    ///
    /// Test support: the card count is not checked, so a composed position
    /// may hold fewer than 104 cards. Every non-empty pile must show its top
    /// card (checked in debug builds).
    #[doc(hidden)]
    pub fn load_position(&mut self, tableau: Tableau) {
        debug_assert!(tableau.tops_face_up(), "composed position has a face-down top");
        self.tableau = tableau;
        self.history.clear();
        self.history.record(&self.tableau);
        self.selection = None;
        self.hints.reset();
        self.last_hint = None;
        self.timer = GameTimer::start(self.clock.now_ms(), self.config.time_limit_secs);
        self.status = GameStatus::Playing;
        debug!("loaded composed position");
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[must_use]
    pub fn piles(&self) -> &[Pile; PILE_COUNT] {
        self.tableau.piles()
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.tableau.deck().len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.tableau.score()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.tableau.moves()
    }

    #[must_use]
    pub fn completed_runs(&self) -> u32 {
        self.tableau.completed_runs()
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn last_hint(&self) -> Option<Hint> {
        self.last_hint
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seed the current deal was shuffled with.
    #[must_use]
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs(self.clock.now_ms())
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs(self.clock.now_ms())
    }

    /// Read model for rendering.
    #[must_use]
    pub fn view(&self) -> EngineView {
        EngineView::capture(self)
    }

    // === Internals ===

    fn ensure_playable(&self) -> Result<(), EngineError> {
        if self.timer.is_paused() {
            return Err(EngineError::Paused);
        }
        if self.is_won() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        let mut deal_rng = self.rng.next_game();
        let mut deck = Deck::build(self.config.suit);
        deck.shuffle(&mut deal_rng, self.config.shuffle);

        self.difficulty = difficulty;
        self.game_seed = deal_rng.seed();
        self.tableau = Tableau::deal(deck);
        self.history.clear();
        self.history.record(&self.tableau);
        self.selection = None;
        self.hints.reset();
        self.last_hint = None;
        self.timer = GameTimer::start(self.clock.now_ms(), self.config.time_limit_secs);
        self.status = GameStatus::Playing;

        info!("new {} game, seed {}", difficulty, self.game_seed);
    }

    fn perform_move(&mut self, spec: MoveSpec) -> MoveReport {
        let before = self.tableau.clone();
        let revealed = moves::apply_move(&mut self.tableau, &spec);
        self.history.record(&before);
        self.last_hint = None;
        debug!(
            "moved {} card(s) from pile {} to pile {}{}",
            spec.len,
            spec.from,
            spec.to,
            if revealed { ", revealed a card" } else { "" }
        );

        MoveReport {
            spec,
            revealed,
            after: self.post_command(),
        }
    }

    /// Derived checks after any command that changed pile contents.
    fn post_command(&mut self) -> CommandReport {
        let completed = extract_completed_runs(&mut self.tableau);
        let won = self.evaluate_win();
        CommandReport { completed, won }
    }

    fn evaluate_win(&mut self) -> Option<GameSummary> {
        if self.is_won() || !is_won(&self.tableau, self.difficulty) {
            return None;
        }

        let now = self.clock.now_ms();
        self.timer.stop(now);
        let summary = GameSummary::new(self.difficulty, self.timer.elapsed_secs(now), &self.tableau);
        info!("game won: {}", summary);
        self.status = GameStatus::Won(summary.clone());
        Some(summary)
    }
}
