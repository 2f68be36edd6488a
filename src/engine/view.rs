//! Read model handed to the presentation layer after every command.
//!
//! Everything needed to draw the board and the status bar, flattened into
//! plain serializable values.

use serde::Serialize;

use super::{GameEngine, GameStatus};
use crate::core::card::{Card, CardId, Rank, Suit};
use crate::core::clock::Clock;
use crate::core::config::Difficulty;
use crate::hint::Hint;
use crate::rules::moves::Selection;
use crate::rules::win::GameSummary;
use crate::timer::{format_clock, TimeUrgency};

/// One card as drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
    /// Part of the pending selection.
    pub selected: bool,
    /// Part of the last suggested move.
    pub hinted: bool,
}

/// Full board and status snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineView {
    /// Piles, bottom card first.
    pub piles: Vec<Vec<CardView>>,
    pub deck_len: usize,
    pub score: u32,
    pub moves: u32,
    pub difficulty: Difficulty,
    pub selection: Option<Selection>,
    pub hint: Option<Hint>,
    pub can_undo: bool,
    pub paused: bool,
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
    /// Countdown as `MM:SS`.
    pub clock_label: String,
    pub urgency: TimeUrgency,
    /// Foundation slots for the difficulty; `true` = filled by a run.
    pub foundation: Vec<bool>,
    /// Present once the game is won.
    pub won: Option<GameSummary>,
}

impl EngineView {
    pub(crate) fn capture<C: Clock>(engine: &GameEngine<C>) -> Self {
        let selection = engine.selection();
        let hint = engine.last_hint();

        let piles = engine
            .piles()
            .iter()
            .enumerate()
            .map(|(pile_index, pile)| {
                pile.iter()
                    .enumerate()
                    .map(|(index, card)| card_view(card, pile_index, index, selection, hint))
                    .collect()
            })
            .collect();

        let completed = engine.completed_runs() as usize;
        let foundation = (0..engine.difficulty().foundation_slots())
            .map(|slot| slot < completed)
            .collect();

        let remaining_secs = engine.remaining_secs();
        let won = match engine.status() {
            GameStatus::Won(summary) => Some(summary.clone()),
            GameStatus::Playing => None,
        };

        Self {
            piles,
            deck_len: engine.deck_len(),
            score: engine.score(),
            moves: engine.moves(),
            difficulty: engine.difficulty(),
            selection,
            hint,
            can_undo: engine.can_undo(),
            paused: engine.is_paused(),
            elapsed_secs: engine.elapsed_secs(),
            remaining_secs,
            clock_label: format_clock(remaining_secs),
            urgency: TimeUrgency::for_remaining(remaining_secs),
            foundation,
            won,
        }
    }
}

fn card_view(
    card: &Card,
    pile: usize,
    index: usize,
    selection: Option<Selection>,
    hint: Option<Hint>,
) -> CardView {
    CardView {
        id: card.id,
        rank: card.rank,
        suit: card.suit,
        face_up: card.face_up,
        selected: selection.is_some_and(|s| s.contains(pile, index)),
        hinted: hint.is_some_and(|h| h.highlighted().any(|pos| pos == (pile, index))),
    }
}
