//! Move suggestions.
//!
//! ## Selection Order
//!
//! 1. Enumerate every legal move (`rules::legal_moves`).
//! 2. Drop moves already suggested this game, keyed by
//!    (source pile, target pile, lead rank). If nothing new is left, forget
//!    the shown set and consider every move again.
//! 3. Prefer the first move that turns over a face-down card; otherwise
//!    take the first move in enumeration order.
//!
//! The chosen move is remembered so repeated requests cycle through the
//! alternatives.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank};
use crate::core::error::EngineError;
use crate::rules::moves::{legal_moves, reveals_card, MoveSpec};
use crate::tableau::Tableau;

/// A suggested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub from: usize,
    pub to: usize,
    /// Index of the lead card in the source pile.
    pub start: usize,
    /// Cards carried.
    pub len: usize,
    /// Lead card of the run.
    pub card: Card,
    /// Whether the move would turn over a face-down card.
    pub reveals: bool,
}

impl Hint {
    /// Pile positions to highlight, as (pile, index) pairs.
    pub fn highlighted(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start..self.start + self.len).map(move |index| (self.from, index))
    }

    #[must_use]
    pub fn spec(&self) -> MoveSpec {
        MoveSpec {
            from: self.from,
            start: self.start,
            to: self.to,
            len: self.len,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move {}", self.card)?;
        if self.len > 1 {
            write!(f, " (+{})", self.len - 1)?;
        }
        write!(f, " from column {} to {}", self.from + 1, self.to + 1)
    }
}

/// Key used to recognise an already-shown suggestion.
type ShownKey = (usize, usize, Rank);

/// Suggests moves, remembering what it has already shown.
#[derive(Clone, Debug, Default)]
pub struct HintEngine {
    shown: FxHashSet<ShownKey>,
}

impl HintEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget shown suggestions (new game, undo).
    pub fn reset(&mut self) {
        self.shown.clear();
    }

    /// Number of distinct suggestions shown since the last reset.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Pick the next suggestion for `tableau`.
    pub fn suggest(&mut self, tableau: &Tableau) -> Result<Hint, EngineError> {
        let candidates: Vec<Hint> = legal_moves(tableau)
            .into_iter()
            .filter_map(|spec| to_hint(tableau, spec))
            .collect();
        if candidates.is_empty() {
            return Err(EngineError::NoMoveAvailable);
        }

        let mut fresh: Vec<&Hint> = candidates
            .iter()
            .filter(|hint| !self.shown.contains(&key(hint)))
            .collect();
        if fresh.is_empty() {
            self.shown.clear();
            fresh = candidates.iter().collect();
        }

        let chosen = fresh
            .iter()
            .find(|hint| hint.reveals)
            .or_else(|| fresh.first())
            .map(|hint| **hint)
            .ok_or(EngineError::NoMoveAvailable)?;

        self.shown.insert(key(&chosen));
        Ok(chosen)
    }
}

fn key(hint: &Hint) -> ShownKey {
    (hint.from, hint.to, hint.card.rank)
}

fn to_hint(tableau: &Tableau, spec: MoveSpec) -> Option<Hint> {
    let card = *tableau.piles()[spec.from].get(spec.start)?;
    Some(Hint {
        from: spec.from,
        to: spec.to,
        start: spec.start,
        len: spec.len,
        card,
        reveals: reveals_card(tableau, &spec),
    })
}
