//! Undo history.
//!
//! ## Model
//!
//! - A new game records its post-deal state as the baseline snapshot.
//! - Every mutating command records the state *before* it changes anything.
//! - `undo` pops the newest snapshot and hands it back for restoring, so
//!   `record(); mutate(); undo()` returns to exactly the recorded state.
//! - The history is bounded; past the limit the oldest snapshot is evicted.
//!
//! Undo is possible while more than one snapshot remains, which keeps the
//! baseline in place until eviction pushes it out.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_HISTORY_LIMIT;
use crate::core::error::EngineError;
use crate::tableau::Tableau;

/// A saved tableau: piles, deck, moves and score.
///
/// Cloning is O(1); cards keep their identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    tableau: Tableau,
}

impl Snapshot {
    #[must_use]
    pub fn capture(tableau: &Tableau) -> Self {
        Self {
            tableau: tableau.clone(),
        }
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[must_use]
    pub fn into_tableau(self) -> Tableau {
        self.tableau
    }

    /// Compact binary encoding (bincode).
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Bounded stack of snapshots.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vector<Snapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history holding at most `limit` snapshots (min 1).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vector::new(),
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Newest snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Save `tableau`, evicting the oldest snapshot past the limit.
    pub fn record(&mut self, tableau: &Tableau) {
        self.entries.push_back(Snapshot::capture(tableau));
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Remove and return the newest snapshot.
    pub fn pop(&mut self) -> Result<Snapshot, EngineError> {
        if !self.can_undo() {
            return Err(EngineError::NothingToUndo);
        }
        self.entries.pop_back().ok_or(EngineError::NothingToUndo)
    }
}
