//! Engine errors.
//!
//! Every failure is recoverable: a command that returns an error leaves
//! the tableau, deck, score, move count and history exactly as they were.

/// Why a command was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Deal refused: some pile is empty or the deck is exhausted.
    InvalidDeal,
    /// Undo refused: only the baseline snapshot remains.
    NothingToUndo,
    /// Hint refused: no legal move exists.
    NoMoveAvailable,
    /// The selected run cannot land on the target pile.
    /// The selection has been cleared.
    IllegalMove { from: usize, to: usize },
    /// Player command issued while the game is paused.
    Paused,
    /// Player command issued after the game ended.
    GameOver,
    /// Pile index outside `0..10`.
    InvalidPile(usize),
    /// The card at this position cannot start a selection.
    InvalidCard { pile: usize, index: usize },
    /// Unrecognised difficulty name.
    UnknownDifficulty(String),
    /// Snapshot encoding or decoding failed.
    Snapshot(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidDeal => write!(f, "cannot deal when piles are empty"),
            EngineError::NothingToUndo => write!(f, "nothing to undo"),
            EngineError::NoMoveAvailable => {
                write!(f, "no moves available, try dealing new cards")
            }
            EngineError::IllegalMove { from, to } => {
                write!(f, "cannot move from column {} to column {}", from + 1, to + 1)
            }
            EngineError::Paused => write!(f, "game is paused"),
            EngineError::GameOver => write!(f, "game is over"),
            EngineError::InvalidPile(pile) => write!(f, "no pile at index {pile}"),
            EngineError::InvalidCard { pile, index } => {
                write!(f, "card {index} in pile {pile} cannot be selected")
            }
            EngineError::UnknownDifficulty(name) => write!(f, "unknown difficulty '{name}'"),
            EngineError::Snapshot(reason) => write!(f, "snapshot codec failed: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
