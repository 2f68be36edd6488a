//! Win evaluation and end-of-game summaries.

use serde::{Deserialize, Serialize};

use crate::core::config::Difficulty;
use crate::tableau::Tableau;

/// Final figures reported when a game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub elapsed_secs: u64,
    pub moves: u32,
    pub score: u32,
}

impl GameSummary {
    #[must_use]
    pub fn new(difficulty: Difficulty, elapsed_secs: u64, tableau: &Tableau) -> Self {
        Self {
            difficulty,
            elapsed_secs,
            moves: tableau.moves(),
            score: tableau.score(),
        }
    }

    /// Elapsed time as `M:SS`.
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format!("{}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level: {} | Time: {} | Moves: {} | Score: {}",
            self.difficulty,
            self.elapsed_label(),
            self.moves,
            self.score
        )
    }
}

/// True once enough runs are complete for `difficulty`.
#[must_use]
pub fn is_won(tableau: &Tableau, difficulty: Difficulty) -> bool {
    tableau.completed_runs() >= difficulty.required_runs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Deck;

    fn scored(score: u32) -> Tableau {
        Tableau::from_parts(Default::default(), Deck::new(), 12, score)
    }

    #[test]
    fn test_required_runs_per_difficulty() {
        assert!(!is_won(&scored(0), Difficulty::Easy));
        assert!(is_won(&scored(100), Difficulty::Easy));
        assert!(!is_won(&scored(100), Difficulty::Medium));
        assert!(is_won(&scored(200), Difficulty::Medium));
        assert!(!is_won(&scored(300), Difficulty::Hard));
        assert!(is_won(&scored(400), Difficulty::Hard));
    }

    #[test]
    fn test_summary_formatting() {
        let summary = GameSummary::new(Difficulty::Medium, 125, &scored(200));
        assert_eq!(summary.elapsed_label(), "2:05");
        assert_eq!(summary.moves, 12);
        assert_eq!(
            summary.to_string(),
            "Level: Medium | Time: 2:05 | Moves: 12 | Score: 200"
        );
    }
}
