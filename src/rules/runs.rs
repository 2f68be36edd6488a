//! Completed-run detection and scoring.
//!
//! A completed run is 13 face-up cards of one suit, King down to Ace, in
//! consecutive pile positions. Each one found is removed from its pile and
//! scores 100 points. Detection is idempotent: on a tableau with no
//! completed run it changes nothing.

use smallvec::SmallVec;

use crate::core::card::{Card, Rank, Suit};
use crate::tableau::{Pile, Tableau, RUN_LENGTH, RUN_SCORE};

/// A run removed from the tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletedRun {
    /// Pile the run was taken from.
    pub pile: usize,
    pub suit: Suit,
}

/// Completed runs removed by one detection pass. Usually zero or one.
pub type CompletedRuns = SmallVec<[CompletedRun; 2]>;

/// True if `cards` is exactly a face-up, same-suit King..Ace sequence.
#[must_use]
pub fn is_complete_run(cards: &[Card]) -> bool {
    if cards.len() != RUN_LENGTH {
        return false;
    }
    let (Some(first), Some(last)) = (cards.first(), cards.last()) else {
        return false;
    };

    first.rank == Rank::King
        && last.rank == Rank::Ace
        && cards.iter().all(|c| c.face_up)
        && cards.windows(2).all(|pair| pair[1].continues_run(&pair[0]))
}

/// Start index of the highest completed run in `pile`, scanning from the
/// top downward.
#[must_use]
pub fn find_complete_run(pile: &Pile) -> Option<usize> {
    if pile.len() < RUN_LENGTH {
        return None;
    }

    let cards: Vec<Card> = pile.iter().copied().collect();
    (0..=cards.len() - RUN_LENGTH)
        .rev()
        .find(|&start| is_complete_run(&cards[start..start + RUN_LENGTH]))
}

/// Remove every completed run, scoring each one.
///
/// A pile is re-scanned after each removal, since taking one run away can
/// expose another.
pub fn extract_completed_runs(tableau: &mut Tableau) -> CompletedRuns {
    let mut removed = CompletedRuns::new();

    for index in 0..tableau.piles().len() {
        while let Some(start) = find_complete_run(&tableau.piles()[index]) {
            let pile = tableau.pile_mut(index);
            let run = pile.remove_span(start, RUN_LENGTH);
            pile.reveal_top();

            let suit = run.front().map_or(Suit::default(), |c| c.suit);
            tableau.add_score(RUN_SCORE);
            log::debug!("completed {} run removed from pile {}", suit, index);
            removed.push(CompletedRun { pile: index, suit });
        }
    }

    removed
}
