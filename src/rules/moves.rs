//! Move validation: which runs can be picked up and where they can land.
//!
//! ## Picking Up
//!
//! A card can be picked up if it is face-up and every card above it forms
//! a same-suit chain descending one rank per step. The run always reaches
//! the top of the pile.
//!
//! ## Dropping
//!
//! A run lands on an empty pile, or on a face-up card exactly one rank
//! above the run's lead card. Suit does not matter for the landing.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::EngineError;
use crate::tableau::{Pile, Tableau, PILE_COUNT};

/// A picked-up run waiting for a drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Source pile.
    pub pile: usize,
    /// Index of the run's lead (lowest-index) card.
    pub index: usize,
    /// Cards in the run.
    pub len: usize,
}

impl Selection {
    /// True if the run still ends exactly at the top of its pile.
    #[must_use]
    pub fn is_top_aligned(&self, tableau: &Tableau) -> bool {
        tableau
            .pile(self.pile)
            .map_or(false, |pile| self.index + self.len == pile.len())
    }

    /// True if `index` in `pile` is part of this run.
    #[must_use]
    pub fn contains(&self, pile: usize, index: usize) -> bool {
        pile == self.pile && (self.index..self.index + self.len).contains(&index)
    }
}

/// A fully specified move: run `from[start..]` onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSpec {
    pub from: usize,
    pub start: usize,
    pub to: usize,
    /// Cards carried.
    pub len: usize,
}

/// Length of the movable run starting at `index`, or `None` if the card
/// is missing, face-down, or the chain above it breaks.
#[must_use]
pub fn selectable_run_len(pile: &Pile, index: usize) -> Option<usize> {
    let lead = pile.get(index)?;
    if !lead.face_up {
        return None;
    }

    let mut below = lead;
    for card in pile.iter().skip(index + 1) {
        if !card.face_up || !card.continues_run(below) {
            return None;
        }
        below = card;
    }
    Some(pile.len() - index)
}

/// Can a run led by `lead` be dropped on `target`?
#[must_use]
pub fn can_place_on(target: &Pile, lead: &Card) -> bool {
    match target.top() {
        None => true,
        Some(top) => top.face_up && lead.rank.follows(top.rank),
    }
}

/// Build a selection at `pile[index]`.
pub fn select(tableau: &Tableau, pile: usize, index: usize) -> Result<Selection, EngineError> {
    let source = tableau.pile(pile)?;
    let len = selectable_run_len(source, index).ok_or(EngineError::InvalidCard { pile, index })?;
    Ok(Selection { pile, index, len })
}

/// Check that `selection` can be dropped on pile `to`.
pub fn validate_move(
    tableau: &Tableau,
    selection: &Selection,
    to: usize,
) -> Result<MoveSpec, EngineError> {
    let target = tableau.pile(to)?;
    let source = tableau.pile(selection.pile)?;
    let illegal = EngineError::IllegalMove {
        from: selection.pile,
        to,
    };

    if to == selection.pile || !selection.is_top_aligned(tableau) {
        return Err(illegal);
    }
    let lead = source.get(selection.index).ok_or_else(|| illegal.clone())?;
    if !can_place_on(target, lead) {
        return Err(illegal);
    }

    Ok(MoveSpec {
        from: selection.pile,
        start: selection.index,
        to,
        len: selection.len,
    })
}

/// Carry out a validated move. Returns true if a face-down card was
/// revealed on the source pile.
pub fn apply_move(tableau: &mut Tableau, spec: &MoveSpec) -> bool {
    tableau.transfer(spec.from, spec.start, spec.to)
}

/// True if moving `spec` would turn over a face-down card.
#[must_use]
pub fn reveals_card(tableau: &Tableau, spec: &MoveSpec) -> bool {
    spec.start > 0
        && tableau
            .pile(spec.from)
            .ok()
            .and_then(|pile| pile.get(spec.start - 1))
            .is_some_and(|card| !card.face_up)
}

/// Every legal move, ordered by source pile, then lead index, then target.
#[must_use]
pub fn legal_moves(tableau: &Tableau) -> Vec<MoveSpec> {
    let mut moves = Vec::new();

    for (from, pile) in tableau.piles().iter().enumerate() {
        for start in 0..pile.len() {
            let Some(len) = selectable_run_len(pile, start) else {
                continue;
            };
            let Some(lead) = pile.get(start) else {
                continue;
            };

            for to in (0..PILE_COUNT).filter(|&to| to != from) {
                if can_place_on(&tableau.piles()[to], lead) {
                    moves.push(MoveSpec { from, start, to, len });
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::deck::Deck;

    fn up(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades, 0).flipped_up()
    }

    fn down(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades, 1)
    }

    fn tableau_with(piles: Vec<Vec<Card>>) -> Tableau {
        let mut arr: [Pile; PILE_COUNT] = Default::default();
        for (slot, cards) in arr.iter_mut().zip(piles) {
            *slot = Pile::from_cards(cards);
        }
        Tableau::from_parts(arr, Deck::new(), 0, 0)
    }

    #[test]
    fn test_selectable_top_card() {
        let pile = Pile::from_cards([down(Rank::Four), up(Rank::Jack)]);
        assert_eq!(selectable_run_len(&pile, 1), Some(1));
        assert_eq!(selectable_run_len(&pile, 0), None);
        assert_eq!(selectable_run_len(&pile, 2), None);
    }

    #[test]
    fn test_selectable_run() {
        let pile = Pile::from_cards([
            down(Rank::Two),
            up(Rank::Nine),
            up(Rank::Eight),
            up(Rank::Seven),
        ]);
        assert_eq!(selectable_run_len(&pile, 1), Some(3));
        assert_eq!(selectable_run_len(&pile, 2), Some(2));
    }

    #[test]
    fn test_chain_break_blocks_selection() {
        let pile = Pile::from_cards([up(Rank::Nine), up(Rank::Seven)]);
        assert_eq!(selectable_run_len(&pile, 0), None);
        assert_eq!(selectable_run_len(&pile, 1), Some(1));
    }

    #[test]
    fn test_mixed_suit_blocks_selection() {
        let pile = Pile::from_cards([
            up(Rank::Nine),
            Card::new(Rank::Eight, Suit::Hearts, 0).flipped_up(),
        ]);
        assert_eq!(selectable_run_len(&pile, 0), None);
    }

    #[test]
    fn test_can_place_on() {
        let lead = up(Rank::Five);
        assert!(can_place_on(&Pile::new(), &lead));
        assert!(can_place_on(&Pile::from_cards([up(Rank::Six)]), &lead));
        assert!(!can_place_on(&Pile::from_cards([up(Rank::Eight)]), &lead));
        assert!(!can_place_on(&Pile::from_cards([down(Rank::Six)]), &lead));
    }

    #[test]
    fn test_placement_ignores_suit() {
        let lead = Card::new(Rank::Five, Suit::Hearts, 0).flipped_up();
        assert!(can_place_on(&Pile::from_cards([up(Rank::Six)]), &lead));
    }

    #[test]
    fn test_validate_move_rejects_same_pile() {
        let tableau = tableau_with(vec![vec![up(Rank::Six), up(Rank::Five)]]);
        let selection = select(&tableau, 0, 1).unwrap();
        assert_eq!(
            validate_move(&tableau, &selection, 0),
            Err(EngineError::IllegalMove { from: 0, to: 0 })
        );
    }

    #[test]
    fn test_validate_and_apply() {
        let tableau_piles = vec![
            vec![down(Rank::Ace), up(Rank::Six), up(Rank::Five)],
            vec![up(Rank::Seven)],
        ];
        let mut tableau = tableau_with(tableau_piles);
        let selection = select(&tableau, 0, 1).unwrap();
        assert_eq!(selection.len, 2);

        let spec = validate_move(&tableau, &selection, 1).unwrap();
        assert!(reveals_card(&tableau, &spec));
        assert!(apply_move(&mut tableau, &spec));

        assert_eq!(tableau.piles()[1].len(), 3);
        assert_eq!(tableau.piles()[0].len(), 1);
        assert!(tableau.tops_face_up());
    }

    #[test]
    fn test_stale_selection_rejected() {
        let tableau = tableau_with(vec![vec![up(Rank::Six)], vec![]]);
        let stale = Selection {
            pile: 0,
            index: 0,
            len: 3,
        };
        assert!(!stale.is_top_aligned(&tableau));
        assert!(validate_move(&tableau, &stale, 1).is_err());
    }

    #[test]
    fn test_legal_moves_order() {
        let tableau = tableau_with(vec![
            vec![up(Rank::Five)],
            vec![up(Rank::Six)],
            vec![up(Rank::Six)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
            vec![up(Rank::King)],
        ]);

        let moves = legal_moves(&tableau);
        let targets: Vec<_> = moves.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(targets, vec![(0, 1), (0, 2)]);
    }
}
