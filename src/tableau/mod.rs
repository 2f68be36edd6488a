//! Tableau state: ten piles, the undealt deck, score and move counter.
//!
//! `Tableau` is also the undo snapshot unit. Piles and deck are persistent
//! vectors, so a snapshot is a cheap structural clone that still carries
//! every card's identity.
//!
//! ## Invariants (at the end of every command)
//!
//! - `deck.len() + Σ pile.len() + 13 × completed runs == 104`
//! - every non-empty pile has a face-up top card
//!
//! ## Layout
//!
//! ```text
//! pile:   0  1  2  3  4  5  6  7  8  9
//! cards:  6  6  6  6  5  5  5  5  5  5   (54 dealt, 50 left in the deck)
//! ```

pub mod pile;

pub use pile::Pile;

use serde::{Deserialize, Serialize};

use crate::core::deck::{Deck, DECK_SIZE};
use crate::core::error::EngineError;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 10;

/// Cards in a completed King-to-Ace run.
pub const RUN_LENGTH: usize = 13;

/// Points awarded per completed run.
pub const RUN_SCORE: u32 = 100;

/// Initial cards per pile.
const INITIAL_PILE_SIZES: [usize; PILE_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// The playing field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    piles: [Pile; PILE_COUNT],
    deck: Deck,
    moves: u32,
    score: u32,
}

impl Tableau {
    /// Deal a fresh layout from a shuffled deck.
    ///
    /// Each pile takes its cards off the top of the deck in turn; only the
    /// last card of each pile is turned face-up. With a short deck the
    /// later piles simply receive fewer cards.
    #[must_use]
    pub fn deal(mut deck: Deck) -> Self {
        let mut piles: [Pile; PILE_COUNT] = Default::default();
        for (pile, &size) in piles.iter_mut().zip(INITIAL_PILE_SIZES.iter()) {
            for _ in 0..size {
                let Some(card) = deck.pop() else { break };
                pile.push(card);
            }
            pile.reveal_top();
        }

        Self {
            piles,
            deck,
            moves: 0,
            score: 0,
        }
    }

    /// Tableau from explicit piles and deck, e.g. a composed position.
    ///
    /// Card faces are taken as given; call sites are responsible for the
    /// face-up-top invariant.
    #[must_use]
    pub fn from_parts(piles: [Pile; PILE_COUNT], deck: Deck, moves: u32, score: u32) -> Self {
        Self {
            piles,
            deck,
            moves,
            score,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn piles(&self) -> &[Pile; PILE_COUNT] {
        &self.piles
    }

    /// Pile at `index`, or `InvalidPile`.
    pub fn pile(&self, index: usize) -> Result<&Pile, EngineError> {
        self.piles.get(index).ok_or(EngineError::InvalidPile(index))
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Runs completed so far (`score / 100`).
    #[must_use]
    pub fn completed_runs(&self) -> u32 {
        self.score / RUN_SCORE
    }

    /// Cards on the tableau plus in the deck.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.piles.iter().map(Pile::len).sum::<usize>()
    }

    /// Every card is accounted for: in play or inside a completed run.
    #[must_use]
    pub fn is_card_count_consistent(&self) -> bool {
        self.cards_in_play() + self.completed_runs() as usize * RUN_LENGTH == DECK_SIZE
    }

    /// Every non-empty pile shows its top card.
    #[must_use]
    pub fn tops_face_up(&self) -> bool {
        self.piles.iter().all(Pile::top_is_face_up)
    }

    /// A row can be dealt: no empty pile and cards left in the deck.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.deck.is_empty() && self.piles.iter().all(|p| !p.is_empty())
    }

    // === Mutation ===

    /// Deal one face-up card onto each pile, in order, while cards remain.
    ///
    /// Counts as one move. Returns the number of cards dealt.
    pub fn deal_row(&mut self) -> Result<usize, EngineError> {
        if !self.can_deal() {
            return Err(EngineError::InvalidDeal);
        }

        let mut dealt = 0;
        for pile in &mut self.piles {
            let Some(card) = self.deck.pop() else { break };
            pile.push(card.flipped_up());
            dealt += 1;
        }
        self.moves += 1;
        Ok(dealt)
    }

    /// Move the cards at `start..` of pile `from` onto pile `to`.
    ///
    /// No legality check; see `rules::moves`. Counts as one move and
    /// reveals the source pile's new top. Returns true if a face-down card
    /// was revealed.
    pub(crate) fn transfer(&mut self, from: usize, start: usize, to: usize) -> bool {
        let moving = self.piles[from].split_off(start);
        self.piles[to].append(moving);
        self.moves += 1;
        self.piles[from].reveal_top()
    }

    pub(crate) fn pile_mut(&mut self, index: usize) -> &mut Pile {
        &mut self.piles[index]
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
