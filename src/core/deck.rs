//! Deck construction and shuffling.
//!
//! A Spider deck is 8 copies of 13 ranks in one suit: 104 cards. The deck
//! is a stack; dealing pops from the end.
//!
//! ## Shuffle Modes
//!
//! - `Uniform`: one Fisher-Yates pass.
//! - `SpreadHighCards`: uniform shuffle, then interleave the J/Q/K cards
//!   with the rest, then a final uniform pass. This only changes how deals
//!   feel; legality never depends on it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// Cards in a full Spider deck.
pub const DECK_SIZE: usize = 104;

/// Copies of each rank in a deck.
pub const COPIES_PER_RANK: u8 = 8;

/// How to randomize a fresh deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Plain uniform permutation.
    Uniform,
    /// Uniform permutation with a high/low interleave pass.
    #[default]
    SpreadHighCards,
}

/// Undealt cards. Top of the stack is the end of the vector.
///
/// Backed by `im::Vector` so history snapshots share structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unshuffled deck: every card face-down, ids `<rank>_<copy>`.
    #[must_use]
    pub fn build(suit: Suit) -> Self {
        let mut cards = Vector::new();
        for copy in 0..COPIES_PER_RANK {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit, copy));
            }
        }
        Self { cards }
    }

    /// Deck from explicit cards (last element is dealt first).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Randomize the deck order.
    pub fn shuffle(&mut self, rng: &mut GameRng, mode: ShuffleMode) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);

        if mode == ShuffleMode::SpreadHighCards {
            cards = spread_high_cards(cards);
            rng.shuffle(&mut cards);
        }

        self.cards = cards.into_iter().collect();
    }
}

/// Alternate low and high cards, starting with a low card, until one side
/// runs out; the remainder follows in order.
fn spread_high_cards(cards: Vec<Card>) -> Vec<Card> {
    let (high, low): (Vec<Card>, Vec<Card>) = cards.into_iter().partition(|c| c.rank.is_high());

    let mut spread = Vec::with_capacity(high.len() + low.len());
    let mut high = high.into_iter();
    let mut low = low.into_iter();
    loop {
        let next_low = low.next();
        let next_high = high.next();
        if next_low.is_none() && next_high.is_none() {
            break;
        }
        spread.extend(next_low);
        spread.extend(next_high);
    }
    spread
}
