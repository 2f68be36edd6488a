//! A single tableau pile.
//!
//! Index 0 is the bottom card; the top is the last element. Backed by
//! `im::Vector` so cloning a pile for undo is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// One of the ten tableau columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile from explicit cards, bottom first.
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

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.face_up).count()
    }

    /// True if empty or the top card is face-up.
    #[must_use]
    pub fn top_is_face_up(&self) -> bool {
        self.top().map_or(true, |c| c.face_up)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Detach everything from `start` upward.
    pub(crate) fn split_off(&mut self, start: usize) -> Vector<Card> {
        self.cards.split_off(start)
    }

    pub(crate) fn append(&mut self, cards: Vector<Card>) {
        self.cards.append(cards);
    }

    /// Remove `count` cards starting at `start`, keeping anything above.
    pub(crate) fn remove_span(&mut self, start: usize, count: usize) -> Vector<Card> {
        let mut above = self.cards.split_off(start);
        let rest = above.split_off(count.min(above.len()));
        self.cards.append(rest);
        above
    }

    /// Turn the top card face-up. Returns true if it was face-down.
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
