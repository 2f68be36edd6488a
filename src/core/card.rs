//! Card identity: ranks, suits and individual cards.
//!
//! ## Rank Ordering
//!
//! Ranks are totally ordered by `value()` (Ace = 0 .. King = 12). Run
//! building only ever needs equality and "one step down" comparisons:
//!
//! ```
//! use spider_engine::core::Rank;
//!
//! assert_eq!(Rank::King.successor(), Some(Rank::Queen));
//! assert_eq!(Rank::Ace.successor(), None);
//! assert!(Rank::Four.follows(Rank::Five));
//! ```
//!
//! ## Card Identity
//!
//! Eight copies of each rank share a deck, so a card is identified by
//! `CardId { rank, copy }`. The id is stable for the whole game: shuffles,
//! moves and undo never change it.

use serde::{Deserialize, Serialize};

/// Card rank, Ace lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value, 0 for Ace through 12 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for an ordinal value, if in range.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// The rank that sits directly on this one in a descending run.
    ///
    /// `None` for Ace: nothing can be built on an Ace.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.value().checked_sub(1).and_then(Self::from_value)
    }

    /// The rank this one can be placed on. `None` for King.
    #[must_use]
    pub fn predecessor(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// True if `self` may sit directly on `below` (one rank lower).
    #[must_use]
    pub fn follows(self, below: Rank) -> bool {
        below.successor() == Some(self)
    }

    /// Face label ("A", "2", .. "10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
///
/// The classic game deals a single suit, but run validity still compares
/// suits so mixed decks behave correctly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    #[default]
    Spades,
}

impl Suit {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Stable card identifier: rank plus deck copy index (0..8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub rank: Rank,
    pub copy: u8,
}

impl CardId {
    #[must_use]
    pub const fn new(rank: Rank, copy: u8) -> Self {
        Self { rank, copy }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.rank, self.copy)
    }
}

/// A single card.
///
/// `face_up` is the only field that changes during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, copy: u8) -> Self {
        Self {
            id: CardId::new(rank, copy),
            rank,
            suit,
            face_up: false,
        }
    }

    /// Same card, turned face-up.
    #[must_use]
    pub const fn flipped_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// True if `self` may sit directly on `below` inside a movable run:
    /// same suit, exactly one rank lower.
    #[must_use]
    pub fn continues_run(&self, below: &Card) -> bool {
        self.suit == below.suit && self.rank.follows(below.rank)
    }

    /// Short label such as `"Q♠"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
