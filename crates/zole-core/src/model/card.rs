use crate::model::deck::{CANONICAL, DECK_SIZE};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const fn is_trump_suit(suit: Suit) -> bool {
    suit.is_trump()
}

pub const fn is_trump_rank(rank: Rank) -> bool {
    rank.is_trump()
}

pub const fn is_trump_card(suit: Suit, rank: Rank) -> bool {
    is_trump_suit(suit) || is_trump_rank(rank)
}

pub const fn build_card(suit: Suit, rank: Rank) -> Card {
    Card::new(rank, suit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Two-character code, rank letter then suit letter (`"QC"`, `"7D"`).
    pub fn name(self) -> String {
        self.to_string()
    }

    pub const fn value(self) -> u8 {
        self.rank.points()
    }

    pub const fn is_trump(self) -> bool {
        is_trump_card(self.suit, self.rank)
    }

    pub fn entry(self) -> CardEntry {
        CardEntry {
            name: self.name(),
            suit: self.suit,
            rank: self.rank,
            value: self.value(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Display record for a catalog card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub suit: Suit,
    pub rank: Rank,
    pub value: u8,
}

/// Position of a card in the canonical 26-card deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("card index {0} is outside the 26-card deck")]
pub struct InvalidCardId(pub u8);

impl TryFrom<u8> for CardId {
    type Error = InvalidCardId;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        CardId::new(index as usize).ok_or(InvalidCardId(index))
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> u8 {
        id.0
    }
}

impl CardId {
    pub const fn new(index: usize) -> Option<Self> {
        if index < DECK_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn card(self) -> Card {
        CANONICAL[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.card(), f)
    }
}
