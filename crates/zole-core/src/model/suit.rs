use core::fmt;
use serde::{Deserialize, Serialize};

/// Suits in deck-build order. Diamonds are trump in every deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Club = 0,
    Spade = 1,
    Heart = 2,
    Diamond = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Heart, Suit::Diamond];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Club),
            1 => Some(Suit::Spade),
            2 => Some(Suit::Heart),
            3 => Some(Suit::Diamond),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_trump(self) -> bool {
        matches!(self, Suit::Diamond)
    }

    pub const fn letter(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
