use core::fmt;
use serde::{Deserialize, Serialize};

/// Ranks in deck-build order, highest trump first. Queens and Jacks are
/// trump regardless of suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Queen = 0,
    Jack = 1,
    Ace = 2,
    Ten = 3,
    King = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
}

const POINTS: [u8; 8] = [3, 4, 11, 10, 4, 0, 0, 0];

impl Rank {
    pub const ORDERED: [Rank; 8] = [
        Rank::Queen,
        Rank::Jack,
        Rank::Ace,
        Rank::Ten,
        Rank::King,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Lowest rank dealt in a non-trump suit.
    pub const LAST_PLAIN: Rank = Rank::Nine;

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rank::Queen),
            1 => Some(Rank::Jack),
            2 => Some(Rank::Ace),
            3 => Some(Rank::Ten),
            4 => Some(Rank::King),
            5 => Some(Rank::Nine),
            6 => Some(Rank::Eight),
            7 => Some(Rank::Seven),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_trump(self) -> bool {
        matches!(self, Rank::Queen | Rank::Jack)
    }

    /// Points scored for taking a card of this rank in a trick.
    pub const fn points(self) -> u8 {
        POINTS[self as usize]
    }

    pub const fn letter(self) -> char {
        match self {
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::King => 'K',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
