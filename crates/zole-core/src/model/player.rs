use crate::model::card::CardId;
use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

pub const SEAT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    First = 0,
    Second = 1,
    Third = 2,
}

impl Seat {
    pub const LOOP: [Seat; SEAT_COUNT] = [Seat::First, Seat::Second, Seat::Third];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            2 => Some(Seat::Third),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::Third,
            Seat::Third => Seat::First,
        }
    }

    /// Default player name for this seat.
    pub const fn label(self) -> &'static str {
        match self {
            Seat::First => "p1",
            Seat::Second => "p2",
            Seat::Third => "p3",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role taken after bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Undecided,
    BigOne,
    LittleOne,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: i32,
    role: Role,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            role: Role::Undecided,
            hand: Hand::new(),
        }
    }

    pub(crate) fn from_parts(name: String, score: i32, role: Role, hand: Hand) -> Self {
        Self {
            name,
            score,
            role,
            hand,
        }
    }

    /// Replaces the hand with `cards`, keeping name, score and role. The
    /// cards are taken as given; the dealer guarantees they do not overlap
    /// with anyone else's.
    pub fn dealt(self, cards: Vec<CardId>) -> Player {
        Player {
            hand: Hand::with_cards(cards),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}
