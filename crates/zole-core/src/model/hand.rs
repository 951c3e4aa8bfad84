use crate::model::card::CardId;
use serde::{Deserialize, Serialize};

/// Cards held by one player, kept in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<CardId>) -> Self {
        Self { cards }
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn trump_count(&self) -> usize {
        self.cards.iter().filter(|id| id.card().is_trump()).count()
    }

    pub fn points(&self) -> u32 {
        self.cards.iter().map(|id| id.card().value() as u32).sum()
    }

    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(|id| id.card().name()).collect()
    }
}

impl From<Vec<CardId>> for Hand {
    fn from(cards: Vec<CardId>) -> Self {
        Self::with_cards(cards)
    }
}
