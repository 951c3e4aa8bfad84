use super::state::{GameState, StateError};
use crate::model::card::CardId;
use crate::model::hand::Hand;
use crate::model::player::{Player, Role, SEAT_COUNT, Seat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: i32,
    pub role: Role,
    pub hand: Vec<usize>,
}

impl PlayerSnapshot {
    fn restore(self) -> Result<Player, SnapshotError> {
        let hand = Hand::with_cards(card_ids(&self.hand)?);
        Ok(Player::from_parts(self.name, self.score, self.role, hand))
    }
}

/// Plain-data form of a [`GameState`] with cards stored as deck indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub trick: Vec<usize>,
    pub deck: Vec<usize>,
    pub round: u32,
    pub turn: Seat,
    pub leader: Seat,
    #[serde(default)]
    pub called_zole: bool,
    #[serde(default)]
    pub big_one: Option<Seat>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("expected 3 players, found {0}")]
    PlayerCount(usize),
    #[error("card index {0} is outside the deck")]
    CardIndex(usize),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        GameSnapshot {
            players: state
                .players()
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name().to_string(),
                    score: p.score(),
                    role: p.role(),
                    hand: indices(p.hand().cards()),
                })
                .collect(),
            trick: indices(state.trick()),
            deck: indices(state.deck()),
            round: state.round(),
            turn: state.turn(),
            leader: state.leader(),
            called_zole: state.called_zole(),
            big_one: state.big_one(),
        }
    }

    pub fn restore(self) -> Result<GameState, SnapshotError> {
        let found = self.players.len();
        let [first, second, third]: [PlayerSnapshot; SEAT_COUNT] = self
            .players
            .try_into()
            .map_err(|_| SnapshotError::PlayerCount(found))?;
        let players = [
            first.restore()?,
            second.restore()?,
            third.restore()?,
        ];

        let state = GameState::from_parts(
            players,
            card_ids(&self.trick)?,
            card_ids(&self.deck)?,
            self.round,
            self.turn,
            self.leader,
            self.called_zole,
            self.big_one,
        );
        state.check_conservation()?;
        Ok(state)
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn indices(cards: &[CardId]) -> Vec<usize> {
    cards.iter().map(|id| id.index()).collect()
}

fn card_ids(indices: &[usize]) -> Result<Vec<CardId>, SnapshotError> {
    indices
        .iter()
        .map(|&i| CardId::new(i).ok_or(SnapshotError::CardIndex(i)))
        .collect()
}
