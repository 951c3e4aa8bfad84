use crate::model::card::CardId;
use crate::model::deck::{DECK_SIZE, Deck};
use crate::model::player::{Player, SEAT_COUNT, Seat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::array;
use thiserror::Error;
use tracing::debug;

pub const HAND_SIZE: usize = 8;
pub const SKAT_SIZE: usize = DECK_SIZE - HAND_SIZE * SEAT_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck holds {found} cards, a deal needs 26")]
    ShortDeck { found: usize },
    #[error("leader index {0} does not name a seat")]
    InvalidLeader(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
    #[error("card {0} is missing")]
    MissingCard(CardId),
}

/// One hand of play: three players, the undealt stock and the trick in
/// progress. Every transition consumes the state and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    players: [Player; SEAT_COUNT],
    trick: Vec<CardId>,
    deck: Vec<CardId>,
    round: u32,
    turn: Seat,
    leader: Seat,
    called_zole: bool,
    big_one: Option<Seat>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game with the stock in canonical order.
    pub fn new() -> Self {
        Self::with_deck(CardId::all().collect())
    }

    pub fn new_shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_deck(Deck::shuffled_ids(rng))
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_shuffled(&mut rng)
    }

    fn with_deck(deck: Vec<CardId>) -> Self {
        Self {
            players: array::from_fn(|i| Player::new(Seat::LOOP[i].label())),
            trick: Vec::new(),
            deck,
            round: 0,
            turn: Seat::First,
            leader: Seat::First,
            called_zole: false,
            big_one: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        players: [Player; SEAT_COUNT],
        trick: Vec<CardId>,
        deck: Vec<CardId>,
        round: u32,
        turn: Seat,
        leader: Seat,
        called_zole: bool,
        big_one: Option<Seat>,
    ) -> Self {
        Self {
            players,
            trick,
            deck,
            round,
            turn,
            leader,
            called_zole,
            big_one,
        }
    }

    /// Deals eight cards to each seat from the front of the stock and leaves
    /// the last two as the skat. `leader` becomes both leader and turn;
    /// everything else carries over.
    pub fn deal(self, leader: Seat) -> Result<GameState, DealError> {
        if self.deck.len() < DECK_SIZE {
            return Err(DealError::ShortDeck {
                found: self.deck.len(),
            });
        }

        let GameState {
            players,
            trick,
            mut deck,
            round,
            called_zole,
            big_one,
            ..
        } = self;

        let skat = deck.split_off(HAND_SIZE * SEAT_COUNT);
        let mut chunks = deck.chunks_exact(HAND_SIZE);
        let players = players.map(|player| {
            let cards = chunks.next().map(<[CardId]>::to_vec).unwrap_or_default();
            player.dealt(cards)
        });

        debug!(%leader, skat = ?skat, round, "dealt hand");

        let dealt = GameState {
            players,
            trick,
            deck: skat,
            round,
            turn: leader,
            leader,
            called_zole,
            big_one,
        };
        debug_assert!(dealt.check_conservation().is_ok());
        Ok(dealt)
    }

    /// [`GameState::deal`] with a raw seat index.
    pub fn deal_index(self, leader: usize) -> Result<GameState, DealError> {
        let seat = Seat::from_index(leader).ok_or(DealError::InvalidLeader(leader))?;
        self.deal(seat)
    }

    /// Confirms that stock, hands and trick together hold each card once.
    pub fn check_conservation(&self) -> Result<(), StateError> {
        let mut seen = [false; DECK_SIZE];
        let held = self
            .players
            .iter()
            .flat_map(|p| p.hand().iter())
            .chain(self.deck.iter())
            .chain(self.trick.iter());
        for &id in held {
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(StateError::DuplicateCard(id));
            }
        }
        match CardId::all().find(|id| !seen[id.index()]) {
            Some(missing) => Err(StateError::MissingCard(missing)),
            None => Ok(()),
        }
    }

    pub fn players(&self) -> &[Player; SEAT_COUNT] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn trick(&self) -> &[CardId] {
        &self.trick
    }

    /// Undealt cards; after a deal this is the skat.
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn called_zole(&self) -> bool {
        self.called_zole
    }

    pub fn big_one(&self) -> Option<Seat> {
        self.big_one
    }

    pub fn is_dealt(&self) -> bool {
        self.deck.len() == SKAT_SIZE && self.players.iter().all(|p| p.hand().len() == HAND_SIZE)
    }
}
