use crate::model::card::{Card, CardId};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::shuffle;
use rand::Rng;

pub const DECK_SIZE: usize = 26;

/// Canonical deck order. A card's position here is its [`CardId`].
pub(crate) const CANONICAL: [Card; DECK_SIZE] = build_canonical();

const fn build_canonical() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Queen, Suit::Club); DECK_SIZE];
    let mut next = 0;
    let mut s = 0;
    while s < Suit::ALL.len() {
        let suit = Suit::ALL[s];
        let last = if suit.is_trump() {
            Rank::Seven
        } else {
            Rank::LAST_PLAIN
        };
        let mut r = 0;
        while r <= last.index() {
            cards[next] = Card::new(Rank::ORDERED[r], suit);
            next += 1;
            r += 1;
        }
        s += 1;
    }
    cards
}

/// Builds the 26 cards in canonical order: Clubs, Spades and Hearts from
/// Queen down to Nine, then all eight Diamonds.
pub fn build_deck() -> Vec<Card> {
    Deck::standard().cards
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self {
            cards: CANONICAL.to_vec(),
        }
    }

    /// Card ids 0..26 in a random order.
    pub fn shuffled_ids<R: Rng + ?Sized>(rng: &mut R) -> Vec<CardId> {
        let ids: Vec<CardId> = CardId::all().collect();
        shuffle::shuffle(&ids, rng)
    }

    pub fn card(&self, id: CardId) -> Card {
        self.cards[id.index()]
    }

    pub fn position(&self, card: Card) -> Option<CardId> {
        self.cards
            .iter()
            .position(|&c| c == card)
            .and_then(CardId::new)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, Deck, build_deck};
    use crate::model::card::{Card, CardId};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn deck_has_26_unique_cards() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn fourteen_cards_are_trump() {
        let deck = build_deck();
        assert_eq!(deck.iter().filter(|c| c.is_trump()).count(), 14);
        assert_eq!(deck.iter().filter(|c| c.suit.is_trump()).count(), 8);
        assert_eq!(deck.iter().filter(|c| c.rank.is_trump()).count(), 8);
    }

    #[test]
    fn plain_suits_stop_at_nine() {
        let deck = build_deck();
        for suit in [Suit::Club, Suit::Spade, Suit::Heart] {
            let ranks: Vec<_> = deck
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            assert_eq!(ranks, &Rank::ORDERED[..6]);
        }
        let diamonds = deck.iter().filter(|c| c.suit == Suit::Diamond).count();
        assert_eq!(diamonds, 8);
    }

    #[test]
    fn canonical_order_is_stable() {
        let deck = build_deck();
        assert_eq!(deck[0], Card::new(Rank::Queen, Suit::Club));
        assert_eq!(deck[20], Card::new(Rank::Ace, Suit::Diamond));
        assert_eq!(deck[25], Card::new(Rank::Seven, Suit::Diamond));

        let names: Vec<String> = deck.iter().map(|c| c.name()).collect();
        assert_eq!(
            names.join(" "),
            "QC JC AC TC KC 9C QS JS AS TS KS 9S QH JH AH TH KH 9H \
             QD JD AD TD KD 9D 8D 7D"
        );
    }

    #[test]
    fn deck_values_follow_rank_table() {
        let values: Vec<u8> = build_deck().iter().map(|c| c.value()).collect();
        assert_eq!(&values[..6], &[3, 4, 11, 10, 4, 0]);
        assert_eq!(&values[18..], &[3, 4, 11, 10, 4, 0, 0, 0]);
        assert_eq!(values.iter().map(|&v| v as u32).sum::<u32>(), 32 * 3 + 32);
    }

    #[test]
    fn position_finds_dealt_cards_only() {
        let deck = Deck::standard();
        let ace = Card::new(Rank::Ace, Suit::Diamond);
        assert_eq!(deck.position(ace), CardId::new(20));
        assert_eq!(deck.card(CardId::new(20).unwrap()), ace);
        assert_eq!(deck.position(Card::new(Rank::Eight, Suit::Club)), None);
    }

    #[test]
    fn shuffled_ids_are_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = Deck::shuffled_ids(&mut rng);
        assert_eq!(ids.len(), DECK_SIZE);
        ids.sort();
        let expected: Vec<CardId> = CardId::all().collect();
        assert_eq!(ids, expected);
    }
}
