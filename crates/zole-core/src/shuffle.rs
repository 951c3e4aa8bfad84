//! Uniform random permutations over any cloneable sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns a uniformly shuffled copy of `items`; the input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Same as [`shuffle`] with a `StdRng` seeded from `seed`.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle(items, &mut rng)
}

/// Durstenfeld shuffle: walk from the back, swapping each slot with a
/// uniformly chosen slot at or before it.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    tracing::trace!(len = items.len(), "shuffling");
    for pos in (1..items.len()).rev() {
        let pick = rng.gen_range(0..=pos);
        items.swap(pos, pick);
    }
}

#[cfg(test)]
mod tests {
    use super::{shuffle, shuffle_in_place, shuffle_with_seed};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn keeps_input_and_multiset() {
        let cards: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let mut shuffled = shuffle(&cards, &mut rng);

        assert_eq!(cards, (0..10).collect::<Vec<_>>());
        assert_eq!(shuffled.len(), cards.len());
        shuffled.sort();
        assert_eq!(shuffled, cards);
    }

    #[test]
    fn rarely_leaves_every_position_fixed() {
        let cards: Vec<u32> = (0..10).collect();
        let mut rng = rand::thread_rng();
        let mut identities = 0;
        for _ in 0..200 {
            let shuffled = shuffle(&cards, &mut rng);
            let matches = shuffled
                .iter()
                .enumerate()
                .filter(|(i, v)| *i as u32 == **v)
                .count();
            if matches == cards.len() {
                identities += 1;
            }
        }
        // 1 in 10! per draw.
        assert!(identities <= 1);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let cards: Vec<u32> = (0..26).collect();
        let a = shuffle_with_seed(&cards, 42);
        let b = shuffle_with_seed(&cards, 42);
        let c = shuffle_with_seed(&cards, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, cards);
    }

    #[test]
    fn short_sequences_come_back_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn in_place_walks_every_position() {
        struct Recorder(Vec<u64>);
        impl rand::RngCore for Recorder {
            fn next_u32(&mut self) -> u32 {
                self.next_u64() as u32
            }
            fn next_u64(&mut self) -> u64 {
                self.0.push(0);
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(0);
                Ok(())
            }
        }

        let mut items = [0, 1, 2, 3, 4];
        let mut rng = Recorder(Vec::new());
        shuffle_in_place(&mut items, &mut rng);
        // Always drawing zero rotates the head to the back.
        assert_eq!(items, [1, 2, 3, 4, 0]);
        assert!(!rng.0.is_empty());
    }
}
