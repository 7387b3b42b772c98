//! Seeded randomness for reproducible stream generation

use crate::events::MsgType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The stream RNG.
///
/// ChaCha8 keeps the draw sequence identical across platforms and library
/// upgrades, which the byte-identical replay contract depends on.
pub type FeedRng = ChaCha8Rng;

/// Create the run RNG from a seed
#[must_use]
pub fn seeded(seed: u64) -> FeedRng {
    FeedRng::seed_from_u64(seed)
}

/// Message-kind weights out of [`WEIGHT_TOTAL`]
pub const MSG_TYPE_WEIGHTS: [(MsgType, u32); 3] = [
    (MsgType::NewLimit, 70),
    (MsgType::NewMarket, 20),
    (MsgType::Cancel, 10),
];

/// Total mass of [`MSG_TYPE_WEIGHTS`]
pub const WEIGHT_TOTAL: u32 = 100;

/// Draw a message kind from the fixed weight table.
///
/// One uniform roll in `[0, WEIGHT_TOTAL)` walked against the cumulative
/// weights; constant work per draw regardless of the weight mass.
pub fn draw_msg_type<R: Rng>(rng: &mut R) -> MsgType {
    let roll = rng.gen_range(0..WEIGHT_TOTAL);
    let mut cumulative = 0;
    for (msg_type, weight) in MSG_TYPE_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return msg_type;
        }
    }
    // The table spans the full roll range, so the loop always returns.
    MSG_TYPE_WEIGHTS[MSG_TYPE_WEIGHTS.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_cover_the_roll_range() {
        let mass: u32 = MSG_TYPE_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(mass, WEIGHT_TOTAL);
    }

    #[test]
    fn same_seed_same_draw_sequence() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..100 {
            assert_eq!(draw_msg_type(&mut a), draw_msg_type(&mut b));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = seeded(1);
        let mut b = seeded(2);
        let draws_a: Vec<MsgType> = (0..64).map(|_| draw_msg_type(&mut a)).collect();
        let draws_b: Vec<MsgType> = (0..64).map(|_| draw_msg_type(&mut b)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn distribution_tracks_the_weight_table() {
        let mut rng = seeded(7);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            match draw_msg_type(&mut rng) {
                MsgType::NewLimit => counts[0] += 1,
                MsgType::NewMarket => counts[1] += 1,
                MsgType::Cancel => counts[2] += 1,
            }
        }
        // Loose bands; the draw is deterministic for this seed.
        assert!((6_500..=7_500).contains(&counts[0]), "NewLimit count {}", counts[0]);
        assert!((1_500..=2_500).contains(&counts[1]), "NewMarket count {}", counts[1]);
        assert!((500..=1_500).contains(&counts[2]), "Cancel count {}", counts[2]);
    }
}
