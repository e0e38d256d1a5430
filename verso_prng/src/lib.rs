// Deterministic, portable pseudo-random number generator for verse generation.
//
// Implements the Lehmer / Park-Miller "minimal standard" multiplicative
// congruential generator: modulus 2^31 - 1, multiplier 16807. The whole state
// is one integer, so a generator is cheap to create per request and trivial
// to snapshot.
//
// This crate is the single source of randomness for `verso_lang` and
// `verso_engine`. Every random decision in a poem (word picks, probability
// gates, filler insertion, rhyme choice) draws from the one `VerseRng` created
// for that request, so the same seed always yields the same poem.
//
// **Critical constraint: determinism.** The state update is pure integer
// arithmetic. The float returned by `next_f64` is an exact division of two
// integers below 2^31, which is identical on every IEEE 754 platform.

use serde::{Deserialize, Serialize};

/// Modulus of the generator (the Mersenne prime 2^31 - 1).
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the generator.
pub const MULTIPLIER: u64 = 16_807;

/// Park-Miller PRNG, the verse engine's sole source of randomness.
///
/// State always lies in `1..MODULUS`. Zero is a fixed point of the
/// recurrence, so seeds are normalized away from it in `new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRng {
    state: u64,
}

impl VerseRng {
    /// Create a new generator from a signed seed.
    ///
    /// The seed is reduced with a truncated remainder (the sign follows the
    /// seed); a result `<= 0` is shifted up by `MODULUS - 1`. The one seed
    /// class that still lands on zero (`-(MODULUS - 1)`) is mapped to 1.
    pub fn new(seed: i64) -> Self {
        let modulus = MODULUS as i64;
        let mut x = seed % modulus;
        if x <= 0 {
            x += modulus - 1;
        }
        if x == 0 {
            x = 1;
        }
        Self { state: x as u64 }
    }

    /// Current internal state (always in `1..MODULUS`).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the generator and return the new state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as u32
    }

    /// Generate a uniform `f64` in (0, 1).
    ///
    /// The state is never 0 and never reaches `MODULUS`, so the result is
    /// strictly inside the unit interval.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / MODULUS as f64
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Scales a single `next_f64` draw, so every call consumes exactly one
    /// step of the sequence. Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "range_usize: low must be less than high");
        let span = high - low;
        let offset = (self.next_f64() * span as f64) as usize;
        low + offset.min(span - 1)
    }

    /// Pick one element of a slice uniformly, or `None` if it is empty.
    ///
    /// An empty slice does not advance the generator.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, items.len());
        items.get(idx)
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// Always consumes one step. `p <= 0.0` always returns false, `p >= 1.0`
    /// always returns true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = VerseRng::new(42);
        let mut b = VerseRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = VerseRng::new(42);
        let mut b = VerseRng::new(43);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    /// Reference values of the minimal standard generator from seed 1.
    #[test]
    fn known_sequence_from_seed_one() {
        let mut rng = VerseRng::new(1);
        let vals: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        assert_eq!(
            vals,
            vec![16_807, 282_475_249, 1_622_650_073, 984_943_658, 1_144_108_930]
        );
    }

    /// Park & Miller's published check: the 10,000th state from seed 1.
    #[test]
    fn ten_thousandth_state_from_seed_one() {
        let mut rng = VerseRng::new(1);
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.next_u32();
        }
        assert_eq!(last, 1_043_618_065);
    }

    #[test]
    fn zero_seed_is_normalized() {
        let rng = VerseRng::new(0);
        assert_eq!(rng.state(), MODULUS - 1);
    }

    #[test]
    fn modulus_multiple_seed_is_normalized() {
        assert_eq!(VerseRng::new(MODULUS as i64).state(), MODULUS - 1);
        assert_eq!(VerseRng::new(3 * MODULUS as i64).state(), MODULUS - 1);
    }

    #[test]
    fn negative_seed_is_shifted_into_range() {
        let rng = VerseRng::new(-5);
        assert_eq!(rng.state(), MODULUS - 1 - 5);
    }

    #[test]
    fn residual_zero_seed_maps_to_one() {
        let rng = VerseRng::new(-(MODULUS as i64 - 1));
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn state_never_leaves_valid_range() {
        for seed in [i64::MIN, -1, 0, 1, 12345, MODULUS as i64, i64::MAX] {
            let mut rng = VerseRng::new(seed);
            for _ in 0..1000 {
                let s = rng.next_u32() as u64;
                assert!((1..MODULUS).contains(&s), "seed {seed} produced state {s}");
            }
        }
    }

    #[test]
    fn f64_in_open_unit_range() {
        let mut rng = VerseRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!(v > 0.0 && v < 1.0, "f64 out of range: {v}");
        }
    }

    #[test]
    fn range_usize_within_bounds() {
        let mut rng = VerseRng::new(555);
        for _ in 0..10_000 {
            let v = rng.range_usize(5, 15);
            assert!((5..15).contains(&v), "range_usize out of range: {v}");
        }
    }

    #[test]
    fn range_usize_reaches_both_ends() {
        let mut rng = VerseRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[rng.range_usize(0, 4)] = true;
        }
        assert!(seen.iter().all(|&s| s), "expected every index, saw {seen:?}");
    }

    #[test]
    fn pick_empty_returns_none_without_advancing() {
        let mut rng = VerseRng::new(9);
        let before = rng.state();
        let empty: [&str; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn pick_returns_member() {
        let mut rng = VerseRng::new(9);
        let items = ["amor", "honor", "dolor"];
        for _ in 0..100 {
            let w = rng.pick(&items).unwrap();
            assert!(items.contains(w));
        }
    }

    #[test]
    fn random_bool_distribution() {
        let mut rng = VerseRng::new(42);
        let n = 10_000;
        let true_count = (0..n).filter(|_| rng.random_bool(0.4)).count();
        let pct = true_count as f64 / n as f64;
        assert!(
            (0.35..0.45).contains(&pct),
            "random_bool(0.4) should be ~40%, got {:.1}%",
            pct * 100.0
        );
    }

    #[test]
    fn random_bool_extremes() {
        let mut rng = VerseRng::new(42);
        for _ in 0..100 {
            assert!(!rng.random_bool(0.0));
        }
        for _ in 0..100 {
            assert!(rng.random_bool(1.0));
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = VerseRng::new(42);
        for _ in 0..100 {
            rng.next_u32();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: VerseRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u32(), restored.next_u32());
        }
    }
}
