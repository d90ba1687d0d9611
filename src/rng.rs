//! Small xorshift generator for gameplay randomness.
//!
//! Seeded once from the platform entropy source via `getrandom` (browser crypto
//! under wasm, OS entropy natively). Not cryptographic, which is fine for
//! drawing arithmetic operands and shuffling answer buttons.

pub struct Rng {
    state: u64,
}

impl Rng {
    /// Generator seeded from platform entropy. Falls back to a fixed seed if
    /// the entropy source is unavailable; gameplay still works, just
    /// predictably.
    pub fn new() -> Self {
        let mut buf = [0u8; 8];
        let seed = match getrandom::getrandom(&mut buf) {
            Ok(()) => u64::from_le_bytes(buf),
            Err(_) => 0x9e37_79b9_7f4a_7c15,
        };
        Self::from_seed(seed)
    }

    /// Deterministic construction for tests.
    pub fn from_seed(seed: u64) -> Self {
        // xorshift must not start from the all-zero state
        Self { state: seed | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64* step
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % u64::from(bound)) as u32
    }

    /// Uniform integer in the inclusive range `lo..=hi`.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1) as u32;
        lo + self.below(span) as i32
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_stays_in_bound() {
        let mut rng = Rng::from_seed(7);
        for _ in 0..1_000 {
            assert!(rng.below(11) < 11);
        }
    }

    #[test]
    fn range_hits_both_endpoints() {
        let mut rng = Rng::from_seed(42);
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..10_000 {
            let v = rng.range_i32(-2, 2);
            assert!((-2..=2).contains(&v));
            saw_lo |= v == -2;
            saw_hi |= v == 2;
        }
        assert!(saw_lo && saw_hi);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = Rng::from_seed(3);
        let mut items = [1u8, 2, 3, 4];
        rng.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }
}
