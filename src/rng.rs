//! Small deterministic RNG for per-frame effect noise.
//!
//! SplitMix64 stepping. Each effect owns its own generator so scene
//! switches never share or leak random state. Not cryptographic.

/// Per-effect pseudo-random generator.
#[derive(Debug, Clone)]
pub struct TickRng {
    state: u64,
}

impl TickRng {
    /// Create a generator from a seed.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value (SplitMix64).
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Random value in the half-open range `[low, high)`.
    ///
    /// Returns `low` when the range is empty.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low) as u64;
        low + (self.next_u64() % span) as i32
    }

    /// Random index in `[0, len)`. Returns 0 for an empty range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    /// Roll a percentage chance (0-100).
    #[allow(clippy::cast_possible_truncation)]
    pub fn chance(&mut self, percent: u8) -> bool {
        ((self.next_u64() % 100) as u8) < percent
    }
}
