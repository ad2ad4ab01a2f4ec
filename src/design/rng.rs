//! Deterministic pseudo-random generator.
//!
//! `StoryRng` is a 32-bit mixer with an additive state step followed by two
//! xor-shift/multiply rounds. Given the same seed and the same sequence of
//! calls it produces the same values on every platform, which is what makes
//! seed codes in file names reproducible.

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// Additive step applied to the state before each output.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// Divisor mapping a 32-bit output onto `[0, 1)`.
const OUTPUT_RANGE: f64 = 4_294_967_296.0;

/// Seeded generator producing uniform floats, integers and picks.
#[derive(Debug, Clone)]
pub struct StoryRng {
    state: u32,
}

impl StoryRng {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance one step and return the raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let a = self.state;

        let mut t = (a ^ (a >> 15)).wrapping_mul(a | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Advance one step and return a uniform float in `[0, 1)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        f64::from(self.next_u32()) / OUTPUT_RANGE
    }

    /// Uniform integer in the closed range `[min, max]`.
    ///
    /// Returns `min` without consuming a value when `max < min`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if max < min {
            return min;
        }
        let span = (i128::from(max) - i128::from(min) + 1) as f64;
        let step = (self.next() * span).floor() as i128;
        (i128::from(min) + step).min(i128::from(max)) as i64
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptyInput("candidate set"));
        }
        Ok(&items[self.index(items.len())])
    }

    /// Uniform index in `0..len` for a known non-empty table.
    pub(crate) fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let index = (self.next() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Produce a fresh, non-deterministic seed.
///
/// Reads 32 bits from the operating system's entropy source and falls back
/// to the thread-local generator when that source is unavailable.
pub fn random_seed() -> u32 {
    let mut buf = [0u8; 4];
    match OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(e) => {
            log::warn!("OS entropy unavailable ({}), using thread RNG", e);
            rand::thread_rng().next_u32()
        }
    }
}
