//! Seedable pseudo-random source shared by every assignment run.
//!
//! The generator is a small linear congruential generator so that a seed
//! typed by the host reproduces the same table on any machine:
//!
//! - seed: 32-bit string hash (`h = h * 31 + unit` over UTF-16 code units,
//!   wrapping), absolute value
//! - step: `state = (state * 9301 + 49297) % 233280`
//! - sample: `state / 233280`

use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

/// 32-bit string hash of `seed`, made non-negative.
pub fn hash_seed(seed: &str) -> u64 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    i64::from(hash).unsigned_abs()
}

impl SeededRandom {
    pub fn with_state(state: u64) -> Self {
        Self { state }
    }

    /// Seed from text; a missing or blank seed falls back to the clock.
    pub fn from_seed(seed: Option<&str>) -> Self {
        match seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(seed) => Self::with_state(hash_seed(seed)),
            None => Self::from_clock(),
        }
    }

    pub fn from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        tracing::debug!(millis, "seeding from clock");
        Self::with_state(millis)
    }

    /// Next sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state % MODULUS * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }

    /// In-place Fisher-Yates, walking from the last element down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}
