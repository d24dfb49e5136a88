// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The randomness the simulator consumes.
///
/// Injected at call time so tests can force exact sequences.
pub trait RandomSource {
    /// Returns a uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Returns a uniform integer in `[low, high]`.
    ///
    /// `low` must not exceed `high`.
    fn int_in(&mut self, low: i32, high: i32) -> i32;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// A reproducible stream for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A stream seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        (**self).int_in(low, high)
    }
}
