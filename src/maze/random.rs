//! Random sources driving root choice, walk starts and direction draws

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed indices
///
/// Every random decision the generator makes is a single call to
/// `next_index`, which keeps generation reproducible from a seed and lets
/// tests replay an exact sequence of decisions.
pub trait RandomSource {
    /// Uniformly random value in `0..bound`
    ///
    /// Implementations return 0 when `bound` is 0 or 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Seeded random source for reproducible generation
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
    seed: u64,
}

impl SeededSource {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source from a fresh seed drawn from the thread RNG
    ///
    /// The seed is kept so the run can be reproduced later.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed this source was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of draws, then falls back to a seeded source
///
/// Each scripted value is reduced modulo the requested bound. Once the
/// script is exhausted, draws come from the fallback so walks still
/// terminate.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
    fallback: SeededSource,
    consumed: usize,
}

impl ScriptedSource {
    /// Create a scripted source with a fallback seeded from 0
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self::with_fallback(script, SeededSource::new(0))
    }

    /// Create a scripted source with an explicit fallback
    pub fn with_fallback(script: impl IntoIterator<Item = usize>, fallback: SeededSource) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            consumed: 0,
        }
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of scripted draws consumed so far
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        match self.script.pop_front() {
            Some(value) => {
                self.consumed += 1;
                if bound == 0 { 0 } else { value % bound }
            }
            None => self.fallback.next_index(bound),
        }
    }
}
