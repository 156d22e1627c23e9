//! Reservoir sampling over a stream of unknown length.
//!
//! Uses Algorithm R (Vitter, 1985): the first `N` items fill the reservoir,
//! and the `k`-th item after that replaces a uniformly chosen slot with
//! probability `N / k`. Every item ends up retained with probability
//! `min(1, N / k_total)` and every `N`-subset is equally likely.
//!
//! The counter `k` only advances for items actually offered to the sampler,
//! so callers that route header lines elsewhere never perturb the draw.

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// What happened to an item offered to the reservoir
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// Stored in a previously empty slot
    Filled(usize),
    /// Overwrote the occupant of an existing slot
    Replaced(usize),
    /// Not retained
    Discarded,
}

/// Fixed-capacity uniform sampler with an owned, optionally seeded RNG
#[derive(Debug, Clone)]
pub struct ReservoirSampler<T> {
    capacity: NonZeroUsize,
    seen: u64,
    reservoir: Vec<T>,
    rng: ChaCha8Rng,
}

impl<T> ReservoirSampler<T> {
    /// Sampler seeded from the thread-local entropy source (not reproducible)
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Sampler whose draw sequence is fully determined by `seed`
    pub fn with_seed(capacity: NonZeroUsize, seed: u64) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Sampler drawing from a caller-supplied RNG
    pub fn with_rng(capacity: NonZeroUsize, rng: ChaCha8Rng) -> Self {
        // Slots are allocated as lines arrive; N may far exceed the input
        ReservoirSampler {
            capacity,
            seen: 0,
            reservoir: Vec::new(),
            rng,
        }
    }

    /// Offer the next item from the stream
    pub fn offer(&mut self, item: T) -> SlotOutcome {
        self.seen += 1;

        let capacity = self.capacity.get();
        if self.reservoir.len() < capacity {
            self.reservoir.push(item);
            return SlotOutcome::Filled(self.reservoir.len() - 1);
        }

        // j in [0, k-1]
        let j = self.rng.random_range(0..self.seen);
        if j < capacity as u64 {
            let slot = j as usize;
            self.reservoir[slot] = item;
            SlotOutcome::Replaced(slot)
        } else {
            SlotOutcome::Discarded
        }
    }

    /// Maximum number of items retained
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of items offered so far
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Current sample in slot order
    pub fn samples(&self) -> &[T] {
        &self.reservoir
    }

    /// Consume the sampler, returning the sample in slot order
    pub fn into_samples(self) -> Vec<T> {
        self.reservoir
    }
}
