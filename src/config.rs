use std::num::NonZeroUsize;

use crate::classify::HeaderRule;
use crate::error::{Result, SampleError};

/// Validated settings for one sampling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    capacity: NonZeroUsize,
    seed: Option<u64>,
    header_rule: HeaderRule,
}

impl SampleConfig {
    /// Create a config for a sample of `num` data lines
    ///
    /// Rejects `num <= 0` before any input is touched.
    pub fn new(num: i64) -> Result<Self> {
        if num <= 0 {
            return Err(SampleError::InvalidCapacity(num));
        }
        // A reservoir wider than the address space can never fill up anyway
        let capacity = NonZeroUsize::new(usize::try_from(num).unwrap_or(usize::MAX))
            .ok_or(SampleError::InvalidCapacity(num))?;

        Ok(SampleConfig {
            capacity,
            seed: None,
            header_rule: HeaderRule::none(),
        })
    }

    /// Make the run reproducible
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Treat lines starting with `prefix` as headers
    pub fn with_header_prefix<P: AsRef<[u8]>>(mut self, prefix: Option<P>) -> Self {
        self.header_rule = HeaderRule::new(prefix);
        self
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn header_rule(&self) -> &HeaderRule {
        &self.header_rule
    }
}
