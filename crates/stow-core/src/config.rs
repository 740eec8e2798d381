//! Builder configuration parameters.

use crate::error::ConfigError;

/// Configuration for a growable builder.
///
/// Controls the first allocation made by a builder that has no storage
/// yet. Later growth doubles from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Capacity of the first allocation made on append, in slots.
    ///
    /// Default: 16. Must be at least 1.
    pub initial_capacity: usize,
}

impl BuilderConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check the configuration for values the builder cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::InitialCapacityZero);
        }
        Ok(())
    }

    /// Capacity to grow to so that `needed` slots fit.
    ///
    /// Starts from `current` (or `initial_capacity` when `current` is 0)
    /// and doubles until `needed` fits. If doubling overflows `usize` the
    /// result falls back to exactly `needed`. Returns `current` unchanged
    /// when it already fits.
    pub fn grown_capacity(&self, current: usize, needed: usize) -> usize {
        if needed <= current {
            return current;
        }
        let mut capacity = if current == 0 {
            self.initial_capacity.max(1)
        } else {
            current
        };
        while capacity < needed {
            capacity = capacity.checked_mul(2).unwrap_or(needed);
        }
        capacity
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
