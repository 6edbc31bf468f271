//! Engine configuration: array generation parameters and the pacing policy.

use crate::error::{Result, SortError};
use serde::{Deserialize, Serialize};

/// Settings for a [`SortEngine`](crate::SortEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of elements in the value array
    pub array_size: usize,
    /// Inclusive lower bound for generated values
    pub min_value: i32,
    /// Inclusive upper bound for generated values
    pub max_value: i32,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// One extra step per tick for every this many elements
    pub elements_per_step: usize,
    /// Upper limit on steps performed by a single tick
    pub max_steps_per_tick: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            array_size: 10_000,
            min_value: 0,
            max_value: 10_000,
            seed: None,
            elements_per_step: 1000,
            max_steps_per_tick: 50,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_size(mut self, array_size: usize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn with_bounds(mut self, min_value: i32, max_value: i32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_value > self.max_value {
            return Err(SortError::InvalidBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.elements_per_step == 0 {
            return Err(SortError::Config("elements_per_step must be at least 1".into()));
        }
        if self.max_steps_per_tick == 0 {
            return Err(SortError::Config("max_steps_per_tick must be at least 1".into()));
        }
        Ok(())
    }

    /// How many steps one external tick should perform for an array of `len` elements.
    pub fn steps_per_tick(&self, len: usize) -> usize {
        (len / self.elements_per_step.max(1)).clamp(1, self.max_steps_per_tick.max(1))
    }
}
