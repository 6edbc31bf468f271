//! The value array being sorted, plus the parameters used to (re)generate it.

use crate::error::{Result, SortError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Owned sequence of integers with generation bounds.
///
/// Every element lies in `[min_value, max_value]`. Size and bounds only change
/// through explicit regeneration; algorithms only permute elements in place.
#[derive(Clone, Debug)]
pub struct ValueArray {
    values: Vec<i32>,
    size: usize,
    min_value: i32,
    max_value: i32,
    rng: Xoshiro256PlusPlus,
}

impl ValueArray {
    /// Create and fill an array of `size` random values in `[min_value, max_value]`.
    pub fn new(size: usize, min_value: i32, max_value: i32, seed: Option<u64>) -> Result<Self> {
        if min_value > max_value {
            return Err(SortError::InvalidBounds {
                min: min_value,
                max: max_value,
            });
        }
        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        let mut array = Self {
            values: Vec::new(),
            size,
            min_value,
            max_value,
            rng,
        };
        array.regenerate();
        Ok(array)
    }

    /// Wrap explicit values. Bounds are taken from the data itself.
    pub fn from_values(values: Vec<i32>) -> Self {
        let min_value = values.iter().copied().min().unwrap_or(0);
        let max_value = values.iter().copied().max().unwrap_or(0);
        Self {
            size: values.len(),
            values,
            min_value,
            max_value,
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Replace the contents with fresh random values of the current size and bounds.
    pub fn regenerate(&mut self) {
        let (lo, hi) = (self.min_value, self.max_value);
        let rng = &mut self.rng;
        self.values.clear();
        self.values.reserve(self.size);
        self.values.extend((0..self.size).map(|_| rng.gen_range(lo..=hi)));
    }

    /// Change the element count and regenerate.
    ///
    /// The upper bound is raised to at least `size` so the value range keeps
    /// pace with the element count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
        let as_value = i32::try_from(size).unwrap_or(i32::MAX);
        if self.max_value < as_value {
            self.max_value = as_value;
        }
        self.regenerate();
    }

    /// Change the value bounds and regenerate.
    pub fn set_bounds(&mut self, min_value: i32, max_value: i32) -> Result<()> {
        if min_value > max_value {
            return Err(SortError::InvalidBounds {
                min: min_value,
                max: max_value,
            });
        }
        self.min_value = min_value;
        self.max_value = max_value;
        self.regenerate();
        Ok(())
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Render as `[a, b, c]`.
    pub fn to_display_string(&self) -> String {
        let items: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        format!("[{}]", items.join(", "))
    }
}
