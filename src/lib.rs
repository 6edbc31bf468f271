//! Incremental Sorting Engine
//!
//! Classic sorting algorithms rewritten as resumable state machines. Each call
//! to [`SortEngine::advance`] performs one bounded unit of work (a bubble pass,
//! a quick sort partition, or a single merge) so a rendering loop can drive a
//! sort a few steps per frame while reading live metrics.

pub mod algorithm;
pub mod array;
pub mod bubble;
pub mod config;
pub mod engine;
pub mod error;
pub mod merge;
pub mod metrics;
pub mod quick;

pub use algorithm::{Algorithm, AlgorithmKind, StepSorter};
pub use array::ValueArray;
pub use config::EngineConfig;
pub use engine::SortEngine;
pub use error::{Result, SortError};
pub use metrics::{MetricsSnapshot, SortMetrics};

/// True if `data` is in non-decreasing order.
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn drive(engine: &mut SortEngine, name: &str) -> usize {
        assert!(engine.select_algorithm(name));
        engine.begin_sort();
        let mut calls = 1;
        while engine.advance() {
            calls += 1;
        }
        calls
    }

    #[test]
    fn test_all_algorithms_agree() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let input: Vec<i32> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();
        let mut expected = input.clone();
        expected.sort();

        for kind in AlgorithmKind::ALL {
            let mut engine = SortEngine::with_values(input.clone());
            drive(&mut engine, kind.name());
            assert_eq!(engine.array_snapshot(), expected.as_slice(), "{}", kind.name());
        }
    }

    #[test]
    fn test_sorted_input_is_cheap() {
        let sorted: Vec<i32> = (0..256).collect();

        let mut engine = SortEngine::with_values(sorted.clone());
        assert_eq!(drive(&mut engine, "Bubble Sort"), 1);
        assert_eq!(engine.metrics().swaps, 0);

        let mut engine = SortEngine::with_values(sorted);
        drive(&mut engine, "Merge Sort");
        assert_eq!(engine.metrics().swaps, 0);
    }

    #[test]
    fn test_merge_calls_fewer_than_quick_on_sorted() {
        // Sorted input is quick sort's worst case: one partition per element
        let sorted: Vec<i32> = (0..128).collect();
        let mut quick = SortEngine::with_values(sorted.clone());
        let quick_calls = drive(&mut quick, "Quick Sort");
        assert!(quick_calls >= 128);
        assert!(quick_calls <= 2 * 128 + 1);

        let mut merge = SortEngine::with_values(sorted);
        let merge_calls = drive(&mut merge, "Merge Sort");
        assert!(merge_calls <= 2 * 128);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
