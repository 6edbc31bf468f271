//! The sort orchestrator: owns the value array and the algorithm registry.

use crate::algorithm::{Algorithm, AlgorithmKind, StepSorter};
use crate::array::ValueArray;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::metrics::MetricsSnapshot;

/// One named algorithm instance in the registry.
#[derive(Clone, Debug)]
struct RegistryEntry {
    name: &'static str,
    algorithm: Algorithm,
}

/// Drives one selected algorithm over an owned [`ValueArray`].
///
/// Only the current algorithm is ever stepped, and the array is lent to it
/// for the duration of each call. Any operation that changes the array or
/// the selection halts the current run first.
#[derive(Clone, Debug)]
pub struct SortEngine {
    array: ValueArray,
    registry: Vec<RegistryEntry>,
    current: usize,
    config: EngineConfig,
}

impl Default for SortEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        let array = ValueArray::new(
            config.array_size,
            config.min_value,
            config.max_value,
            config.seed,
        )
        .unwrap_or_else(|_| ValueArray::from_values(Vec::new()));
        Self::from_parts(array, config)
    }
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let size_bound = i32::try_from(config.array_size).unwrap_or(i32::MAX);
        let max_value = config.max_value.max(size_bound);
        let array = ValueArray::new(config.array_size, config.min_value, max_value, config.seed)?;
        Ok(Self::from_parts(array, config))
    }

    /// Build an engine around explicit values, e.g. for a fixed scenario.
    pub fn with_values(values: Vec<i32>) -> Self {
        let array = ValueArray::from_values(values);
        let config = EngineConfig::default()
            .with_size(array.len())
            .with_bounds(array.min_value(), array.max_value());
        Self::from_parts(array, config)
    }

    fn from_parts(array: ValueArray, config: EngineConfig) -> Self {
        let mut engine = Self {
            array,
            registry: Vec::new(),
            current: 0,
            config,
        };
        engine.register_algorithms();
        engine
    }

    /// Rebuild the registry in fixed order with fresh instances.
    ///
    /// Any in-flight run is discarded and the first algorithm becomes current.
    pub fn register_algorithms(&mut self) {
        self.registry = AlgorithmKind::ALL
            .into_iter()
            .map(|kind| RegistryEntry {
                name: kind.name(),
                algorithm: Algorithm::new(kind),
            })
            .collect();
        self.current = 0;
    }

    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.registry.iter().map(|entry| entry.name).collect()
    }

    pub fn current_algorithm_name(&self) -> &'static str {
        self.registry[self.current].name
    }

    pub fn current_algorithm_kind(&self) -> AlgorithmKind {
        self.registry[self.current].algorithm.kind()
    }

    /// Make the named algorithm current. Returns `false` and changes nothing
    /// if the name is not registered.
    pub fn select_algorithm(&mut self, name: &str) -> bool {
        match self.registry.iter().position(|entry| entry.name == name) {
            Some(index) => {
                self.switch_to(index);
                true
            }
            None => {
                log::debug!("Ignoring selection of unknown algorithm {:?}", name);
                false
            }
        }
    }

    /// Make the algorithm at `index` current. Returns `false` and changes
    /// nothing if the index is out of range.
    pub fn select_algorithm_index(&mut self, index: usize) -> bool {
        let position = AlgorithmKind::from_index(index).ok().and_then(|kind| {
            self.registry
                .iter()
                .position(|entry| entry.algorithm.kind() == kind)
        });
        match position {
            Some(position) => {
                self.switch_to(position);
                true
            }
            None => {
                log::debug!(
                    "Ignoring selection of algorithm index {} (registry holds {})",
                    index,
                    self.registry.len()
                );
                false
            }
        }
    }

    fn switch_to(&mut self, index: usize) {
        if index == self.current {
            return;
        }
        self.halt_running("selection change");
        self.current = index;
        log::debug!("Selected {}", self.current_algorithm_name());
    }

    /// Start a new run of the current algorithm over the owned array.
    pub fn begin_sort(&mut self) {
        let entry = &mut self.registry[self.current];
        entry.algorithm.initialize(self.array.values());
        log::debug!("Started {} over {} elements", entry.name, self.array.len());
    }

    /// Perform one step of the current algorithm. Returns whether to keep going.
    pub fn advance(&mut self) -> bool {
        let algorithm = &mut self.registry[self.current].algorithm;
        if !algorithm.is_running() {
            return false;
        }
        algorithm.step(self.array.values_mut())
    }

    /// Advance up to [`steps_per_tick`](Self::steps_per_tick) times while
    /// sorting. Returns how many steps were performed.
    pub fn tick(&mut self) -> usize {
        let budget = self.steps_per_tick();
        let mut performed = 0;
        while performed < budget && self.is_sorting() {
            performed += 1;
            if !self.advance() {
                break;
            }
        }
        performed
    }

    pub fn steps_per_tick(&self) -> usize {
        self.config.steps_per_tick(self.array.len())
    }

    pub fn halt_sort(&mut self) {
        self.registry[self.current].algorithm.stop();
    }

    /// Halt, zero the current algorithm's metrics and refill the array with
    /// fresh random values.
    pub fn reset_sort(&mut self) {
        self.halt_running("reset");
        self.registry[self.current].algorithm.reset();
        self.array.regenerate();
    }

    /// Regenerate the array with `size` elements. The value upper bound is
    /// raised to at least `size`.
    pub fn set_array_size(&mut self, size: usize) {
        self.halt_running("resize");
        self.array.set_size(size);
        self.config.array_size = size;
    }

    /// Change the value bounds and regenerate the array.
    pub fn set_value_bounds(&mut self, min_value: i32, max_value: i32) -> Result<()> {
        self.halt_running("bounds change");
        self.array.set_bounds(min_value, max_value)?;
        self.config.min_value = min_value;
        self.config.max_value = max_value;
        Ok(())
    }

    /// Replace the array contents outright.
    pub fn set_values(&mut self, values: Vec<i32>) {
        self.halt_running("new values");
        self.array = ValueArray::from_values(values);
        self.config.array_size = self.array.len();
        self.config.min_value = self.array.min_value();
        self.config.max_value = self.array.max_value();
    }

    fn halt_running(&mut self, reason: &str) {
        let entry = &mut self.registry[self.current];
        if entry.algorithm.is_running() {
            log::debug!("Halting {} before {}", entry.name, reason);
            entry.algorithm.stop();
        }
    }

    pub fn is_sorting(&self) -> bool {
        self.registry[self.current].algorithm.is_running()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.registry[self.current].algorithm.metrics().snapshot()
    }

    pub fn array_snapshot(&self) -> &[i32] {
        self.array.values()
    }

    pub fn array_length(&self) -> usize {
        self.array.len()
    }

    pub fn value_bound(&self) -> i32 {
        self.array.max_value()
    }

    pub fn array(&self) -> &ValueArray {
        &self.array
    }

    pub fn array_as_string(&self) -> String {
        self.array.to_display_string()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;

    fn seeded(size: usize) -> SortEngine {
        SortEngine::with_config(EngineConfig::default().with_size(size).with_seed(7)).unwrap()
    }

    fn run_to_end(engine: &mut SortEngine) -> usize {
        engine.begin_sort();
        let mut calls = 0;
        loop {
            calls += 1;
            if !engine.advance() {
                break;
            }
        }
        calls
    }

    #[test]
    fn test_registry_order_and_default_selection() {
        let engine = seeded(10);
        assert_eq!(
            engine.algorithm_names(),
            vec!["Bubble Sort", "Quick Sort", "Merge Sort"]
        );
        assert_eq!(engine.current_algorithm_name(), "Bubble Sort");
        assert!(!engine.is_sorting());
    }

    #[test]
    fn test_every_algorithm_sorts() {
        let mut engine = seeded(300);
        for name in engine.algorithm_names() {
            engine.reset_sort();
            assert!(engine.select_algorithm(name));
            run_to_end(&mut engine);
            assert!(is_sorted(engine.array_snapshot()), "{} left array unsorted", name);
            assert!(!engine.is_sorting());
            assert_eq!(engine.array_length(), 300);
        }
    }

    #[test]
    fn test_select_by_index_matches_name() {
        let mut engine = seeded(10);
        let names = engine.algorithm_names();
        for (i, name) in names.iter().enumerate() {
            assert!(engine.select_algorithm_index(i));
            let by_index = engine.current_algorithm_kind();
            assert!(engine.select_algorithm(name));
            assert_eq!(engine.current_algorithm_kind(), by_index);
            assert_eq!(engine.current_algorithm_name(), *name);
        }
    }

    #[test]
    fn test_unknown_selection_leaves_state() {
        let mut engine = seeded(10);
        assert!(engine.select_algorithm("Merge Sort"));
        assert!(!engine.select_algorithm("Bogo Sort"));
        assert!(!engine.select_algorithm_index(3));
        assert_eq!(engine.current_algorithm_name(), "Merge Sort");
    }

    #[test]
    fn test_selection_halts_running_algorithm() {
        let mut engine = seeded(50);
        engine.begin_sort();
        assert!(engine.advance());
        assert!(engine.is_sorting());

        assert!(engine.select_algorithm("Quick Sort"));
        assert!(!engine.is_sorting());
        assert!(!engine.advance());

        // The halted bubble run does not resume on reselection
        assert!(engine.select_algorithm("Bubble Sort"));
        assert!(!engine.is_sorting());
        assert!(engine.metrics().comparisons > 0);
    }

    #[test]
    fn test_bubble_scenario() {
        let mut engine = SortEngine::with_values(vec![5, 3, 4, 1, 2]);
        engine.begin_sort();
        assert!(engine.advance());
        assert_eq!(engine.array_snapshot(), &[3, 4, 1, 2, 5]);
        assert_eq!(engine.metrics().comparisons, 4);
        assert_eq!(engine.metrics().swaps, 4);

        while engine.advance() {}
        assert_eq!(engine.array_snapshot(), &[1, 2, 3, 4, 5]);
        assert!(!engine.is_sorting());
    }

    #[test]
    fn test_single_element_any_algorithm() {
        let mut engine = SortEngine::with_values(vec![1]);
        for i in 0..engine.algorithm_names().len() {
            assert!(engine.select_algorithm_index(i));
            assert!(run_to_end(&mut engine) <= 1);
            assert_eq!(engine.array_snapshot(), &[1]);
            assert_eq!(engine.metrics().comparisons, 0);
            assert!(!engine.is_sorting());
        }
    }

    #[test]
    fn test_empty_array_any_algorithm() {
        let mut engine = seeded(0);
        for i in 0..3 {
            assert!(engine.select_algorithm_index(i));
            assert_eq!(run_to_end(&mut engine), 1);
            assert_eq!(engine.metrics().comparisons, 0);
            assert_eq!(engine.metrics().swaps, 0);
        }
    }

    #[test]
    fn test_bubble_termination_bound() {
        let n = 64;
        let mut engine = SortEngine::with_values((0..n).rev().collect());
        assert!(run_to_end(&mut engine) <= n as usize - 1);
        assert!(is_sorted(engine.array_snapshot()));
    }

    #[test]
    fn test_metrics_monotonic_and_reset() {
        let mut engine = seeded(200);
        assert!(engine.select_algorithm("Merge Sort"));
        engine.begin_sort();
        let mut last = engine.metrics();
        while engine.advance() {
            let now = engine.metrics();
            assert!(now.comparisons >= last.comparisons);
            assert!(now.swaps >= last.swaps);
            last = now;
        }
        assert!(engine.metrics().comparisons > 0);

        engine.reset_sort();
        assert_eq!(engine.metrics().comparisons, 0);
        assert_eq!(engine.metrics().swaps, 0);

        engine.begin_sort();
        assert_eq!(engine.metrics().comparisons, 0);
        assert!(engine.metrics().running);
    }

    #[test]
    fn test_reset_regenerates_array() {
        let mut engine = seeded(100);
        let before = engine.array_snapshot().to_vec();
        engine.begin_sort();
        engine.advance();
        engine.reset_sort();
        assert!(!engine.is_sorting());
        assert_eq!(engine.array_length(), 100);
        assert_ne!(engine.array_snapshot(), before.as_slice());
    }

    #[test]
    fn test_set_array_size() {
        let mut engine = SortEngine::with_config(
            EngineConfig::default().with_size(10).with_bounds(0, 10).with_seed(3),
        )
        .unwrap();
        engine.begin_sort();
        engine.set_array_size(100);
        assert!(!engine.is_sorting());
        assert_eq!(engine.array_length(), 100);
        assert_eq!(engine.value_bound(), 100);
        assert!(engine.array_snapshot().iter().all(|&v| (0..=100).contains(&v)));
    }

    #[test]
    fn test_config_raises_bound_to_size() {
        let engine = SortEngine::with_config(
            EngineConfig::default().with_size(500).with_bounds(0, 10).with_seed(1),
        )
        .unwrap();
        assert_eq!(engine.value_bound(), 500);
    }

    #[test]
    fn test_value_bounds() {
        let mut engine = seeded(50);
        engine.set_value_bounds(-10, 10).unwrap();
        assert!(engine.array_snapshot().iter().all(|&v| (-10..=10).contains(&v)));
        assert!(engine.set_value_bounds(1, 0).is_err());
    }

    #[test]
    fn test_tick_respects_budget() {
        let mut engine = seeded(5000);
        assert_eq!(engine.steps_per_tick(), 5);
        assert_eq!(engine.tick(), 0);

        engine.begin_sort();
        assert_eq!(engine.tick(), 5);
        let mut ticks = 1;
        while engine.is_sorting() {
            engine.tick();
            ticks += 1;
        }
        // At most n - 1 passes at five per tick
        assert!(ticks <= 1000);
        assert!(is_sorted(engine.array_snapshot()));
    }

    #[test]
    fn test_halt_then_advance_is_noop() {
        let mut engine = SortEngine::with_values(vec![3, 2, 1]);
        engine.begin_sort();
        engine.halt_sort();
        assert!(!engine.advance());
        assert_eq!(engine.array_snapshot(), &[3, 2, 1]);
    }

    #[test]
    fn test_register_discards_runs() {
        let mut engine = seeded(40);
        assert!(engine.select_algorithm("Quick Sort"));
        engine.begin_sort();
        engine.advance();
        engine.register_algorithms();
        assert_eq!(engine.current_algorithm_name(), "Bubble Sort");
        assert!(engine.select_algorithm("Quick Sort"));
        assert!(!engine.is_sorting());
        assert_eq!(engine.metrics().comparisons, 0);
    }

    #[test]
    fn test_independent_engines() {
        let mut a = SortEngine::with_values(vec![2, 1]);
        let b = SortEngine::with_values(vec![4, 3]);
        a.begin_sort();
        while a.advance() {}
        assert_eq!(a.array_snapshot(), &[1, 2]);
        assert_eq!(b.array_snapshot(), &[4, 3]);
        assert!(!b.is_sorting());
    }

    #[test]
    fn test_set_values_halts_and_replaces() {
        let mut engine = seeded(20);
        assert!(engine.select_algorithm("Quick Sort"));
        engine.begin_sort();
        engine.set_values(vec![9, 7, 8]);
        assert!(!engine.is_sorting());
        assert_eq!(engine.array_length(), 3);

        engine.begin_sort();
        while engine.advance() {}
        assert_eq!(engine.array_snapshot(), &[7, 8, 9]);
    }

    #[test]
    fn test_explicit_values_update_config_bounds() {
        let engine = SortEngine::with_values(vec![4, -2, 11]);
        assert_eq!(engine.config().min_value, -2);
        assert_eq!(engine.config().max_value, 11);
        assert_eq!(engine.config().array_size, 3);

        let mut engine = seeded(20);
        engine.set_values(vec![9, 7, 8]);
        assert_eq!(engine.config().min_value, 7);
        assert_eq!(engine.config().max_value, 9);
        assert_eq!(engine.config().max_value, engine.value_bound());
    }

    #[test]
    fn test_elapsed_frozen_after_finish_and_halt() {
        let pause = std::time::Duration::from_millis(10);

        let mut engine = SortEngine::with_values((0..64).rev().collect());
        for i in 0..3 {
            assert!(engine.select_algorithm_index(i));
            engine.set_values((0..64).rev().collect());
            engine.begin_sort();
            while engine.advance() {}
            let finished = engine.metrics();
            assert!(!finished.running);
            std::thread::sleep(pause);
            assert_eq!(engine.metrics().elapsed_seconds, finished.elapsed_seconds);
        }

        let mut engine = seeded(200);
        engine.begin_sort();
        assert!(engine.advance());
        engine.halt_sort();
        let halted = engine.metrics();
        assert!(!halted.running);
        std::thread::sleep(pause);
        assert_eq!(engine.metrics().elapsed_seconds, halted.elapsed_seconds);
        assert!(!engine.advance());
        assert_eq!(engine.metrics().elapsed_seconds, halted.elapsed_seconds);
    }

    #[test]
    fn test_array_as_string() {
        let engine = SortEngine::with_values(vec![1, 20, 3]);
        assert_eq!(engine.array_as_string(), "[1, 20, 3]");
    }
}
