use crate::algorithm::{guard_length, StepSorter};
use crate::metrics::SortMetrics;

/// Quick sort with an explicit stack of pending `(low, high)` ranges.
///
/// One step pops a single range and, if it holds more than one element,
/// partitions it (Lomuto, last element as pivot) and pushes both halves.
/// Degenerate halves are pushed too and discarded when popped.
#[derive(Clone, Debug, Default)]
pub struct QuickSort {
    stack: Vec<(isize, isize)>,
    len: usize,
    metrics: SortMetrics,
}

impl QuickSort {
    /// Ranges still waiting to be partitioned, bottom of the stack first.
    pub fn pending(&self) -> &[(isize, isize)] {
        &self.stack
    }

    fn partition(&mut self, data: &mut [i32], low: usize, high: usize) -> usize {
        let pivot = data[high];
        let mut store = low;
        for j in low..high {
            self.metrics.record_comparison();
            if data[j] <= pivot {
                data.swap(store, j);
                self.metrics.record_swap();
                store += 1;
            }
        }
        data.swap(store, high);
        self.metrics.record_swap();
        store
    }

    fn finish(&mut self) -> bool {
        self.metrics.stop();
        log::debug!(
            "Quick Sort finished: {} comparisons, {} swaps",
            self.metrics.comparisons(),
            self.metrics.swaps()
        );
        false
    }
}

impl StepSorter for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn initialize(&mut self, data: &[i32]) {
        self.stack.clear();
        self.len = data.len();
        if !data.is_empty() {
            self.stack.push((0, data.len() as isize - 1));
        }
        self.metrics.start();
    }

    fn step(&mut self, data: &mut [i32]) -> bool {
        if !self.metrics.is_running() {
            return false;
        }
        if !guard_length(self.name(), self.len, data, &mut self.metrics) {
            return false;
        }
        let Some((low, high)) = self.stack.pop() else {
            return self.finish();
        };

        if low < high {
            let pivot = self.partition(data, low as usize, high as usize) as isize;
            log::trace!("Quick Sort partitioned [{}, {}] at {}", low, high, pivot);
            self.stack.push((low, pivot - 1));
            self.stack.push((pivot + 1, high));
        }

        if self.stack.is_empty() {
            return self.finish();
        }
        true
    }

    fn metrics(&self) -> &SortMetrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut SortMetrics {
        &mut self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_partitions_whole_array() {
        let mut sorter = QuickSort::default();
        let mut data = vec![5, 3, 4, 1, 2];
        sorter.initialize(&data);
        assert_eq!(sorter.pending(), &[(0, 4)]);

        assert!(sorter.step(&mut data));
        // Pivot 2: only 1 qualifies, then the pivot lands at index 1
        assert_eq!(data, vec![1, 2, 4, 5, 3]);
        assert_eq!(sorter.metrics().comparisons(), 4);
        assert_eq!(sorter.metrics().swaps(), 2);
        assert_eq!(sorter.pending(), &[(0, 0), (2, 4)]);
    }

    #[test]
    fn test_degenerate_ranges_are_discarded() {
        let mut sorter = QuickSort::default();
        let mut data = vec![1, 2];
        sorter.initialize(&data);

        // Pivot 2 ends at index 1, pushing (0, 0) and (2, 1)
        assert!(sorter.step(&mut data));
        assert_eq!(sorter.pending(), &[(0, 0), (2, 1)]);
        let comparisons = sorter.metrics().comparisons();

        assert!(sorter.step(&mut data));
        assert!(!sorter.step(&mut data));
        assert_eq!(sorter.metrics().comparisons(), comparisons);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_step_count_is_linear() {
        let n = 200;
        let mut sorter = QuickSort::default();
        let mut data: Vec<i32> = (0..n).rev().collect();
        sorter.initialize(&data);
        let mut steps = 1;
        while sorter.step(&mut data) {
            steps += 1;
        }
        assert!(steps <= 2 * n as usize + 1);
        assert_eq!(data, (0..n).collect::<Vec<_>>());
    }
}
