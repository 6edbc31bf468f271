use crate::algorithm::{guard_length, StepSorter};
use crate::metrics::SortMetrics;

/// Bubble sort, one full pass per step.
///
/// `pass` counts completed passes; the last `pass` elements are already in
/// their final position, so each pass scans `[0, len - 1 - pass)`.
#[derive(Clone, Debug, Default)]
pub struct BubbleSort {
    pass: usize,
    len: usize,
    metrics: SortMetrics,
}

impl BubbleSort {
    pub fn pass(&self) -> usize {
        self.pass
    }

    fn finish(&mut self) -> bool {
        self.metrics.stop();
        log::debug!(
            "Bubble Sort finished after {} passes: {} comparisons, {} swaps",
            self.pass,
            self.metrics.comparisons(),
            self.metrics.swaps()
        );
        false
    }
}

impl StepSorter for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn initialize(&mut self, data: &[i32]) {
        self.pass = 0;
        self.len = data.len();
        self.metrics.start();
    }

    fn step(&mut self, data: &mut [i32]) -> bool {
        if !self.metrics.is_running() {
            return false;
        }
        if !guard_length(self.name(), self.len, data, &mut self.metrics) {
            return false;
        }
        let n = data.len();
        if n <= 1 || self.pass >= n - 1 {
            return self.finish();
        }

        let mut swapped = false;
        for i in 0..n - 1 - self.pass {
            self.metrics.record_comparison();
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                self.metrics.record_swap();
                swapped = true;
            }
        }
        self.pass += 1;
        log::trace!("Bubble Sort pass {} done, swapped: {}", self.pass, swapped);

        if !swapped || self.pass >= n - 1 {
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
