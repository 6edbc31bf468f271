use crate::algorithm::{guard_length, StepSorter};
use crate::metrics::SortMetrics;

/// Bottom-up merge sort, one merge of two adjacent runs per step.
///
/// `width` is the run length of the current pass (1, 2, 4, ...) and
/// `left_start` the first index of the next pair of runs to merge.
#[derive(Clone, Debug)]
pub struct MergeSort {
    width: usize,
    left_start: usize,
    len: usize,
    left_buf: Vec<i32>,
    right_buf: Vec<i32>,
    metrics: SortMetrics,
}

impl Default for MergeSort {
    fn default() -> Self {
        Self {
            width: 1,
            left_start: 0,
            len: 0,
            left_buf: Vec::new(),
            right_buf: Vec::new(),
            metrics: SortMetrics::default(),
        }
    }
}

impl MergeSort {
    /// Current `(width, left_start)` cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.width, self.left_start)
    }

    /// Merge `data[left..=mid]` with `data[mid + 1..=right]`.
    ///
    /// Ties take from the left run. A swap is counted for every element taken
    /// from the right run while both runs are non-empty.
    fn merge(&mut self, data: &mut [i32], left: usize, mid: usize, right: usize) {
        self.left_buf.clear();
        self.left_buf.extend_from_slice(&data[left..=mid]);
        self.right_buf.clear();
        self.right_buf.extend_from_slice(&data[mid + 1..=right]);

        let (mut i, mut j, mut k) = (0, 0, left);
        while i < self.left_buf.len() && j < self.right_buf.len() {
            self.metrics.record_comparison();
            if self.left_buf[i] <= self.right_buf[j] {
                data[k] = self.left_buf[i];
                i += 1;
            } else {
                data[k] = self.right_buf[j];
                j += 1;
                self.metrics.record_swap();
            }
            k += 1;
        }

        let left_tail = &self.left_buf[i..];
        data[k..k + left_tail.len()].copy_from_slice(left_tail);
        k += left_tail.len();
        let right_tail = &self.right_buf[j..];
        data[k..k + right_tail.len()].copy_from_slice(right_tail);
    }

    fn finish(&mut self) -> bool {
        self.metrics.stop();
        self.left_buf = Vec::new();
        self.right_buf = Vec::new();
        log::debug!(
            "Merge Sort finished at width {}: {} comparisons, {} swaps",
            self.width,
            self.metrics.comparisons(),
            self.metrics.swaps()
        );
        false
    }
}

impl StepSorter for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn initialize(&mut self, data: &[i32]) {
        self.width = 1;
        self.left_start = 0;
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
        if n <= 1 {
            return self.finish();
        }
        let last = n - 1;

        if self.left_start >= last {
            if self.width > last {
                return self.finish();
            }
            self.width *= 2;
            self.left_start = 0;
            log::trace!("Merge Sort pass complete, width now {}", self.width);
        }

        let mid = (self.left_start + self.width - 1).min(last);
        let right = (self.left_start + 2 * self.width - 1).min(last);
        if mid < right {
            self.merge(data, self.left_start, mid, right);
        }
        self.left_start += 2 * self.width;
        true
    }

    fn metrics(&self) -> &SortMetrics {
        &self.metrics
    }

    fn metrics_mut(&mut self) -> &mut SortMetrics {
        &mut self.metrics
    }
}
