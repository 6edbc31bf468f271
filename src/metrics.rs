//! Per-algorithm progress counters and timing.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Comparison/swap counters, a running flag and a stopwatch.
///
/// Elapsed time is measured from the last [`start`](SortMetrics::start) while
/// running, and frozen at the last [`stop`](SortMetrics::stop) otherwise.
#[derive(Clone, Debug)]
pub struct SortMetrics {
    comparisons: u64,
    swaps: u64,
    running: bool,
    started_at: Instant,
    frozen: Duration,
}

impl Default for SortMetrics {
    fn default() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            running: false,
            started_at: Instant::now(),
            frozen: Duration::ZERO,
        }
    }
}

impl SortMetrics {
    /// Zero the counters and the frozen elapsed time. The running flag is untouched.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
        self.frozen = Duration::ZERO;
        self.started_at = Instant::now();
    }

    /// Reset counters, mark running and restart the clock.
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
    }

    /// Mark not running and freeze elapsed time at this instant.
    pub fn stop(&mut self) {
        if self.running {
            self.frozen = self.started_at.elapsed();
        }
        self.running = false;
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Duration {
        if self.running {
            self.started_at.elapsed()
        } else {
            self.frozen
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed_seconds: self.elapsed().as_secs_f64(),
            running: self.running,
        }
    }
}

/// Point-in-time copy of [`SortMetrics`] for presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_seconds: f64,
    pub running: bool,
}

impl MetricsSnapshot {
    /// Rough completion estimate in `[0, 1]`, assuming about `n log2 n / 2` comparisons.
    pub fn estimated_progress(&self, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        let n = len as f64;
        let expected = (n * n.log2() * 0.5).max(1.0);
        (self.comparisons as f64 / expected).min(1.0)
    }
}
