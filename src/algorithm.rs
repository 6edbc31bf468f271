//! The resumable algorithm contract and the closed set of algorithms.

use crate::bubble::BubbleSort;
use crate::error::{Result, SortError};
use crate::merge::MergeSort;
use crate::metrics::SortMetrics;
use crate::quick::QuickSort;

/// A sort that advances one bounded unit of work per [`step`](StepSorter::step).
///
/// The array is never stored: it is passed to every call, so an algorithm
/// cannot outlive or alias the data it permutes. Between `initialize` and the
/// final `step`, the caller must pass the same (unresized) array.
pub trait StepSorter {
    /// Display name, unique across the registry
    fn name(&self) -> &'static str;

    /// Discard any continuation state, zero metrics and start a new run over `data`.
    fn initialize(&mut self, data: &[i32]);

    /// Perform one unit of work on `data`.
    ///
    /// Returns `true` while more work remains. Once it returns `false` the run
    /// is over and the running flag is cleared. Stepping a stopped algorithm is
    /// a no-op returning `false`.
    fn step(&mut self, data: &mut [i32]) -> bool;

    fn metrics(&self) -> &SortMetrics;

    fn metrics_mut(&mut self) -> &mut SortMetrics;

    /// Stop the run. Continuation state is kept but no further progress is made.
    fn stop(&mut self) {
        self.metrics_mut().stop();
    }

    /// Zero the metrics. The array is not touched.
    fn reset(&mut self) {
        self.metrics_mut().reset();
    }

    fn is_running(&self) -> bool {
        self.metrics().is_running()
    }
}

/// Stop the run if `data` no longer has the length seen at `initialize`.
pub(crate) fn guard_length(
    name: &str,
    expected: usize,
    data: &[i32],
    metrics: &mut SortMetrics,
) -> bool {
    if data.len() == expected {
        return true;
    }
    log::warn!(
        "{}: array length changed from {} to {} mid-run, stopping",
        name,
        expected,
        data.len()
    );
    metrics.stop();
    false
}

/// Identifies one of the compiled-in algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bubble,
    Quick,
    Merge,
}

impl AlgorithmKind {
    /// Registry order
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::Merge => "Merge Sort",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(name.to_string()))
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(SortError::IndexOutOfRange {
            index,
            len: Self::ALL.len(),
        })
    }

    pub fn complexity(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Time: O(n^2) | Space: O(1)",
            AlgorithmKind::Quick => "Time: O(n log n) avg, O(n^2) worst | Space: O(log n)",
            AlgorithmKind::Merge => "Time: O(n log n) | Space: O(n)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => {
                "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order."
            }
            AlgorithmKind::Quick => {
                "Divide-and-conquer sort that picks a pivot and partitions the array around it."
            }
            AlgorithmKind::Merge => {
                "Merges adjacent sorted runs of doubling width until the whole array is one run."
            }
        }
    }
}

/// A live algorithm instance, one variant per [`AlgorithmKind`].
#[derive(Clone, Debug)]
pub enum Algorithm {
    Bubble(BubbleSort),
    Quick(QuickSort),
    Merge(MergeSort),
}

impl Algorithm {
    pub fn new(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Bubble => Algorithm::Bubble(BubbleSort::default()),
            AlgorithmKind::Quick => Algorithm::Quick(QuickSort::default()),
            AlgorithmKind::Merge => Algorithm::Merge(MergeSort::default()),
        }
    }

    /// Build an algorithm from its display name.
    pub fn from_name(name: &str) -> Result<Self> {
        AlgorithmKind::from_name(name).map(Self::new)
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Bubble(_) => AlgorithmKind::Bubble,
            Algorithm::Quick(_) => AlgorithmKind::Quick,
            Algorithm::Merge(_) => AlgorithmKind::Merge,
        }
    }
}

impl StepSorter for Algorithm {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn initialize(&mut self, data: &[i32]) {
        match self {
            Algorithm::Bubble(s) => s.initialize(data),
            Algorithm::Quick(s) => s.initialize(data),
            Algorithm::Merge(s) => s.initialize(data),
        }
    }

    fn step(&mut self, data: &mut [i32]) -> bool {
        match self {
            Algorithm::Bubble(s) => s.step(data),
            Algorithm::Quick(s) => s.step(data),
            Algorithm::Merge(s) => s.step(data),
        }
    }

    fn metrics(&self) -> &SortMetrics {
        match self {
            Algorithm::Bubble(s) => s.metrics(),
            Algorithm::Quick(s) => s.metrics(),
            Algorithm::Merge(s) => s.metrics(),
        }
    }

    fn metrics_mut(&mut self) -> &mut SortMetrics {
        match self {
            Algorithm::Bubble(s) => s.metrics_mut(),
            Algorithm::Quick(s) => s.metrics_mut(),
            Algorithm::Merge(s) => s.metrics_mut(),
        }
    }
}
