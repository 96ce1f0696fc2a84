use serde::Serialize;

/// Statistics for one completed sort, as returned by
/// [`HeapSorter::analyze`](crate::HeapSorter::analyze).
///
/// Field names are stable; downstream reporting keys on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortReport {
    /// Number of elements sorted.
    pub size: usize,
    /// Comparisons performed, one per child probe during sift-down.
    pub comparisons: u64,
    /// Swaps performed, during both heap construction and extraction.
    pub swaps: u64,
    /// Wall-clock duration of the sort, in seconds.
    pub elapsed_time: f64,
    /// Number of snapshots recorded. Equals `swaps` when step logging is on,
    /// zero when it was disabled.
    pub step_count: usize,
}
