use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::{SortError, SortReport};

type Compare<T> = Box<dyn Fn(&T, &T) -> Option<Ordering>>;

/// In-place binary heap sort with instrumentation.
///
/// A `HeapSorter` owns two copies of the input: `original`, kept untouched for
/// later comparison, and `working`, the subject of the in-place heap
/// operations. While sorting it counts comparisons and swaps and (by default)
/// records a full snapshot of `working` after every swap, so the run can be
/// replayed or rendered afterwards.
///
/// The ordering policy is fixed at construction: an optional key projection
/// (identity by default) and a `reverse` flag that inverts strict comparison
/// outcomes. Equal keys never swap under either ordering.
///
/// Memory note: the step log grows by one full-length snapshot per swap,
/// worst case O(n log n) snapshots of size O(n). For large inputs turn it off
/// with [`step_logging`](Self::step_logging).
///
/// ```
/// use heapsort_lab::HeapSorter;
///
/// let mut sorter = HeapSorter::new(vec![4, 10, 3, 5, 1]);
/// assert_eq!(sorter.sort().unwrap(), &[1, 3, 4, 5, 10]);
///
/// let report = sorter.analyze().unwrap();
/// assert_eq!(report.step_count as u64, report.swaps);
/// ```
pub struct HeapSorter<T: 'static> {
    original: Vec<T>,
    working: Vec<T>,
    reverse: bool,
    compare: Compare<T>,
    comparisons: u64,
    swaps: u64,
    steps: Vec<Vec<T>>,
    record_steps: bool,
    elapsed: Option<Duration>,
}

impl<T: Clone + PartialOrd + 'static> HeapSorter<T> {
    /// Ascending sort under the element's own ordering.
    pub fn new(data: Vec<T>) -> Self {
        Self::with_policy(data, false)
    }

    /// Identity projection with an explicit direction. `reverse = true`
    /// sorts descending.
    pub fn with_policy(data: Vec<T>, reverse: bool) -> Self {
        Self::from_parts(data, reverse, Box::new(|a: &T, b: &T| a.partial_cmp(b)))
    }
}

impl<T: Clone + 'static> HeapSorter<T> {
    /// Sort under a key projection: elements are ordered by `key(element)`.
    ///
    /// The projection must be consistent; a projection that yields
    /// incomparable values (NaN, say) makes `sort` fail at the first
    /// affected comparison.
    pub fn with_key<K, P>(data: Vec<T>, reverse: bool, key: K) -> Self
    where
        K: Fn(&T) -> P + 'static,
        P: PartialOrd,
    {
        Self::from_parts(
            data,
            reverse,
            Box::new(move |a: &T, b: &T| key(a).partial_cmp(&key(b))),
        )
    }

    fn from_parts(data: Vec<T>, reverse: bool, compare: Compare<T>) -> Self {
        Self {
            original: data.clone(),
            working: data,
            reverse,
            compare,
            comparisons: 0,
            swaps: 0,
            steps: Vec::new(),
            record_steps: true,
            elapsed: None,
        }
    }

    /// Enable or disable per-swap snapshots. On by default; turn off when
    /// sorting large inputs where the log's memory cost matters.
    pub fn step_logging(mut self, enabled: bool) -> Self {
        self.record_steps = enabled;
        self
    }

    /// Sort `working` in place and return it.
    ///
    /// Builds a heap bottom-up, then repeatedly swaps the extremum to the
    /// tail and repairs the shrunken heap. Ascending unless the sorter was
    /// built with `reverse`. Calling this again re-runs the whole algorithm
    /// on the already-sorted data; counters and the step log keep growing.
    ///
    /// Fails fast with [`SortError::Incomparable`] if any two projected
    /// values have no ordering; `working` is left exactly as the step log
    /// describes, and timing stays unset.
    pub fn sort(&mut self) -> Result<&[T], SortError> {
        let start = Instant::now();
        self.build_heap()?;
        for end in (1..self.working.len()).rev() {
            // Extremum to the tail; the tail is final from here on.
            self.working.swap(0, end);
            self.swaps += 1;
            self.record_step();
            self.sift_down(end, 0)?;
        }
        self.elapsed = Some(start.elapsed());
        Ok(&self.working)
    }

    /// Statistics for the most recent completed sort.
    ///
    /// Errors with [`SortError::NotYetSorted`] until `sort` has succeeded
    /// once; partial or zeroed statistics are never returned.
    pub fn analyze(&self) -> Result<SortReport, SortError> {
        let elapsed = self.elapsed.ok_or(SortError::NotYetSorted)?;
        Ok(SortReport {
            size: self.working.len(),
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed_time: elapsed.as_secs_f64(),
            step_count: self.steps.len(),
        })
    }

    /// The input as supplied at construction, never mutated.
    pub fn original(&self) -> &[T] {
        &self.original
    }

    /// Current state of the working copy (sorted after a successful `sort`).
    pub fn working(&self) -> &[T] {
        &self.working
    }

    /// All recorded snapshots, oldest first. One entry per swap when step
    /// logging is on.
    pub fn steps(&self) -> &[Vec<T>] {
        &self.steps
    }

    /// Snapshot at position `index` in the log, if recorded.
    pub fn step(&self, index: usize) -> Option<&[T]> {
        self.steps.get(index).map(Vec::as_slice)
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Duration of the most recent successful `sort`, if any.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    fn build_heap(&mut self) -> Result<(), SortError> {
        let n = self.working.len();
        // Last parent is at n/2 - 1; leaves are heaps already.
        for i in (0..n / 2).rev() {
            self.sift_down(n, i)?;
        }
        Ok(())
    }

    /// Restore the heap property rooted at `root` within the logical heap
    /// `working[..n]`. Loop form of the textbook recursion: each round either
    /// finds the root in place or swaps it one level down.
    fn sift_down(&mut self, n: usize, mut root: usize) -> Result<(), SortError> {
        loop {
            let left = 2 * root + 1;
            let right = left + 1;
            let mut largest = root;

            if left < n && self.outranks(left, largest)? {
                largest = left;
            }
            if right < n && self.outranks(right, largest)? {
                largest = right;
            }
            if largest == root {
                return Ok(());
            }

            self.working.swap(root, largest);
            self.swaps += 1;
            self.record_step();
            root = largest;
        }
    }

    /// Effective comparison: does `working[a]` belong above `working[b]` in
    /// the heap? Counts every probe, including ones that fail.
    fn outranks(&mut self, a: usize, b: usize) -> Result<bool, SortError> {
        self.comparisons += 1;
        let ord = (self.compare)(&self.working[a], &self.working[b])
            .ok_or(SortError::Incomparable { left: a, right: b })?;
        let ord = if self.reverse { ord.reverse() } else { ord };
        Ok(ord == Ordering::Greater)
    }

    fn record_step(&mut self) {
        if self.record_steps {
            self.steps.push(self.working.clone());
        }
    }
}
