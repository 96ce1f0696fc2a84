use std::fmt;

/// Failure modes of a [`HeapSorter`](crate::HeapSorter).
///
/// Construction never fails; errors surface from `sort` (comparison failure)
/// or `analyze` (called too early).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Two projected values had no defined ordering (`partial_cmp` returned
    /// `None`, e.g. a NaN key). The sort stops at the first such comparison.
    Incomparable { left: usize, right: usize },
    /// `analyze` was called before any successful `sort`.
    NotYetSorted,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Incomparable { left, right } => write!(
                f,
                "elements at indices {left} and {right} have no defined ordering"
            ),
            SortError::NotYetSorted => {
                write!(f, "analyze called before sort: no statistics recorded yet")
            }
        }
    }
}

impl std::error::Error for SortError {}
