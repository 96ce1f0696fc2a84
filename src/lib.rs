//! Instrumented Heap Sort
//!
//! Sorts a sequence in place with the binary-heap algorithm while counting
//! comparisons and swaps and recording a snapshot of the array after every
//! swap, for later inspection or visualization.

pub mod chart;
pub mod error;
pub mod report;
pub mod sorter;

pub use error::SortError;
pub use report::SortReport;
pub use sorter::HeapSorter;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(data: &[i32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    fn sort_and_check(input: Vec<i32>) {
        let mut sorter = HeapSorter::new(input);
        let sorted = sorter.sort().unwrap().to_vec();
        assert!(is_sorted(&sorted));
        assert_eq!(sorter.steps().len() as u64, sorter.swaps());
        assert!(sorter.analyze().is_ok());
    }

    #[test]
    fn test_empty() {
        sort_and_check(vec![]);
    }

    #[test]
    fn test_single_element() {
        sort_and_check(vec![42]);
    }

    #[test]
    fn test_already_sorted() {
        sort_and_check(vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_sorted() {
        sort_and_check(vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_random() {
        sort_and_check(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    }

    #[test]
    fn test_duplicates() {
        sort_and_check(vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_large_random() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-10000..10000)).collect();
        sort_and_check(data);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sorts_any_vector_under_either_ordering(
                input in proptest::collection::vec(-10000..10000i32, 0..200),
                reverse in proptest::bool::ANY,
            ) {
                let mut sorter = HeapSorter::with_policy(input.clone(), reverse);
                let sorted = sorter.sort().unwrap().to_vec();

                prop_assert!(
                    sorted.windows(2).all(|w| {
                        if reverse { w[0] >= w[1] } else { w[0] <= w[1] }
                    }),
                    "output not sorted under the selected ordering"
                );

                // Same multiset as the input.
                let mut lhs = sorted;
                let mut rhs = input;
                lhs.sort_unstable();
                rhs.sort_unstable();
                prop_assert_eq!(lhs, rhs);

                prop_assert_eq!(sorter.steps().len() as u64, sorter.swaps());
            }
        }
    }
}
