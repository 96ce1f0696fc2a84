use heapsort_lab::HeapSorter;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SweepResult {
    size: usize,
    comparisons: u64,
    swaps: u64,
    elapsed_time: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<SweepResult>,
    correctness: bool,
}

const SWEEP_SIZES: [usize; 3] = [100, 1_000, 10_000];
const SEED: u64 = 1357;

fn generate_input(rng: &mut StdRng, size: usize) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(0..1000)).collect()
}

fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut results = Vec::new();
    let mut all_correct = true;

    for size in SWEEP_SIZES {
        let input = generate_input(&mut rng, size);

        // Step logging off: at sweep sizes the snapshot log would dominate
        // memory without telling us anything new.
        let mut sorter = HeapSorter::new(input).step_logging(false);
        let correct = match sorter.sort() {
            Ok(sorted) => is_sorted(sorted),
            Err(_) => false,
        };
        all_correct &= correct;

        let report = sorter
            .analyze()
            .expect("sort completed, statistics must be available");
        info!(
            "size {size}: {} comparisons, {} swaps, {:.6}s",
            report.comparisons, report.swaps, report.elapsed_time
        );
        results.push(SweepResult {
            size: report.size,
            comparisons: report.comparisons,
            swaps: report.swaps,
            elapsed_time: report.elapsed_time,
            correct,
        });
    }

    let full = FullResults {
        results,
        correctness: all_correct,
    };
    println!("{}", serde_json::to_string(&full).unwrap());
}
