use proptest::prelude::*;

use uniformity::{
    execute, merge, run_worker, SampleConfig, SilentProgress, WorkerResult,
};

fn results_for(config: &SampleConfig, seeds: &[u64]) -> Vec<WorkerResult> {
    seeds
        .iter()
        .enumerate()
        .map(|(worker, &seed)| run_worker(worker, seed, config, &SilentProgress))
        .collect()
}

/// Equal within the float summation's own rounding; the fold over a handful
/// of partial sums cannot drift further than this.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn identical_runs_are_bit_identical() {
    let config = SampleConfig::new(6, 50_000, 3).unwrap();
    let seeds = [7u64, 8, 9];

    let first = execute(&config, &seeds).unwrap();
    let second = execute(&config, &seeds).unwrap();

    // Full structural equality, floats included: the fold order is fixed,
    // so scheduling differences between the two runs must not show up.
    assert_eq!(first, second);
}

#[test]
fn merge_over_same_sequence_is_bit_identical() {
    let config = SampleConfig::new(8, 10_000, 4).unwrap();
    let results = results_for(&config, &[11, 22, 33, 44]);

    assert_eq!(merge(&results, &config), merge(&results, &config));
}

proptest! {
    #[test]
    fn merge_is_order_independent(
        bucket_count in 1u64..32,
        iterations in 0u64..2_000,
        seeds in proptest::collection::vec(any::<u64>(), 1..6),
    ) {
        let config = SampleConfig::new(bucket_count, iterations, seeds.len()).unwrap();
        let results = results_for(&config, &seeds);
        let base = merge(&results, &config);

        let mut rotated = results.clone();
        rotated.rotate_left(1);
        let mut reversed = results;
        reversed.reverse();

        for permuted in [merge(&rotated, &config), merge(&reversed, &config)] {
            // Histogram sums are exact in any order.
            prop_assert_eq!(&base.total_histogram, &permuted.total_histogram);
            prop_assert!(close(base.overall_mean, permuted.overall_mean));
            prop_assert!(close(base.overall_std_dev, permuted.overall_std_dev));
            for (a, b) in base
                .per_bucket_deviation
                .iter()
                .zip(&permuted.per_bucket_deviation)
            {
                prop_assert!(close(*a, *b));
            }
        }
    }

    #[test]
    fn histogram_total_matches_configured_samples(
        bucket_count in 1u64..16,
        iterations in 0u64..1_000,
        seeds in proptest::collection::vec(any::<u64>(), 1..4),
    ) {
        let config = SampleConfig::new(bucket_count, iterations, seeds.len()).unwrap();
        let result = execute(&config, &seeds).unwrap();

        prop_assert_eq!(
            result.total_histogram.iter().sum::<u64>(),
            config.total_samples()
        );
        prop_assert_eq!(result.total_histogram.len() as u64, bucket_count);
    }

    #[test]
    fn worker_results_account_for_every_sample(
        bucket_count in 1u64..16,
        iterations in 0u64..1_000,
        seed in any::<u64>(),
    ) {
        let config = SampleConfig::new(bucket_count, iterations, 1).unwrap();
        let result = run_worker(0, seed, &config, &SilentProgress);

        prop_assert_eq!(result.samples(), iterations);
        prop_assert_eq!(result.histogram.len() as u64, bucket_count);
    }
}
