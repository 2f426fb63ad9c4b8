//! Deterministic aggregation of worker results.
//!
//! This is the combination phase of the harness: per-worker accumulators
//! are folded into global totals and compared against the closed-form
//! moments of a discrete uniform distribution.
//!
//! ## Determinism
//!
//! Every operation in the merge is a commutative, associative sum, so
//! worker *completion* order can never affect the outcome. On top of that,
//! the fold always walks the result slice front to back, fixing the
//! floating-point summation order — two merges over the same sequence are
//! bit-identical, and a permuted sequence differs only by the summation's
//! own rounding.
//!
//! ## Theoretical reference
//!
//! For a uniform distribution over `n` consecutive integers `0..n`:
//!
//! * mean: `n/2 - 0.5`
//! * standard deviation: `sqrt(Σ_b (b - mean)^2 / n)`, the closed form of
//!   which is `sqrt((n^2 - 1) / 12)`
//!
//! Observed statistics are reported next to these so a caller can judge
//! deviation without re-deriving the reference values.

use crate::harness::types::SampleConfig;
use crate::harness::worker::WorkerResult;


/// Final statistics of a completed run, compared against the uniform
/// reference distribution.
///
/// Derived once after all workers have joined; read-only thereafter.
///
/// ## Invariants
/// * `total_histogram.len() == bucket_count`
/// * `sum(total_histogram) == iterations_per_worker * worker_count`

#[derive(Clone, Debug, PartialEq)]
pub struct AggregateResult {

    /// Bucket-wise sum of all worker histograms.
    pub total_histogram: Vec<u64>,

    /// Observed mean of all output values.
    pub overall_mean: f64,

    /// Observed standard deviation of all output values.
    pub overall_std_dev: f64,

    /// Mean of the reference uniform distribution.
    pub expected_mean: f64,

    /// Standard deviation of the reference uniform distribution.
    pub expected_std_dev: f64,

    /// Relative count deviation per bucket: `observed / expected - 1`.
    ///
    /// All zero for a zero-sample run (there is nothing to deviate from).
    pub per_bucket_deviation: Vec<f64>,
}

/// Mean of a uniform distribution over `bucket_count` consecutive integers
/// starting at zero.
pub fn expected_mean(bucket_count: u64) -> f64 {
    bucket_count as f64 / 2.0 - 0.5
}

/// Standard deviation of a uniform distribution over `bucket_count`
/// consecutive integers starting at zero.
pub fn expected_std_dev(bucket_count: u64) -> f64 {
    let center = expected_mean(bucket_count);
    let mut sum = 0.0_f64;
    for bucket in 0..bucket_count {
        let delta = bucket as f64 - center;
        sum += delta * delta / bucket_count as f64;
    }
    sum.sqrt()
}

/// Merges completed worker results into the global statistics.
///
/// Pure reduction over already-validated inputs; it cannot fail.
///
/// ## Preconditions
/// * `results.len() == config.worker_count`
/// * every result was produced with this `config` — in particular, all
///   workers ran the same iteration count. The overall mean is the simple
///   average of per-worker means, which is only the true global mean
///   because each worker's mean carries equal weight.
///
/// ## Determinism
/// The fold walks `results` front to back. Callers that need bit-identical
/// floating output across runs must present results in a stable order; the
/// orchestrator hands them over in seed order regardless of which worker
/// finished first.
pub fn merge(results: &[WorkerResult], config: &SampleConfig) -> AggregateResult {
    let buckets = config.bucket_count as usize;

    let mut total_histogram = vec![0u64; buckets];
    let mut mean_sum = 0.0_f64;
    let mut deviation_sum = 0.0_f64;

    for result in results {
        for (total, &count) in total_histogram.iter_mut().zip(&result.histogram) {
            *total += count;
        }
        mean_sum += result.mean;
        deviation_sum += result.sum_squared_deviation;
    }

    let overall_mean = mean_sum / config.worker_count as f64;
    let overall_std_dev = deviation_sum.sqrt();

    let total_samples = config.iterations_per_worker as f64 * config.worker_count as f64;
    let expected_per_bucket = total_samples / config.bucket_count as f64;
    let per_bucket_deviation = if total_samples == 0.0 {
        vec![0.0; buckets]
    } else {
        total_histogram
            .iter()
            .map(|&count| count as f64 / expected_per_bucket - 1.0)
            .collect()
    };

    AggregateResult {
        total_histogram,
        overall_mean,
        overall_std_dev,
        expected_mean: expected_mean(config.bucket_count),
        expected_std_dev: expected_std_dev(config.bucket_count),
        per_bucket_deviation,
    }
}
