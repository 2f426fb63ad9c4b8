//! Per-worker sampling loop and private accumulators.
//!
//! A worker drives one [`SquareStep`] generator for a fixed number of
//! iterations, accumulating a histogram, a running mean, and a running sum
//! of squared deviations — entirely in memory it owns. This is the parallel
//! accumulation phase of the harness:
//!
//! 1. **Parallel accumulation** — each worker processes its own sample
//!    stream with its own accumulators; zero shared mutable memory means
//!    zero contention and no false sharing on the hot path.
//! 2. **Deterministic combination** — completed [`WorkerResult`] values are
//!    merged later by [`crate::harness::aggregate::merge`].
//!
//! ## Memory layout
//!
//! The histogram is allocated once at worker start, sized exactly to the
//! bucket count, and never grows. Together with the two scalar accumulators
//! it is the worker's entire working set beyond the 64-bit generator state.
//!
//! ## Streaming statistics
//!
//! The mean and squared-deviation accumulators are normalized *inside* the
//! loop (`+= value / iterations` per step) rather than by one division at
//! the end. This keeps the running values bounded for arbitrarily long
//! runs; see the rounding note on [`WorkerResult::mean`].

use crate::harness::aggregate::expected_mean;
use crate::harness::generator::SquareStep;
use crate::harness::progress::{Progress, PROGRESS_MASK};
use crate::harness::types::{SampleConfig, SampleCount, Seed};


/// Statistics produced by one worker over its private sample stream.
///
/// Owned by exactly one worker until it is returned in full; the
/// orchestrator's join is the only synchronization point before a result is
/// read.
///
/// ## Invariants
/// * `histogram.len() == bucket_count`
/// * `sum(histogram) == iterations_per_worker` for a completed result

#[derive(Clone, Debug, PartialEq)]
pub struct WorkerResult {

    /// Sample count per bucket; index = bucket.
    pub histogram: Vec<u64>,

    /// Running mean of output values, already normalized by this worker's
    /// planned iteration count.
    ///
    /// Accumulated as `mean += value / iterations` on every sample. The
    /// per-step division rounds more than a deferred division would; the
    /// streaming form is kept deliberately because it bounds the running
    /// value, and the extra rounding is negligible against the sampling
    /// noise being measured.
    pub mean: f64,

    /// Partial variance contribution, pre-normalized by this worker's
    /// iteration count and by the worker count.
    ///
    /// Summing this field across all workers and taking the square root
    /// yields the observed standard deviation of the whole run.
    pub sum_squared_deviation: f64,
}

impl WorkerResult {
    /// Number of samples recorded in the histogram.
    pub fn samples(&self) -> SampleCount {
        self.histogram.iter().sum()
    }
}

/// Runs one worker to completion and returns its statistics.
///
/// Executes exactly `config.iterations_per_worker` generator steps with no
/// access to any other worker's state. `worker` is only used to attribute
/// progress signals.
///
/// ## Behavior
/// * `iterations_per_worker == 0` short-circuits to an all-zero result;
///   the normalizing divisions never see a zero denominator.
/// * A progress signal fires every [`crate::PROGRESS_STRIDE`] iterations
///   and once at completion. Signals are advisory and never change results.
///
/// ## Guarantees
/// * **No side effects** beyond the returned value.
/// * **No failure modes**: the loop is pure arithmetic.
pub fn run_worker<P>(
    worker: usize,
    seed: Seed,
    config: &SampleConfig,
    progress: &P,
) -> WorkerResult
where
    P: Progress + ?Sized,
{
    let mut histogram = vec![0u64; config.bucket_count as usize];
    let mut mean = 0.0_f64;
    let mut sum_squared_deviation = 0.0_f64;

    if config.iterations_per_worker == 0 {
        return WorkerResult { histogram, mean, sum_squared_deviation };
    }

    let iterations = config.iterations_per_worker as f64;
    let workers = config.worker_count as f64;
    let center = expected_mean(config.bucket_count);
    let mut generator = SquareStep::new(seed, config.bucket_count);

    for i in 0..config.iterations_per_worker {
        let value = generator.advance();
        histogram[value as usize] += 1;
        mean += value as f64 / iterations;
        let delta = value as f64 - center;
        sum_squared_deviation += delta * delta / iterations / workers;

        if i & PROGRESS_MASK == 0 {
            progress.record(worker, i, config.iterations_per_worker);
        }
    }
    progress.record(worker, config.iterations_per_worker, config.iterations_per_worker);

    WorkerResult { histogram, mean, sum_squared_deviation }
}
