//! Parallel execution of an audit run.
//!
//! The orchestrator is responsible for:
//! * validating the configuration and seed list before anything executes,
//! * running exactly one worker per seed on a dedicated thread pool,
//! * joining all workers and merging their results in seed order.
//!
//! ## Execution model
//!
//! Workers are spawned through a rayon pool sized to `worker_count`, so the
//! CPU-bound sampling loops map to genuinely concurrent hardware threads.
//! The parallel map over seeds collects into a `Vec` in *input* order; that
//! ordered collect is both the join barrier and the single point where a
//! [`crate::WorkerResult`] crosses threads — a result is never observed
//! while its worker is still writing it, and completion order never leaks
//! into the merge.
//!
//! ## Failure semantics
//!
//! Setup failures are fatal to the whole run. A pool that silently came up
//! short of workers would change the effective total sample count and
//! invalidate every downstream statistic, so nothing with the appearance of
//! a completed run is ever returned on failure.

use rayon::prelude::*;

use crate::harness::aggregate::{merge, AggregateResult};
use crate::harness::error::{ConfigError, HarnessResult, ResourceError};
use crate::harness::progress::{Progress, SilentProgress};
use crate::harness::types::{SampleConfig, Seed};
use crate::harness::worker::run_worker;


/// Runs a full audit: one worker per seed, joined and merged.
///
/// Equivalent to [`execute_with_progress`] with progress discarded.
///
/// ## Errors
/// * [`ConfigError`] variants if the configuration is invalid or the seed
///   list length does not match `worker_count`.
/// * [`ResourceError`] if the worker pool cannot be created.
///
/// ## Example
/// ```
/// use uniformity::{execute, SampleConfig};
///
/// let config = SampleConfig::new(6, 100_000, 2)?;
/// let result = execute(&config, &[1, 2])?;
/// assert_eq!(result.total_histogram.iter().sum::<u64>(), 200_000);
/// # Ok::<(), uniformity::HarnessError>(())
/// ```
pub fn execute(config: &SampleConfig, seeds: &[Seed]) -> HarnessResult<AggregateResult> {
    execute_with_progress(config, seeds, &SilentProgress)
}

/// Runs a full audit, reporting advisory progress to `progress`.
///
/// Spawns exactly `config.worker_count` workers, one per seed, with no
/// shared mutable state between them; blocks until every worker has
/// completed; merges the results in seed order and returns the aggregate.
///
/// Two calls with identical `config` and `seeds` produce an identical
/// [`AggregateResult`], regardless of how the workers were scheduled.
pub fn execute_with_progress<P>(
    config: &SampleConfig,
    seeds: &[Seed],
    progress: &P,
) -> HarnessResult<AggregateResult>
where
    P: Progress + ?Sized,
{
    config.validate()?;
    if seeds.len() != config.worker_count {
        return Err(ConfigError::SeedCountMismatch {
            seeds: seeds.len(),
            workers: config.worker_count,
        }
        .into());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| ResourceError { reason: e.to_string() })?;

    let results = pool.install(|| {
        seeds
            .par_iter()
            .enumerate()
            .map(|(worker, &seed)| run_worker(worker, seed, config, progress))
            .collect::<Vec<_>>()
    });

    Ok(merge(&results, config))
}
