//! Core Types, Identifiers, and Configuration
//!
//! This module defines the **fundamental types, constants, and the run
//! configuration** shared across the sampling engine. These definitions form
//! the semantic backbone of the harness and are used by the generator, the
//! workers, the aggregator, and the orchestrator alike.
//!
//! ## Design Philosophy
//!
//! The harness is designed around:
//!
//! - **Private per-worker state** — no sharing during sampling,
//! - **Pre-sized dense storage** — one histogram slot per output bucket,
//! - **Validated-once configuration** — the hot loop never re-checks bounds,
//! - **Semantic aliases** — `u64` means different things in different places,
//!   and the aliases keep signatures readable.
//!
//! ## Output Range
//!
//! The generator maps its 64-bit state into a bucket index in
//! `[0, bucket_count)` using a fixed-point multiply-high of the state's top
//! 32 bits. That mapping is only a valid bucket index while
//! `1 <= bucket_count <= 2^32`; [`SampleConfig::validate`] enforces the
//! bound before any worker starts, so generation itself carries no checks.
//!
//! ## Lifecycle
//!
//! A [`SampleConfig`] is created once by the caller and never mutated.
//! Generator state and worker accumulators live and die inside a single
//! worker's run; the aggregate result is computed once after all workers
//! have joined.

use crate::harness::error::ConfigError;


/// Seed value for one worker's generator state.
pub type Seed = u64;
/// Index of one discrete output value of the generator.
pub type BucketIndex = u64;
/// Count of samples, per worker or across the whole run.
pub type SampleCount = u64;

/// Largest supported output range (`2^32` buckets).
///
/// The output mapping consumes the high 32 bits of the generator state, so
/// a bucket count above `2^32` could produce indices outside the histogram.
pub const MAX_BUCKET_COUNT: u64 = 1 << 32;

/// Immutable configuration of one audit run.
///
/// ## Invariants (after [`SampleConfig::validate`])
/// * `1 <= bucket_count <= 2^32`
/// * `worker_count >= 1`
///
/// `iterations_per_worker` may be zero; a zero-iteration run is well defined
/// and produces all-zero statistics.
///
/// ## Notes
/// The configuration is set once at orchestration start and shared read-only
/// with every worker. All workers run the same number of iterations; the
/// aggregation step relies on that uniformity.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleConfig {

    /// Number of possible generator output values.
    pub bucket_count: u64,

    /// Number of samples each worker produces.
    pub iterations_per_worker: SampleCount,

    /// Degree of parallelism; one independent generator per worker.
    pub worker_count: usize,
}

impl SampleConfig {
    /// Builds a configuration, rejecting invalid bounds up front.
    ///
    /// ## Errors
    /// * [`ConfigError::ZeroBuckets`] if `bucket_count == 0`
    /// * [`ConfigError::BucketCountOverflow`] if `bucket_count > 2^32`
    /// * [`ConfigError::ZeroWorkers`] if `worker_count == 0`
    pub fn new(
        bucket_count: u64,
        iterations_per_worker: SampleCount,
        worker_count: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            bucket_count,
            iterations_per_worker,
            worker_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks the configuration invariants.
    ///
    /// Called by the orchestrator before any worker starts, so that a
    /// hand-constructed configuration cannot reach the sampling loop with
    /// out-of-range bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_count == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        if self.bucket_count > MAX_BUCKET_COUNT {
            return Err(ConfigError::BucketCountOverflow {
                bucket_count: self.bucket_count,
            });
        }
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Total number of samples across all workers.
    pub fn total_samples(&self) -> SampleCount {
        self.iterations_per_worker * self.worker_count as SampleCount
    }
}
