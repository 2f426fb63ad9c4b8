//! Error types for run configuration and worker-pool setup.
//!
//! This module declares the focused error types used by the audit harness.
//! Each error carries enough context to make failures actionable while
//! remaining small and cheap to pass around or convert into the aggregate
//! [`HarnessError`].
//!
//! ## Goals
//! * **Specificity:** Each variant models a single failure mode (zero-sized
//!   output range, seed/worker mismatch, pool construction failure).
//! * **Ergonomics:** All errors implement [`std::error::Error`] and
//!   [`fmt::Display`], and provide `From<T>` conversions into
//!   [`HarnessError`] so orchestration code can use `?` throughout.
//! * **Fail-closed semantics:** Every error here is detected *before*
//!   sampling begins. Once configuration and worker creation succeed, the
//!   run cannot fail — the sampling and merge logic is pure arithmetic with
//!   no I/O. There are therefore no recoverable or partial-result error
//!   states: a failed setup produces no output at all.
//!
//! ## Typical flow
//! The orchestrator validates the configuration and seed list, then builds
//! the worker pool. Either step bubbles its error into [`HarnessError`] via
//! `?`; callers can match on the variant for control flow or log the
//! `Display` form.

use std::fmt;


/// Returned when a run is requested with an invalid configuration.
///
/// Configuration errors are detected before any worker starts; nothing
/// executes and no partial result is produced.
///
/// ### Example
/// ```ignore
/// if seeds.len() != config.worker_count {
///     return Err(ConfigError::SeedCountMismatch {
///         seeds: seeds.len(),
///         workers: config.worker_count,
///     }.into());
/// }
/// ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {

    /// The output range was empty (`bucket_count == 0`).
    ZeroBuckets,

    /// The output range exceeded the 32-bit mapping (`bucket_count > 2^32`).
    BucketCountOverflow {
        /// Requested number of buckets.
        bucket_count: u64,
    },

    /// No workers were requested (`worker_count == 0`).
    ZeroWorkers,

    /// The seed list length did not match the worker count.
    ///
    /// Every worker needs exactly one caller-supplied seed; running with
    /// fewer would silently change the effective total iteration count.
    SeedCountMismatch {
        /// Number of seeds supplied.
        seeds: usize,

        /// Number of workers configured.
        workers: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBuckets => f.write_str("bucket count must be at least 1"),
            ConfigError::BucketCountOverflow { bucket_count } => write!(
                f,
                "bucket count {} exceeds the 32-bit output range (max {})",
                bucket_count,
                1u64 << 32
            ),
            ConfigError::ZeroWorkers => f.write_str("worker count must be at least 1"),
            ConfigError::SeedCountMismatch { seeds, workers } => write!(
                f,
                "seed count {} does not match worker count {}",
                seeds, workers
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returned when the requested worker pool could not be created.
///
/// A missing worker would silently corrupt the total-iteration invariant
/// that every downstream statistic depends on, so pool construction failure
/// aborts the whole run rather than degrading to fewer workers.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceError {

    /// Human-readable reason from the underlying pool builder.
    pub reason: String,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to create worker pool: {}", self.reason)
    }
}

impl std::error::Error for ResourceError {}

/// Aggregate error for an audit run.
///
/// Wraps the two setup failure classes. `From<T>` conversions allow `?`
/// from validation and pool construction while callers still match on a
/// single expressive type.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {

    /// The run was rejected before starting due to invalid configuration.
    Config(ConfigError),

    /// Worker-pool creation failed; the run was aborted with no output.
    Resource(ResourceError),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Config(e) => write!(f, "{e}"),
            HarnessError::Resource(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Config(e) => Some(e),
            HarnessError::Resource(e) => Some(e),
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self { HarnessError::Config(e) }
}

impl From<ResourceError> for HarnessError {
    fn from(e: ResourceError) -> Self { HarnessError::Resource(e) }
}

/// Convenient result alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
