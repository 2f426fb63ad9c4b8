//! # Uniformity
//!
//! Parallel statistical audit harness for a square-step pseudo-random
//! number generator.
//!
//! The crate drives a small 64-bit PRNG for very large sample counts across
//! independent worker threads, builds a histogram over its bounded output
//! range, and compares the observed distribution (count per bucket, mean,
//! standard deviation) against the closed-form values of a discrete uniform
//! distribution.
//!
//! ## Design Goals
//! - Zero shared mutable state in the sampling hot loop
//! - Deterministic aggregation, independent of worker completion order
//! - Parallel CPU execution scaled to the configured worker count
//! - Structured results; formatting and I/O stay at the edges
//!
//! The library returns an [`AggregateResult`]; the companion binary layers
//! seeding, progress output, and report rendering on top of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod harness;
pub mod report;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

// Core sampling types

pub use harness::types::{
    SampleConfig,
    Seed,
    BucketIndex,
    SampleCount,
    MAX_BUCKET_COUNT,
};

pub use harness::generator::SquareStep;

pub use harness::worker::{
    WorkerResult,
    run_worker,
};

pub use harness::aggregate::{
    AggregateResult,
    merge,
    expected_mean,
    expected_std_dev,
};

pub use harness::orchestrator::{
    execute,
    execute_with_progress,
};

pub use harness::progress::{
    Progress,
    SilentProgress,
    PROGRESS_STRIDE,
};

pub use harness::error::{
    HarnessResult,
    HarnessError,
    ConfigError,
    ResourceError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude (Optional but recommended)
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used harness types.
///
/// Import with:
/// ```rust
/// use uniformity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        SampleConfig,
        AggregateResult,
        WorkerResult,
        SquareStep,
        execute,
        execute_with_progress,
        merge,
        HarnessError,
        HarnessResult,
    };
}
