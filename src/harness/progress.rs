//! Advisory progress reporting for long-running sweeps.
//!
//! A full audit run executes tens of billions of samples, so workers emit a
//! low-frequency progress signal. The signal is **advisory only**: it must
//! never affect results, ordering, or meaningfully block the sampling loop.
//!
//! ## Contract
//!
//! * Workers call [`Progress::record`] once every [`PROGRESS_STRIDE`]
//!   iterations and once at completion.
//! * Implementations may drop or coalesce signals (best-effort/lossy), but
//!   must not take locks the sampling loop would wait on.
//! * The core ships only the no-op [`SilentProgress`]; rendering to a
//!   console lives in the binary, outside the library.

use crate::harness::types::SampleCount;


/// Iterations between progress signals from one worker (`2^26`).
///
/// At typical generator throughput this is a signal every few tens of
/// milliseconds per worker — frequent enough for a live percentage, rare
/// enough to be invisible in the loop's cost.
pub const PROGRESS_STRIDE: SampleCount = 1 << 26;

/// Stride mask; a signal fires when `iteration & PROGRESS_MASK == 0`.
pub const PROGRESS_MASK: SampleCount = PROGRESS_STRIDE - 1;

/// Receiver for advisory per-worker progress signals.
///
/// Implementations are shared read-only across all workers and must be
/// `Sync`. Signals carry the worker index, the number of samples that
/// worker has completed, and its planned total.
pub trait Progress: Sync {
    /// Records that `worker` has completed `completed` of `planned` samples.
    fn record(&self, worker: usize, completed: SampleCount, planned: SampleCount);
}

/// Progress receiver that discards every signal.
///
/// The default for library callers that only want the final result.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    #[inline]
    fn record(&self, _worker: usize, _completed: SampleCount, _planned: SampleCount) {}
}
