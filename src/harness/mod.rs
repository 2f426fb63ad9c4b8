//! # Harness Module
//!
//! Internal sampling-engine implementation.
//!
//! This module contains the core building blocks of the audit harness:
//! - Generator recurrence and output mapping
//! - Per-worker sampling loop and private accumulators
//! - Deterministic aggregation of worker results
//! - Parallel orchestration across worker threads
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod generator;
pub mod progress;
pub mod worker;
pub mod aggregate;
pub mod orchestrator;
