//! CLI front end for the uniformity audit harness.
//!
//! Glue only: argument parsing, seed acquisition, progress rendering, and
//! wall-clock timing. All statistics come from the library.

use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use clap::Parser;
use rand::rngs::OsRng;
use rand::RngCore;

use uniformity::report::{format_si, render_report};
use uniformity::{
    execute_with_progress, HarnessError, Progress, SampleConfig, SampleCount, Seed,
    SilentProgress,
};

/// Fallback seed when OS entropy is unavailable.
const FALLBACK_SEED: Seed = 12345;

/// Stride between derived per-worker seeds; odd, so all offsets are
/// distinct mod 2^64.
const SEED_STRIDE: Seed = 0x9E37_79B9_7F4A_7C15;

#[derive(Parser, Debug)]
#[command(
    name = "uniformity",
    version,
    about = "Statistical uniformity audit for the square-step PRNG"
)]
struct Cli {
    /// Number of output buckets to histogram
    #[arg(short, long, default_value_t = 6)]
    buckets: u64,

    /// Samples per worker
    #[arg(short, long, default_value_t = 1_000_000_000)]
    iterations: u64,

    /// Worker threads (default: available hardware parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Base seed for a reproducible run (default: OS entropy per worker)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Stderr progress renderer: per-worker counters folded into one global
/// completed count. Lossy by design — interleaved writes can clobber each
/// other, never the statistics.
struct StderrProgress {
    total: SampleCount,
    per_worker: Vec<AtomicU64>,
    completed: AtomicU64,
}

impl StderrProgress {
    fn new(workers: usize, total: SampleCount) -> Self {
        Self {
            total,
            per_worker: (0..workers).map(|_| AtomicU64::new(0)).collect(),
            completed: AtomicU64::new(0),
        }
    }
}

impl Progress for StderrProgress {
    fn record(&self, worker: usize, completed: SampleCount, _planned: SampleCount) {
        let previous = self.per_worker[worker].swap(completed, Ordering::Relaxed);
        let delta = completed - previous;
        let done = self.completed.fetch_add(delta, Ordering::Relaxed) + delta;
        let percent = if self.total == 0 { 100 } else { done * 100 / self.total };
        eprint!("\r{} of {} ({}%)", done, self.total, percent);
    }
}

/// One seed per worker: OS entropy by default, with a fixed fallback when
/// entropy is unavailable; a fixed base seed yields distinct per-worker
/// seeds via an odd stride.
fn gather_seeds(workers: usize, base: Option<Seed>) -> Vec<Seed> {
    match base {
        Some(base) => (0..workers)
            .map(|i| base.wrapping_add(SEED_STRIDE.wrapping_mul(i as u64)))
            .collect(),
        None => (0..workers)
            .map(|i| {
                let mut bytes = [0u8; 8];
                match OsRng.try_fill_bytes(&mut bytes) {
                    Ok(()) => Seed::from_le_bytes(bytes),
                    Err(_) => FALLBACK_SEED.wrapping_add(SEED_STRIDE.wrapping_mul(i as u64)),
                }
            })
            .collect(),
    }
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let workers = cli
        .workers
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });

    let config = SampleConfig::new(cli.buckets, cli.iterations, workers)?;
    let seeds = gather_seeds(workers, cli.seed);

    let start = Instant::now();
    let result = if cli.quiet {
        execute_with_progress(&config, &seeds, &SilentProgress)?
    } else {
        let progress = StderrProgress::new(workers, config.total_samples());
        let result = execute_with_progress(&config, &seeds, &progress)?;
        eprintln!();
        result
    };
    let elapsed = start.elapsed().as_secs_f64().max(f64::MIN_POSITIVE);

    print!("{}", render_report(&result));

    let total = config.total_samples() as f64;
    println!(
        "{} samples in {:.2}s ({} samples/s)",
        format_si(total),
        elapsed,
        format_si(total / elapsed)
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
