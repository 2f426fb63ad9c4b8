//! Report formatting for [`AggregateResult`].
//!
//! Output shape:
//!
//! ```text
//! expected count: 333333 per bucket
//!    333108 (-225)     333497 (+164)     333330 (-3)       333704 (+371)
//!    333188 (-145)     333173 (-160)
//! mean: 2.499862, expected 2.500000
//! std dev: 1.707764, expected 1.707825
//! worst bucket deviation: +0.1113%
//! ```
//!
//! Buckets print four per row with the signed difference from the expected
//! per-bucket count alongside each observed count.

use std::fmt::Write;

use crate::harness::aggregate::AggregateResult;


/// Buckets printed per table row.
const BUCKETS_PER_ROW: usize = 4;

/// Formats a magnitude with an SI prefix (`k`, `M`, `G`, `T`, `P`, `E`).
///
/// Values below 1000 are printed as-is without a prefix.
///
/// ## Example
/// ```
/// use uniformity::report::format_si;
///
/// assert_eq!(format_si(2_500_000_000.0), "2.50 G");
/// assert_eq!(format_si(640.0), "640");
/// ```
pub fn format_si(value: f64) -> String {
    const PREFIXES: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

    let mut scaled = value;
    let mut index = 0;
    while scaled.abs() >= 1000.0 && index < PREFIXES.len() - 1 {
        scaled /= 1000.0;
        index += 1;
    }

    if index == 0 {
        format!("{scaled:.0}")
    } else {
        format!("{:.2} {}", scaled, PREFIXES[index])
    }
}

/// Renders the full audit report for a completed run.
///
/// Pure string construction; the caller decides where it goes.
pub fn render_report(result: &AggregateResult) -> String {
    let buckets = result.total_histogram.len() as u64;
    let total: u64 = result.total_histogram.iter().sum();
    let expected_count = if buckets == 0 { 0 } else { total / buckets };

    let mut out = String::new();

    let _ = writeln!(out, "expected count: {expected_count} per bucket");
    for row in result.total_histogram.chunks(BUCKETS_PER_ROW) {
        for &count in row {
            let delta = count as i64 - expected_count as i64;
            let _ = write!(out, "   {count} ({delta:+})");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "mean: {:.6}, expected {:.6}",
        result.overall_mean, result.expected_mean
    );
    let _ = writeln!(
        out,
        "std dev: {:.6}, expected {:.6}",
        result.overall_std_dev, result.expected_std_dev
    );

    let worst = result
        .per_bucket_deviation
        .iter()
        .fold(0.0_f64, |acc, &d| if d.abs() > acc.abs() { d } else { acc });
    let _ = writeln!(out, "worst bucket deviation: {:+.4}%", worst * 100.0);

    out
}
