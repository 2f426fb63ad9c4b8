use uniformity::report::{format_si, render_report};
use uniformity::{merge, SampleConfig, WorkerResult};

#[test]
fn si_prefixes_scale_by_thousands() {
    assert_eq!(format_si(0.0), "0");
    assert_eq!(format_si(999.0), "999");
    assert_eq!(format_si(1_000.0), "1.00 k");
    assert_eq!(format_si(2_500_000_000.0), "2.50 G");
    assert_eq!(format_si(10_000_000_000.0), "10.00 G");
    assert_eq!(format_si(-1_500.0), "-1.50 k");
}

#[test]
fn report_shows_counts_deltas_and_moments() {
    let config = SampleConfig::new(4, 8, 1).unwrap();
    let worker = WorkerResult {
        histogram: vec![2, 2, 2, 2],
        mean: 1.5,
        sum_squared_deviation: 1.25,
    };
    let report = render_report(&merge(&[worker], &config));

    assert!(report.contains("expected count: 2 per bucket"));
    assert!(report.contains("2 (+0)"));
    assert!(report.contains("mean: 1.500000, expected 1.500000"));
    assert!(report.contains("std dev: 1.118034, expected 1.118034"));
    assert!(report.contains("worst bucket deviation: +0.0000%"));
}

#[test]
fn report_flags_the_worst_bucket() {
    let config = SampleConfig::new(4, 8, 1).unwrap();
    let worker = WorkerResult {
        histogram: vec![4, 2, 1, 1],
        mean: 1.0,
        sum_squared_deviation: 1.0,
    };
    let report = render_report(&merge(&[worker], &config));

    // Bucket 0 holds twice its expected share: deviation +100%.
    assert!(report.contains("4 (+2)"));
    assert!(report.contains("worst bucket deviation: +100.0000%"));
}

#[test]
fn report_wraps_rows_at_four_buckets() {
    let config = SampleConfig::new(6, 6, 1).unwrap();
    let worker = WorkerResult {
        histogram: vec![1; 6],
        mean: 2.5,
        sum_squared_deviation: 0.0,
    };
    let report = render_report(&merge(&[worker], &config));

    let table_rows = report
        .lines()
        .filter(|line| line.starts_with("   "))
        .count();
    assert_eq!(table_rows, 2);
}
