use uniformity::{execute, SampleConfig};

// Ten million samples over six buckets: binomial noise per bucket is about
// 0.07% relative, so a 1% band is a very wide net — a failure here means
// the generator, the mapping, or the accumulators are actually broken.
#[test]
fn six_buckets_converge_within_one_percent() {
    let config = SampleConfig::new(6, 10_000_000, 1).unwrap();
    let result = execute(&config, &[0x9E37_79B9_7F4A_7C15]).unwrap();

    for (bucket, &deviation) in result.per_bucket_deviation.iter().enumerate() {
        assert!(
            deviation.abs() < 0.01,
            "bucket {} deviates {:+.4}% from uniform",
            bucket,
            deviation * 100.0
        );
    }

    assert!(
        (result.overall_mean - result.expected_mean).abs() < 0.01,
        "observed mean {} too far from expected {}",
        result.overall_mean,
        result.expected_mean
    );
    assert!(
        (result.overall_std_dev - result.expected_std_dev).abs() < 0.01,
        "observed std dev {} too far from expected {}",
        result.overall_std_dev,
        result.expected_std_dev
    );
}

// The same convergence must hold when the samples are split across workers;
// merging cannot leak samples or double-count.
#[test]
fn parallel_split_converges_like_a_single_worker() {
    let config = SampleConfig::new(6, 2_500_000, 4).unwrap();
    let result = execute(&config, &[101, 202, 303, 404]).unwrap();

    assert_eq!(result.total_histogram.iter().sum::<u64>(), 10_000_000);
    for &deviation in &result.per_bucket_deviation {
        assert!(deviation.abs() < 0.01);
    }
    assert!((result.overall_mean - result.expected_mean).abs() < 0.01);
}
