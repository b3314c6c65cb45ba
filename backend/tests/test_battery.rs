//! Battery Tests - Running All Statistical Tests Over One Sample
//!
//! Critical invariants tested:
//! - Completeness: every configured test runs, in order, regardless of outcomes
//! - Counting: passed_tests <= total_tests, all_passed iff equal
//! - Reproducibility: pinned verdicts for fixed seeds

use rsu_core::{
    compute_config_hash, generate_sample, run_battery, run_battery_with_config, BatteryConfig,
    BatteryError, BatteryReport, FixedSeed, SampleSummary, StatisticalTestError,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn verdicts(report: &BatteryReport) -> Vec<bool> {
    report.tests.iter().map(|t| t.passed()).collect()
}

fn names(report: &BatteryReport) -> Vec<&str> {
    report.tests.iter().map(|t| t.test_name()).collect()
}

// ============================================================================
// Completeness
// ============================================================================

#[test]
fn test_battery_runs_six_tests_in_order() {
    let sample = generate_sample(1_000, &FixedSeed(1));
    let report = run_battery(&sample);

    assert_eq!(report.sample_size, 1_000);
    assert_eq!(report.total_tests, 6);
    assert_eq!(
        names(&report),
        vec![
            "Chi-Square Test",
            "Runs Test",
            "Frequency Test (0-1 Equality)",
            "Kolmogorov-Smirnov Test",
            "Autocorrelation Test (lag=1)",
            "Autocorrelation Test (lag=2)",
        ]
    );
}

#[test]
fn test_battery_counts_are_consistent() {
    for seed in [1u64, 2, 3, 42, 2024] {
        let sample = generate_sample(500, &FixedSeed(seed));
        let report = run_battery(&sample);

        let passed = report.tests.iter().filter(|t| t.passed()).count();
        assert_eq!(report.passed_tests, passed);
        assert!(report.passed_tests <= report.total_tests);
        assert_eq!(report.all_passed, report.passed_tests == report.total_tests);
        assert_eq!(
            report.failed_tests(),
            report.total_tests - report.passed_tests
        );
    }
}

#[test]
fn test_every_verdict_matches_its_statistic() {
    let sample = generate_sample(2_000, &FixedSeed(17));
    let report = run_battery(&sample);

    for test in &report.tests {
        let expected = match test.statistic() {
            Some(statistic) => statistic.abs() < test.critical_value(),
            None => false,
        };
        assert_eq!(test.passed(), expected, "{}", test.test_name());
    }
}

#[test]
fn test_battery_continues_after_small_sample_errors() {
    // One value: autocorrelation cannot run at either lag.
    let report = run_battery(&[0.3]);

    assert_eq!(report.total_tests, 6);
    assert!(!report.all_passed);
    assert_eq!(
        report.tests[4].error(),
        Some(&StatisticalTestError::SampleTooSmall {
            lag: 1,
            sample_size: 1
        })
    );
    assert_eq!(
        report.tests[5].error(),
        Some(&StatisticalTestError::SampleTooSmall {
            lag: 2,
            sample_size: 1
        })
    );
}

#[test]
fn test_battery_on_empty_sample() {
    let report = run_battery(&[]);

    assert_eq!(report.sample_size, 0);
    assert_eq!(report.total_tests, 6);
    assert_eq!(report.passed_tests, 0);
    assert!(report.tests.iter().all(|t| t.error().is_some()));
}

// ============================================================================
// Pinned verdicts
// ============================================================================

#[test]
fn test_battery_seed_42_verdicts() {
    let sample = generate_sample(10_000, &FixedSeed(42));
    let report = run_battery(&sample);

    assert_eq!(
        verdicts(&report),
        vec![false, false, false, false, true, true]
    );
    assert_eq!(report.passed_tests, 2);
    assert!(!report.all_passed);
    assert_eq!(
        report.failed_test_names(),
        vec![
            "Chi-Square Test",
            "Runs Test",
            "Frequency Test (0-1 Equality)",
            "Kolmogorov-Smirnov Test",
        ]
    );
}

#[test]
fn test_battery_other_seed_verdicts() {
    let cases: [(u64, [bool; 6]); 3] = [
        (12345, [false, false, true, false, false, true]),
        (2024, [false, false, true, false, true, true]),
        (7, [false, false, false, false, false, true]),
    ];

    for (seed, expected) in cases {
        let sample = generate_sample(10_000, &FixedSeed(seed));
        let report = run_battery(&sample);
        assert_eq!(verdicts(&report), expected.to_vec(), "seed {}", seed);
    }
}

#[test]
fn test_battery_is_deterministic() {
    let a = run_battery(&generate_sample(2_000, &FixedSeed(9)));
    let b = run_battery(&generate_sample(2_000, &FixedSeed(9)));
    assert_eq!(a, b);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_default_config_matches_run_battery() {
    let sample = generate_sample(1_000, &FixedSeed(3));
    let default_run = run_battery(&sample);
    let configured = run_battery_with_config(&sample, &BatteryConfig::default()).unwrap();
    assert_eq!(default_run, configured);
}

#[test]
fn test_default_run_records_default_config_hash() {
    let report = run_battery(&generate_sample(100, &FixedSeed(5)));
    let expected = compute_config_hash(&BatteryConfig::default()).unwrap();

    assert_eq!(report.config_hash, expected);
    assert_eq!(report.config_hash.len(), 64);
}

#[test]
fn test_custom_lags_change_test_count() {
    let config = BatteryConfig {
        chi_square_bins: 5,
        autocorrelation_lags: vec![1, 2, 3, 4],
    };
    let sample = generate_sample(1_000, &FixedSeed(3));
    let report = run_battery_with_config(&sample, &config).unwrap();

    assert_eq!(report.total_tests, 8);
    assert_eq!(report.tests[0].critical_value(), 9.49);
    assert_eq!(report.tests[7].test_name(), "Autocorrelation Test (lag=4)");
    assert_eq!(report.config_hash, compute_config_hash(&config).unwrap());
}

#[test]
fn test_invalid_config_rejected() {
    let config = BatteryConfig {
        chi_square_bins: 0,
        ..BatteryConfig::default()
    };
    let err = run_battery_with_config(&[0.5], &config).unwrap_err();
    assert!(matches!(err, BatteryError::InvalidConfig(_)));
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_report_json_round_trip() {
    let report = run_battery(&generate_sample(300, &FixedSeed(11)));
    let json = report.to_json().unwrap();
    let parsed: BatteryReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.sample_size, report.sample_size);
    assert_eq!(parsed.passed_tests, report.passed_tests);
    assert_eq!(parsed.config_hash, report.config_hash);
    assert_eq!(names(&parsed), names(&report));
    assert_eq!(verdicts(&parsed), verdicts(&report));
}

#[test]
fn test_report_json_carries_error_field() {
    let report = run_battery(&[0.4]);
    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("SampleTooSmall"));
}

// ============================================================================
// Sample summary
// ============================================================================

#[test]
fn test_sample_summary_matches_frequency_counts() {
    let sample = generate_sample(10_000, &FixedSeed(42));
    let summary = SampleSummary::describe(&sample).unwrap();

    assert_eq!(summary.count, 10_000);
    assert_eq!(summary.below_half, 4680);
    assert_eq!(summary.at_or_above_half, 5320);
    assert_eq!(summary.balance_gap, 640);
    assert!(summary.min >= 0.0 && summary.max < 1.0);
}
