//! Test battery
//!
//! Runs every statistical test over one sample and aggregates the verdicts.
//! No test's outcome affects whether later tests run.

mod config;
mod report;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::stats::{
    autocorrelation_test, chi_square_test, frequency_test, kolmogorov_smirnov_test, runs_test,
    TestResult,
};

pub use config::{compute_config_hash, BatteryConfig};
pub use report::BatteryReport;

/// Errors from configuring or exporting a battery run
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatteryError {
    #[error("Invalid battery config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Run the default six-test battery
///
/// Chi-square (10 bins), runs, frequency, Kolmogorov-Smirnov, then
/// autocorrelation at lags 1 and 2.
pub fn run_battery(values: &[f64]) -> BatteryReport {
    let config = BatteryConfig::default();
    // Only integers go into the default config, so hashing it cannot fail.
    let config_hash = compute_config_hash(&config).unwrap_or_else(|e| {
        warn!("default battery config could not be hashed: {}", e);
        String::new()
    });
    run_validated(values, &config, config_hash)
}

/// Run the battery with a custom configuration
pub fn run_battery_with_config(
    values: &[f64],
    config: &BatteryConfig,
) -> Result<BatteryReport, BatteryError> {
    config.validate()?;
    let config_hash = compute_config_hash(config)?;
    Ok(run_validated(values, config, config_hash))
}

fn run_validated(values: &[f64], config: &BatteryConfig, config_hash: String) -> BatteryReport {
    let mut tests: Vec<TestResult> = Vec::with_capacity(config.total_tests());

    tests.push(chi_square_test(values, config.chi_square_bins));
    tests.push(runs_test(values));
    tests.push(frequency_test(values));
    tests.push(kolmogorov_smirnov_test(values));
    for &lag in &config.autocorrelation_lags {
        tests.push(autocorrelation_test(values, lag));
    }

    for test in &tests {
        trace!(
            "{}: statistic={:?} critical={} passed={}",
            test.test_name(),
            test.statistic(),
            test.critical_value(),
            test.passed()
        );
    }

    let report = BatteryReport::new(values.len(), tests, config_hash);
    debug!(
        "battery over {} values: {}/{} passed",
        report.sample_size, report.passed_tests, report.total_tests
    );
    report
}
