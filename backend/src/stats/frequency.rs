//! Frequency (0-1 equality) test
//!
//! Compares how many values fall below 0.5 against how many do not.

use log::warn;

use super::result::{StatisticalTestError, TestDetails, TestResult};

pub const FREQUENCY_TEST_NAME: &str = "Frequency Test (0-1 Equality)";

/// Maximum accepted imbalance, in percent of the sample size
pub const FREQUENCY_CRITICAL_PERCENT: f64 = 5.0;

pub fn frequency_test(values: &[f64]) -> TestResult {
    let n = values.len();
    if n == 0 {
        warn!("frequency test skipped: empty sample");
        return TestResult::not_run(
            FREQUENCY_TEST_NAME,
            FREQUENCY_CRITICAL_PERCENT,
            StatisticalTestError::EmptySample,
        );
    }

    let low = values.iter().filter(|&&v| v < 0.5).count() as u64;
    let high = n as u64 - low;
    let difference = low.abs_diff(high);
    let percent_difference = difference as f64 / n as f64 * 100.0;

    TestResult::evaluate(
        FREQUENCY_TEST_NAME,
        percent_difference,
        FREQUENCY_CRITICAL_PERCENT,
        TestDetails::Frequency {
            low_range_count: low,
            high_range_count: high,
            expected: n as f64 / 2.0,
            difference,
            percent_difference,
        },
    )
}
