//! Lag-k autocorrelation test

use log::warn;

use super::result::{StatisticalTestError, TestDetails, TestResult};

/// Accepted |autocorrelation| bound at α = 0.05 (approximate)
pub const AUTOCORRELATION_CRITICAL_VALUE: f64 = 0.1;

pub fn autocorrelation_test_name(lag: usize) -> String {
    format!("Autocorrelation Test (lag={})", lag)
}

/// Run the autocorrelation test at `lag` over `values`
///
/// Needs more than `lag` values; otherwise the result carries
/// [`StatisticalTestError::SampleTooSmall`]. A zero denominator (constant
/// sample) yields an autocorrelation of 0.
pub fn autocorrelation_test(values: &[f64], lag: usize) -> TestResult {
    let n = values.len();
    let test_name = autocorrelation_test_name(lag);
    if n <= lag {
        warn!(
            "autocorrelation test skipped: {} values for lag {}",
            n, lag
        );
        return TestResult::not_run(
            test_name,
            AUTOCORRELATION_CRITICAL_VALUE,
            StatisticalTestError::SampleTooSmall {
                lag,
                sample_size: n,
            },
        );
    }

    let mean = values.iter().sum::<f64>() / n as f64;

    let numerator: f64 = values
        .iter()
        .zip(&values[lag..])
        .map(|(&a, &b)| (a - mean) * (b - mean))
        .sum();
    let denominator: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();

    let autocorrelation = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };

    TestResult::evaluate(
        test_name,
        autocorrelation,
        AUTOCORRELATION_CRITICAL_VALUE,
        TestDetails::Autocorrelation {
            lag,
            autocorrelation,
        },
    )
}
