//! Wald-Wolfowitz runs test around the median 0.5

use log::warn;

use super::result::{StatisticalTestError, TestDetails, TestResult};

pub const RUNS_TEST_NAME: &str = "Runs Test";

/// Two-tailed z critical value at α = 0.05
pub const RUNS_CRITICAL_VALUE: f64 = 1.96;

const MEDIAN: f64 = 0.5;

/// Run the runs test over `values`
///
/// Values `>= 0.5` are labeled `+`, the rest `-`. A zero variance (one of
/// the labels is absent) resolves to `z = 0`.
pub fn runs_test(values: &[f64]) -> TestResult {
    if values.is_empty() {
        warn!("runs test skipped: empty sample");
        return TestResult::not_run(
            RUNS_TEST_NAME,
            RUNS_CRITICAL_VALUE,
            StatisticalTestError::EmptySample,
        );
    }

    let mut runs: u64 = 1;
    let mut n1: u64 = 0;
    let mut previous_above = values[0] >= MEDIAN;
    for (i, &value) in values.iter().enumerate() {
        let above = value >= MEDIAN;
        if above {
            n1 += 1;
        }
        if i > 0 && above != previous_above {
            runs += 1;
        }
        previous_above = above;
    }
    let n2 = values.len() as u64 - n1;

    let (n1f, n2f) = (n1 as f64, n2 as f64);
    let total = n1f + n2f;
    let product = 2.0 * n1f * n2f;

    let expected_runs = product / total + 1.0;
    let variance = if n1 == 0 || n2 == 0 {
        0.0
    } else {
        product * (product - n1f - n2f) / (total * total * (total - 1.0))
    };

    let z_score = if variance == 0.0 {
        0.0
    } else {
        (runs as f64 - expected_runs) / variance.sqrt()
    };

    TestResult::evaluate(
        RUNS_TEST_NAME,
        z_score,
        RUNS_CRITICAL_VALUE,
        TestDetails::Runs {
            runs,
            expected_runs,
            z_score,
            n1,
            n2,
        },
    )
}
