//! Two-sided Kolmogorov-Smirnov test against U(0, 1)

use log::warn;

use super::result::{StatisticalTestError, TestDetails, TestResult};

pub const KS_TEST_NAME: &str = "Kolmogorov-Smirnov Test";

/// Fixed critical value used when `n <= 50`
pub const KS_SMALL_SAMPLE_CRITICAL_VALUE: f64 = 0.19;

/// Largest sample size served by the fixed critical value
pub const KS_SMALL_SAMPLE_LIMIT: usize = 50;

/// Critical value at α = 0.05
///
/// `1.36 / sqrt(n)` for `n > 50`, otherwise the fixed 0.19 approximation.
pub fn ks_critical_value(n: usize) -> f64 {
    if n > KS_SMALL_SAMPLE_LIMIT {
        1.36 / (n as f64).sqrt()
    } else {
        KS_SMALL_SAMPLE_CRITICAL_VALUE
    }
}

/// Run the KS test over `values`
///
/// The sample is copied and sorted; the caller's slice is left untouched.
pub fn kolmogorov_smirnov_test(values: &[f64]) -> TestResult {
    let n = values.len();
    let critical_value = ks_critical_value(n);
    if n == 0 {
        warn!("Kolmogorov-Smirnov test skipped: empty sample");
        return TestResult::not_run(
            KS_TEST_NAME,
            critical_value,
            StatisticalTestError::EmptySample,
        );
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let nf = n as f64;
    let mut d_plus = f64::NEG_INFINITY;
    let mut d_minus = f64::NEG_INFINITY;
    for (i, &x) in sorted.iter().enumerate() {
        d_plus = d_plus.max((i + 1) as f64 / nf - x);
        d_minus = d_minus.max(x - i as f64 / nf);
    }
    let d_statistic = d_plus.max(d_minus);

    TestResult::evaluate(
        KS_TEST_NAME,
        d_statistic,
        critical_value,
        TestDetails::KolmogorovSmirnov {
            d_statistic,
            d_plus,
            d_minus,
        },
    )
}
