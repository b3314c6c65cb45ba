//! Chi-square goodness-of-fit test
//!
//! Partitions [0, 1) into equal-width bins and compares observed counts to
//! the uniform expectation `n / bins`.

use log::warn;

use super::result::{StatisticalTestError, TestDetails, TestResult};

pub const CHI_SQUARE_TEST_NAME: &str = "Chi-Square Test";

/// Default number of bins
pub const DEFAULT_BINS: usize = 10;

/// Critical value at α = 0.05 for the given bin count
///
/// Table lookup: 16.92 (df = 9) for 10 bins, 9.49 (df = 4) for 5 bins,
/// 3.84 (df = 1) for anything else.
pub fn chi_square_critical_value(bins: usize) -> f64 {
    match bins {
        10 => 16.92,
        5 => 9.49,
        _ => 3.84,
    }
}

/// Run the chi-square test over `values`
///
/// Zero bins yields a non-passing result carrying
/// [`StatisticalTestError::InvalidBinCount`].
pub fn chi_square_test(values: &[f64], bins: usize) -> TestResult {
    let critical_value = chi_square_critical_value(bins);
    if bins == 0 {
        warn!("chi-square test skipped: zero bins");
        return TestResult::not_run(
            CHI_SQUARE_TEST_NAME,
            critical_value,
            StatisticalTestError::InvalidBinCount(bins),
        );
    }

    let n = values.len();
    if n == 0 {
        warn!("chi-square test skipped: empty sample");
        return TestResult::not_run(
            CHI_SQUARE_TEST_NAME,
            critical_value,
            StatisticalTestError::EmptySample,
        );
    }

    let mut observed = vec![0u64; bins];
    for &value in values {
        observed[bin_index(value, bins)] += 1;
    }

    let expected_frequency = n as f64 / bins as f64;
    let chi_square: f64 = observed
        .iter()
        .map(|&obs| {
            let diff = obs as f64 - expected_frequency;
            diff * diff / expected_frequency
        })
        .sum();

    TestResult::evaluate(
        CHI_SQUARE_TEST_NAME,
        chi_square,
        critical_value,
        TestDetails::ChiSquare {
            chi_square,
            degrees_of_freedom: bins - 1,
            observed_frequencies: observed,
            expected_frequency,
        },
    )
}

/// `min(floor(v * bins), bins - 1)`
///
/// Values at or above 1.0 land in the last bin; negatives in the first.
fn bin_index(value: f64, bins: usize) -> usize {
    let scaled = (value * bins as f64).floor();
    if scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(bins - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_index_clamps_one() {
        assert_eq!(bin_index(1.0, 10), 9);
        assert_eq!(bin_index(0.999_999, 10), 9);
        assert_eq!(bin_index(0.0, 10), 0);
        assert_eq!(bin_index(0.1, 10), 1);
    }

    #[test]
    fn test_critical_value_table() {
        assert_eq!(chi_square_critical_value(10), 16.92);
        assert_eq!(chi_square_critical_value(5), 9.49);
        assert_eq!(chi_square_critical_value(2), 3.84);
        assert_eq!(chi_square_critical_value(20), 3.84);
    }

    #[test]
    fn test_zero_bins_is_not_run() {
        let result = chi_square_test(&[0.5], 0);
        assert!(!result.passed());
        assert!(result.statistic().is_none());
        assert_eq!(
            result.error(),
            Some(&StatisticalTestError::InvalidBinCount(0))
        );
    }
}
