//! Test result model
//!
//! Every statistical test returns a [`TestResult`]. The verdict is always
//! `|statistic| < critical_value`; a result with no statistic (the test
//! could not run on the sample) never passes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a test could not compute its statistic
///
/// These are carried inside a [`TestResult`], never returned as `Err`, so a
/// battery run always completes.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticalTestError {
    #[error("Sample size too small: {sample_size} values for lag {lag}")]
    SampleTooSmall { lag: usize, sample_size: usize },

    #[error("Sample is empty")]
    EmptySample,

    #[error("Bin count must be at least 1, got {0}")]
    InvalidBinCount(usize),
}

/// Test-specific auxiliary values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestDetails {
    ChiSquare {
        chi_square: f64,
        degrees_of_freedom: usize,
        observed_frequencies: Vec<u64>,
        expected_frequency: f64,
    },
    Runs {
        runs: u64,
        expected_runs: f64,
        z_score: f64,
        n1: u64,
        n2: u64,
    },
    Frequency {
        low_range_count: u64,
        high_range_count: u64,
        expected: f64,
        difference: u64,
        percent_difference: f64,
    },
    KolmogorovSmirnov {
        d_statistic: f64,
        d_plus: f64,
        d_minus: f64,
    },
    Autocorrelation {
        lag: usize,
        autocorrelation: f64,
    },
    /// The test did not run; see [`TestResult::error`]
    NotRun,
}

/// Outcome of one statistical test
///
/// Fields are read-only once built so the verdict always matches the
/// statistic it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Human-readable test name
    test_name: String,

    /// Primary statistic compared against the critical value
    statistic: Option<f64>,

    /// Acceptance threshold at α = 0.05
    critical_value: f64,

    /// `|statistic| < critical_value`
    passed: bool,

    details: TestDetails,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<StatisticalTestError>,
}

impl TestResult {
    /// Build a result and derive its verdict from the statistic
    pub fn evaluate(
        test_name: impl Into<String>,
        statistic: f64,
        critical_value: f64,
        details: TestDetails,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            statistic: Some(statistic),
            critical_value,
            passed: statistic.abs() < critical_value,
            details,
            error: None,
        }
    }

    /// Build a non-passing result for a test that could not run
    pub fn not_run(
        test_name: impl Into<String>,
        critical_value: f64,
        error: StatisticalTestError,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            statistic: None,
            critical_value,
            passed: false,
            details: TestDetails::NotRun,
            error: Some(error),
        }
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// `None` when the test could not run
    pub fn statistic(&self) -> Option<f64> {
        self.statistic
    }

    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn details(&self) -> &TestDetails {
        &self.details
    }

    pub fn error(&self) -> Option<&StatisticalTestError> {
        self.error.as_ref()
    }
}
