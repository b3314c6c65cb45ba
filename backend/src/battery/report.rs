//! Battery report

use serde::{Deserialize, Serialize};

use super::BatteryError;
use crate::stats::TestResult;

/// Summary of one battery run over one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReport {
    pub sample_size: usize,

    /// Results in invocation order
    pub tests: Vec<TestResult>,

    pub total_tests: usize,

    pub passed_tests: usize,

    /// `passed_tests == total_tests`
    pub all_passed: bool,

    /// SHA-256 of the configuration the battery ran with
    pub config_hash: String,
}

impl BatteryReport {
    pub(crate) fn new(sample_size: usize, tests: Vec<TestResult>, config_hash: String) -> Self {
        let total_tests = tests.len();
        let passed_tests = tests.iter().filter(|t| t.passed()).count();
        Self {
            sample_size,
            tests,
            total_tests,
            passed_tests,
            all_passed: passed_tests == total_tests,
            config_hash,
        }
    }

    pub fn failed_tests(&self) -> usize {
        self.total_tests - self.passed_tests
    }

    /// Names of the tests that did not pass, in run order
    pub fn failed_test_names(&self) -> Vec<&str> {
        self.tests
            .iter()
            .filter(|t| !t.passed())
            .map(|t| t.test_name())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, BatteryError> {
        serde_json::to_string(self).map_err(|e| BatteryError::Serialization(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, BatteryError> {
        serde_json::to_string_pretty(self).map_err(|e| BatteryError::Serialization(e.to_string()))
    }
}
