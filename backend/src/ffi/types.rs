//! Type conversion utilities for FFI boundary
//!
//! Converts battery reports into Python dicts.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::battery::BatteryReport;
use crate::stats::{TestDetails, TestResult};

/// Convert a [`BatteryReport`] into a dict mirroring its fields
pub fn battery_report_to_py(py: Python<'_>, report: &BatteryReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("sample_size", report.sample_size)?;
    dict.set_item("total_tests", report.total_tests)?;
    dict.set_item("passed_tests", report.passed_tests)?;
    dict.set_item("all_passed", report.all_passed)?;
    dict.set_item("config_hash", &report.config_hash)?;

    let tests = PyList::empty_bound(py);
    for test in &report.tests {
        tests.append(test_result_to_py(py, test)?)?;
    }
    dict.set_item("tests", tests)?;

    Ok(dict.unbind())
}

/// Flatten a [`TestResult`] and its details into one dict
fn test_result_to_py<'py>(py: Python<'py>, test: &TestResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("test_name", test.test_name())?;
    dict.set_item("statistic", test.statistic())?;
    dict.set_item("critical_value", test.critical_value())?;
    dict.set_item("passed", test.passed())?;
    if let Some(error) = test.error() {
        dict.set_item("error", error.to_string())?;
    }

    match test.details() {
        TestDetails::ChiSquare {
            chi_square,
            degrees_of_freedom,
            observed_frequencies,
            expected_frequency,
        } => {
            dict.set_item("chi_square", chi_square)?;
            dict.set_item("degrees_of_freedom", degrees_of_freedom)?;
            dict.set_item("observed_frequencies", observed_frequencies.clone())?;
            dict.set_item("expected_frequency", expected_frequency)?;
        }
        TestDetails::Runs {
            runs,
            expected_runs,
            z_score,
            n1,
            n2,
        } => {
            dict.set_item("runs", runs)?;
            dict.set_item("expected_runs", expected_runs)?;
            dict.set_item("z_score", z_score)?;
            dict.set_item("n1", n1)?;
            dict.set_item("n2", n2)?;
        }
        TestDetails::Frequency {
            low_range_count,
            high_range_count,
            expected,
            difference,
            percent_difference,
        } => {
            dict.set_item("low_range_count", low_range_count)?;
            dict.set_item("high_range_count", high_range_count)?;
            dict.set_item("expected", expected)?;
            dict.set_item("difference", difference)?;
            dict.set_item("percent_difference", percent_difference)?;
        }
        TestDetails::KolmogorovSmirnov {
            d_statistic,
            d_plus,
            d_minus,
        } => {
            dict.set_item("d_statistic", d_statistic)?;
            dict.set_item("d_plus", d_plus)?;
            dict.set_item("d_minus", d_minus)?;
        }
        TestDetails::Autocorrelation {
            lag,
            autocorrelation,
        } => {
            dict.set_item("lag", lag)?;
            dict.set_item("autocorrelation", autocorrelation)?;
        }
        TestDetails::NotRun => {}
    }

    Ok(dict)
}
