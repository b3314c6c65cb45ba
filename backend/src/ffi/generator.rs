//! PyO3 wrapper for the generator and battery
//!
//! This module provides the Python interface to [`Rsu`] and
//! [`run_battery`](crate::battery::run_battery).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::battery_report_to_py;
use crate::battery;
use crate::rng::{Rsu, RngError};

fn rng_error_to_py(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for [`Rsu`]
///
/// # Example (from Python)
///
/// ```python
/// from rsu_core import Generator, run_battery
///
/// gen = Generator(seed=42)
/// values = gen.sample(10_000)
/// report = run_battery(values)
/// print(f"{report['passed_tests']}/{report['total_tests']} passed")
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Rsu,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator; without a seed the clock and PID are used
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        PyGenerator {
            inner: Rsu::new(seed),
        }
    }

    fn next_raw(&mut self) -> u32 {
        self.inner.next_raw()
    }

    /// Integer in `[min, max)`, or a raw 32-bit value when `max` is None
    ///
    /// # Errors
    ///
    /// Raises ValueError if the range spans more than 2^32 values
    #[pyo3(signature = (min=0, max=None))]
    fn next_int(&mut self, min: i64, max: Option<i64>) -> PyResult<i64> {
        self.inner.next_int(min, max).map_err(rng_error_to_py)
    }

    fn next_float(&mut self) -> f64 {
        self.inner.next_float()
    }

    fn next_bool(&mut self) -> bool {
        self.inner.next_bool()
    }

    /// # Errors
    ///
    /// Raises ValueError unless `1 <= n_bits <= 32`
    fn next_bits(&mut self, n_bits: u32) -> PyResult<u32> {
        self.inner.next_bits(n_bits).map_err(rng_error_to_py)
    }

    /// Draw `n` floats in [0, 1)
    fn sample(&mut self, n: usize) -> Vec<f64> {
        self.inner.sample(n)
    }
}

/// Run the six-test battery and return the report as a dict
#[pyfunction]
pub fn run_battery(py: Python<'_>, values: Vec<f64>) -> PyResult<Py<PyDict>> {
    let report = battery::run_battery(&values);
    battery_report_to_py(py, &report)
}
