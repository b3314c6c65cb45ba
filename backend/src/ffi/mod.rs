//! PyO3 bindings
//!
//! Exposes the generator and the test battery to Python. Only compiled with
//! the `pyo3` feature.

pub mod generator;
pub mod types;
