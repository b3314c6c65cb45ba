//! Statistical tests for uniform [0, 1) samples
//!
//! Each test is a pure function over a read-only sample and returns a
//! [`TestResult`]. Degenerate inputs resolve to defined values or to a
//! non-passing result carrying a [`StatisticalTestError`]; no test panics
//! on sample contents.
//!
//! # Tests
//!
//! - **chi_square**: bin counts vs uniform expectation
//! - **runs**: runs above/below the median
//! - **frequency**: balance of values below and above 0.5
//! - **kolmogorov_smirnov**: max deviation of the empirical CDF
//! - **autocorrelation**: lag-k serial correlation

pub mod autocorrelation;
pub mod chi_square;
pub mod frequency;
pub mod kolmogorov_smirnov;
pub mod result;
pub mod runs;

pub use autocorrelation::{autocorrelation_test, AUTOCORRELATION_CRITICAL_VALUE};
pub use chi_square::{chi_square_critical_value, chi_square_test, DEFAULT_BINS};
pub use frequency::{frequency_test, FREQUENCY_CRITICAL_PERCENT};
pub use kolmogorov_smirnov::{ks_critical_value, kolmogorov_smirnov_test};
pub use result::{StatisticalTestError, TestDetails, TestResult};
pub use runs::{runs_test, RUNS_CRITICAL_VALUE};
