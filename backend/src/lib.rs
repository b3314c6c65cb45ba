//! RSU Core - Random Number Generator and Statistical Test Battery
//!
//! Deterministic pseudorandom generation plus a battery of uniformity and
//! independence tests over generated samples.
//!
//! # Architecture
//!
//! - **rng**: Bit-mixing engine, derived-value generator, seed sources, checkpoints
//! - **stats**: The five statistical tests and their result model
//! - **battery**: Runs every test over one sample and aggregates verdicts
//! - **sample**: Sample generation and descriptive summary
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence, for every seed including zero
//! 2. Engine state changes only through its step function
//! 3. Statistical tests are pure and never mutate the sample
//!
//! # Example
//! ```
//! use rsu_core::{run_battery, Rsu};
//!
//! let mut rng = Rsu::from_seed(42);
//! let sample = rng.sample(1_000);
//! let report = run_battery(&sample);
//! assert_eq!(report.total_tests, 6);
//! ```

// Module declarations
pub mod battery;
pub mod rng;
pub mod sample;
pub mod stats;

// Re-exports for convenience
pub use battery::{
    compute_config_hash, run_battery, run_battery_with_config, BatteryConfig, BatteryError,
    BatteryReport,
};
pub use rng::{
    CheckpointError, EngineSnapshot, FixedSeed, RngError, Rsu, SeedSource, SystemSeed,
    XorShiftEngine,
};
pub use sample::{generate_sample, SampleSummary};
pub use stats::{StatisticalTestError, TestDetails, TestResult};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn rsu_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::run_battery, m)?)?;
    Ok(())
}
