//! Sample generation and descriptive summary

use serde::{Deserialize, Serialize};

use crate::rng::{Rsu, SeedSource};

/// Draw `n` floats from a fresh generator seeded by `source`
///
/// # Example
/// ```
/// use rsu_core::{generate_sample, FixedSeed};
///
/// let a = generate_sample(100, &FixedSeed(7));
/// let b = generate_sample(100, &FixedSeed(7));
/// assert_eq!(a, b);
/// ```
pub fn generate_sample<S: SeedSource + ?Sized>(n: usize, source: &S) -> Vec<f64> {
    Rsu::from_source(source).sample(n)
}

/// Basic shape of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Values in [0, 0.5)
    pub below_half: usize,
    /// Values in [0.5, 1)
    pub at_or_above_half: usize,
    /// `|below_half - at_or_above_half|`, ideally 0
    pub balance_gap: usize,
}

impl SampleSummary {
    /// Summarize `values`; `None` for an empty sample
    pub fn describe(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let below_half = values.iter().filter(|&&v| v < 0.5).count();
        let at_or_above_half = count - below_half;

        Some(Self {
            count,
            mean,
            min,
            max,
            below_half,
            at_or_above_half,
            balance_gap: below_half.abs_diff(at_or_above_half),
        })
    }

    /// Percentage of values below 0.5
    pub fn below_half_percent(&self) -> f64 {
        self.below_half as f64 / self.count as f64 * 100.0
    }
}
