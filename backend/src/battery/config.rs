//! Battery configuration and config hashing

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::BatteryError;
use crate::stats::DEFAULT_BINS;

/// Which tests the battery runs and with what parameters
///
/// The default (10 bins, lags 1 and 2) yields the standard six-test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryConfig {
    /// Number of equal-width bins for the chi-square test
    pub chi_square_bins: usize,

    /// One autocorrelation test is run per lag, in this order
    pub autocorrelation_lags: Vec<usize>,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            chi_square_bins: DEFAULT_BINS,
            autocorrelation_lags: vec![1, 2],
        }
    }
}

impl BatteryConfig {
    /// Number of results a run with this config produces
    pub fn total_tests(&self) -> usize {
        4 + self.autocorrelation_lags.len()
    }

    pub fn validate(&self) -> Result<(), BatteryError> {
        if self.chi_square_bins == 0 {
            return Err(BatteryError::InvalidConfig(
                "chi_square_bins must be at least 1".to_string(),
            ));
        }
        if self.autocorrelation_lags.is_empty() {
            return Err(BatteryError::InvalidConfig(
                "autocorrelation_lags must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compute deterministic SHA256 hash of a config
///
/// Uses canonical JSON serialization with sorted keys, so two reports can be
/// checked for comparable configurations.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, BatteryError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        BatteryError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        BatteryError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
