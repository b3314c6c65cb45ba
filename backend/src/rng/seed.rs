//! Seed sources
//!
//! The engine itself is pure; environmental entropy enters only through a
//! [`SeedSource`] the caller hands in.

use std::time::{SystemTime, UNIX_EPOCH};

/// Something that can provide a 64-bit seed.
pub trait SeedSource {
    fn seed(&self) -> u64;

    /// Whether the same source always yields the same seed.
    fn is_deterministic(&self) -> bool {
        false
    }
}

/// A fixed, reproducible seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn seed(&self) -> u64 {
        self.0
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

/// Wall-clock microseconds XOR (process id << 16).
///
/// Non-deterministic. Never use this where a run must be reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSeed;

impl SeedSource for SystemSeed {
    fn seed(&self) -> u64 {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64;
        let pid = u64::from(std::process::id());
        micros ^ (pid << 16)
    }
}
