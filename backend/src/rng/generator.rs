//! Derived-value generator
//!
//! Wraps one [`XorShiftEngine`] and turns its raw 32-bit words into bounded
//! integers, floats in [0, 1), booleans and n-bit values.
//!
//! Every call advances the engine exactly once, except [`Rsu::next_int`]
//! with a bounded range, which advances once per rejected draw plus once
//! for the accepted one (and not at all for an empty range).

use log::debug;
use thiserror::Error;

use super::checkpoint::{CheckpointError, EngineSnapshot};
use super::seed::{FixedSeed, SeedSource, SystemSeed};
use super::xorshift::XorShiftEngine;

/// Number of distinct values one raw draw can take.
const RAW_SPAN: i128 = 1 << 32;

/// Scale for mapping a raw word onto [0, 1).
const FLOAT_SCALE: f64 = 4_294_967_296.0;

/// Argument validation errors from the generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("bit count must be between 1 and 32, got {0}")]
    InvalidBitCount(u32),

    #[error("range [{min}, {max}) spans more than 2^32 values")]
    RangeTooWide { min: i64, max: i64 },
}

/// Random number generator over the dual-lane xorshift engine
///
/// # Example
/// ```
/// use rsu_core::Rsu;
///
/// let mut rng = Rsu::from_seed(42);
/// let die = rng.next_int(1, Some(7)).unwrap();
/// assert!((1..7).contains(&die));
///
/// let p = rng.next_float();
/// assert!(p >= 0.0 && p < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsu {
    engine: XorShiftEngine,
}

impl Rsu {
    /// Create a generator from an optional seed
    ///
    /// `None` falls back to [`SystemSeed`], which is not reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_source(&FixedSeed(seed)),
            None => Self::from_source(&SystemSeed),
        }
    }

    /// Create a generator from an explicit seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            engine: XorShiftEngine::new(seed),
        }
    }

    /// Create a generator from any seed source
    pub fn from_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        if source.is_deterministic() {
            debug!("creating generator from deterministic seed source");
        } else {
            debug!("creating generator from environmental seed source");
        }
        Self::from_seed(source.seed())
    }

    /// Wrap an already-built engine
    pub fn from_engine(engine: XorShiftEngine) -> Self {
        Self { engine }
    }

    /// One raw engine output in [0, 2^32 - 1]
    pub fn next_raw(&mut self) -> u32 {
        self.engine.step()
    }

    /// Integer in `[min, max)` without modulo bias
    ///
    /// With `max == None` this is [`Rsu::next_raw`] widened to `i64` and
    /// `min` is ignored. A range of zero or less returns `min` without
    /// touching the engine.
    ///
    /// # Errors
    /// [`RngError::RangeTooWide`] if `max - min` exceeds 2^32.
    pub fn next_int(&mut self, min: i64, max: Option<i64>) -> Result<i64, RngError> {
        let Some(max) = max else {
            return Ok(i64::from(self.next_raw()));
        };

        let range = i128::from(max) - i128::from(min);
        if range <= 0 {
            return Ok(min);
        }
        if range > RAW_SPAN {
            return Err(RngError::RangeTooWide { min, max });
        }
        if range == RAW_SPAN {
            // Every raw word maps to a distinct offset.
            return Ok(min + i64::from(self.next_raw()));
        }

        let range = range as u64;
        let threshold = (u64::from(u32::MAX) / range) * range;

        loop {
            let value = u64::from(self.next_raw());
            if value < threshold {
                return Ok(min + (value % range) as i64);
            }
        }
    }

    /// Float in [0.0, 1.0) with 32 bits of precision
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_raw()) / FLOAT_SCALE
    }

    /// Least-significant bit of one raw draw
    pub fn next_bool(&mut self) -> bool {
        self.next_raw() & 1 == 1
    }

    /// Raw draw masked to its low `n_bits` bits
    ///
    /// # Errors
    /// [`RngError::InvalidBitCount`] unless `1 <= n_bits <= 32`. The engine
    /// is not advanced on error.
    pub fn next_bits(&mut self, n_bits: u32) -> Result<u32, RngError> {
        if n_bits == 0 || n_bits > 32 {
            return Err(RngError::InvalidBitCount(n_bits));
        }

        let mask = if n_bits == 32 {
            u32::MAX
        } else {
            (1u32 << n_bits) - 1
        };
        Ok(self.next_raw() & mask)
    }

    /// Draw `n` floats in order
    pub fn sample(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_float()).collect()
    }

    /// Capture the engine state
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Build a new generator that continues from a snapshot
    pub fn restore(snapshot: &EngineSnapshot) -> Result<Self, CheckpointError> {
        Ok(Self::from_engine(XorShiftEngine::restore(snapshot)?))
    }

    /// Borrow the underlying engine
    pub fn engine(&self) -> &XorShiftEngine {
        &self.engine
    }
}
