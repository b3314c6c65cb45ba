//! Deterministic random number generation
//!
//! A dual-lane xorshift engine plus a generator that derives bounded
//! integers, floats, booleans and n-bit values from it.
//! NOT cryptographically secure.

mod checkpoint;
mod generator;
mod seed;
mod xorshift;

pub use checkpoint::{CheckpointError, EngineSnapshot};
pub use generator::{Rsu, RngError};
pub use seed::{FixedSeed, SeedSource, SystemSeed};
pub use xorshift::{XorShiftEngine, WARMUP_STEPS};
