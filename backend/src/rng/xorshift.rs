//! Dual-lane xorshift bit-mixing engine
//!
//! Four 32-bit state words advanced as two independent xorshift128+ style
//! lanes. Every step emits one 32-bit word.
//!
//! # Algorithm
//!
//! Lane A holds `(s0, s1)` and lane B holds `(s2, s3)`. One step advances
//! both lanes:
//!
//! ```text
//! x = s0; y = s1
//! x ^= x << 23; x ^= x >> 17; x ^= y ^ (y >> 26)
//! (s0, s1) = (y, x)
//!
//! u = s2; v = s3
//! u ^= u << 19; u ^= u >> 13; u ^= v ^ (v >> 5)
//! (s2, s3) = (v, u)
//!
//! output = s1 + s0 (mod 2^32)
//! ```
//!
//! All arithmetic is on `u32`, so each word is implicitly masked to 32 bits.
//!
//! # Determinism
//!
//! Same seed → same sequence of outputs, for every seed including zero.

use serde::{Deserialize, Serialize};

/// Number of discarded steps performed at construction.
pub const WARMUP_STEPS: usize = 10;

const LCG_A_MUL: u64 = 1_103_515_245;
const LCG_A_INC: u64 = 12_345;
const LCG_B_MUL: u64 = 1_664_525;
const LCG_B_INC: u64 = 1_013_904_223;

/// Deterministic bit-mixing engine
///
/// # Example
/// ```
/// use rsu_core::XorShiftEngine;
///
/// let mut engine = XorShiftEngine::new(42);
/// assert_eq!(engine.step(), 1778407082);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShiftEngine {
    /// Internal state `(s0, s1, s2, s3)`
    state: [u32; 4],
}

impl XorShiftEngine {
    /// Create a new engine from a 64-bit seed and run the warm-up steps
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64). Zero is accepted.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: Self::split_seed(seed),
        };

        for _ in 0..WARMUP_STEPS {
            engine.step();
        }

        engine
    }

    /// Rebuild an engine from raw state words without warm-up.
    ///
    /// Only checkpoint restore goes through here.
    pub(crate) fn from_state(state: [u32; 4]) -> Self {
        Self { state }
    }

    fn split_seed(seed: u64) -> [u32; 4] {
        [
            seed as u32,
            (seed >> 32) as u32,
            seed.wrapping_mul(LCG_A_MUL).wrapping_add(LCG_A_INC) as u32,
            seed.wrapping_mul(LCG_B_MUL).wrapping_add(LCG_B_INC) as u32,
        ]
    }

    /// Advance both lanes once and return the 32-bit output
    ///
    /// This is the only operation that mutates the state.
    pub fn step(&mut self) -> u32 {
        let [s0, s1, s2, s3] = self.state;

        let lane_a = mix(s0, s1, 23, 17, 26);
        let lane_b = mix(s2, s3, 19, 13, 5);

        // Single assignment: no half-advanced state is ever visible.
        self.state = [s1, lane_a, s3, lane_b];

        lane_a.wrapping_add(s1)
    }

    /// Get current state words (for checkpointing)
    pub fn state(&self) -> [u32; 4] {
        self.state
    }
}

#[inline]
fn mix(x: u32, y: u32, a: u32, b: u32, c: u32) -> u32 {
    let mut x = x;
    x ^= x << a;
    x ^= x >> b;
    x ^ y ^ (y >> c)
}
