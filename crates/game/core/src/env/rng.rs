//! Roll sources for probabilistic combat checks.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed (or the same
//! scripted sequence) they produce the same rolls. Hit checks and critical
//! checks consume one roll each, in that order.

/// Source of uniform random rolls.
pub trait RollSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw a uniform value in `[0, 1)`.
    ///
    /// Uses the top 24 bits so every result is exactly representable as `f32`
    /// and `1.0` can never be produced.
    fn next_unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: xorshift high bits, then rotate by the top 5 bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RollSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Scripted rolls, replayed in order and cycled when exhausted.
///
/// Lets tests assert exact hit/miss and critical outcomes. An empty script
/// always rolls `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedRolls {
    rolls: Vec<f32>,
    cursor: usize,
}

impl FixedRolls {
    /// Values are clamped into `[0, 1)`; NaN becomes `0.0`.
    pub fn new(rolls: impl IntoIterator<Item = f32>) -> Self {
        let rolls = rolls
            .into_iter()
            // max/min (not clamp) so NaN falls to the floor
            .map(|r| r.max(0.0).min(1.0 - f32::EPSILON))
            .collect();
        Self { rolls, cursor: 0 }
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RollSource for FixedRolls {
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * (1u32 << 24) as f32) as u32 * 256
    }

    fn next_unit(&mut self) -> f32 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
