//! RNG oracle for dice rolls.
//!
//! Every random draw in the engine goes through [`RngOracle`]. Production code
//! uses [`EntropyRng`], which is seeded from the OS on construction and never
//! reseeded; tests substitute [`ScriptedRng`] to replay an exact sequence of
//! die faces.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RngOracle: Send {
    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Returns `min` when the range is empty or degenerate.
    fn roll_range(&mut self, min: i32, max: i32) -> i32;

    /// Roll a d20 (1-20 inclusive).
    fn roll_d20(&mut self) -> i32 {
        self.roll_range(1, 20)
    }

    /// Roll a die with N sides (1-N inclusive). A zero-sided die rolls 0.
    fn roll_die(&mut self, sides: u32) -> i32 {
        if sides == 0 {
            return 0;
        }
        self.roll_range(1, sides as i32)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        (**self).roll_range(min, max)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        (**self).roll_range(min, max)
    }
}

/// Unseeded production generator.
///
/// Wraps `StdRng` seeded from OS entropy. Each combat session owns its own
/// instance, so no global generator state is shared between sessions.
#[derive(Debug, Clone)]
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for EntropyRng {
    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values.
///
/// Each draw pops the next scripted value and clamps it into the requested
/// range, so a script can be written in die faces (`[20, 6, 6]` is a natural
/// 20 followed by two sixes). Once the script is exhausted every draw returns
/// the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
    draws: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Appends more values to the end of the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = i32>) {
        self.values.extend(values);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Total number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngOracle for ScriptedRng {
    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        self.draws += 1;
        if min >= max {
            // Degenerate ranges still consume a value to keep scripts aligned.
            self.values.pop_front();
            return min;
        }
        match self.values.pop_front() {
            Some(value) => value.clamp(min, max),
            None => min,
        }
    }
}
