//! Attack-roll resolution.

use crate::dice::{RollMode, roll_d20};
use crate::env::RngOracle;

/// Outcome of one attack roll against an armor class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// The d20 face that counted.
    pub roll: i32,
    /// The other face when rolled with advantage or disadvantage.
    pub discarded: Option<i32>,
    pub total: i32,
    pub natural_20: bool,
    pub natural_1: bool,
    pub hit: bool,
    pub critical: bool,
}

impl AttackResult {
    /// Applies the natural-die rules to an already-rolled face.
    ///
    /// - natural 20: hit and critical regardless of bonus or AC
    /// - natural 1: miss regardless of bonus
    /// - otherwise: hit when `total >= armor_class`
    pub fn from_roll(roll: i32, discarded: Option<i32>, bonus: i32, armor_class: i32) -> Self {
        let total = roll + bonus;
        let natural_20 = roll == 20;
        let natural_1 = roll == 1;
        let hit = if natural_20 {
            true
        } else if natural_1 {
            false
        } else {
            total >= armor_class
        };
        Self {
            roll,
            discarded,
            total,
            natural_20,
            natural_1,
            hit,
            critical: natural_20,
        }
    }

    /// An automatic critical hit, used for melee attacks on a helpless target.
    pub fn automatic_critical(mut self) -> Self {
        self.hit = true;
        self.critical = true;
        self
    }
}

/// Rolls a d20 attack with `bonus` against `armor_class`.
pub fn resolve_attack_roll(
    rng: &mut dyn RngOracle,
    bonus: i32,
    armor_class: i32,
    mode: RollMode,
) -> AttackResult {
    let d20 = roll_d20(rng, mode);
    AttackResult::from_roll(d20.kept, d20.discarded, bonus, armor_class)
}
