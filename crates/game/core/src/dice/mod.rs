//! Dice and probability primitives.
//!
//! - [`ability_modifier`]: `floor((score - 10) / 2)`
//! - [`proficiency_bonus`]: level-tiered attack bonus
//! - [`RollMode`] / [`AdvantageSources`]: advantage and disadvantage bookkeeping
//! - [`roll_d20`]: a single d20 test under a roll mode
//! - [`DiceExpr`]: `NdM+K` expressions with critical-hit doubling
//! - [`roll_expression`]: evaluate content-supplied text, falling back on bad data

mod expr;

pub use expr::{DiceExpr, DiceParseError};

use crate::env::RngOracle;

/// Ability modifier for a score, using floor division (9 → -1, 10 → 0, 20 → +5).
pub const fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Proficiency bonus by character level.
///
/// | Level | Bonus |
/// |-------|-------|
/// | 1-4   | +2    |
/// | 5-8   | +3    |
/// | 9-12  | +4    |
/// | 13-16 | +5    |
/// | 17+   | +6    |
pub const fn proficiency_bonus(level: u32) -> i32 {
    match level {
        0..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// How a d20 is rolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RollMode {
    #[default]
    Normal,
    /// Roll twice, keep the higher.
    Advantage,
    /// Roll twice, keep the lower.
    Disadvantage,
}

/// Collects advantage and disadvantage sources for one roll.
///
/// Any number of sources of the same kind count once; having at least one of
/// each cancels out to a normal roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvantageSources {
    advantage: u8,
    disadvantage: u8,
}

impl AdvantageSources {
    pub const fn new() -> Self {
        Self {
            advantage: 0,
            disadvantage: 0,
        }
    }

    pub fn grant_advantage(&mut self) {
        self.advantage = self.advantage.saturating_add(1);
    }

    pub fn impose_disadvantage(&mut self) {
        self.disadvantage = self.disadvantage.saturating_add(1);
    }

    pub const fn mode(&self) -> RollMode {
        match (self.advantage > 0, self.disadvantage > 0) {
            (true, false) => RollMode::Advantage,
            (false, true) => RollMode::Disadvantage,
            _ => RollMode::Normal,
        }
    }
}

/// Outcome of a single d20 test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct D20Roll {
    /// The face that counts.
    pub kept: i32,
    /// The discarded face when rolling with advantage or disadvantage.
    pub discarded: Option<i32>,
}

/// Rolls a d20 under the given mode.
pub fn roll_d20(rng: &mut dyn RngOracle, mode: RollMode) -> D20Roll {
    let first = rng.roll_d20();
    match mode {
        RollMode::Normal => D20Roll {
            kept: first,
            discarded: None,
        },
        RollMode::Advantage | RollMode::Disadvantage => {
            let second = rng.roll_d20();
            let (kept, discarded) = match mode {
                RollMode::Advantage => (first.max(second), first.min(second)),
                _ => (first.min(second), first.max(second)),
            };
            D20Roll {
                kept,
                discarded: Some(discarded),
            }
        }
    }
}

/// Result returned for any expression that fails to parse.
pub const MALFORMED_ROLL_RESULT: i32 = 1;

/// Evaluates a content-supplied dice expression.
///
/// Malformed expressions do not fail the call: they resolve to
/// [`MALFORMED_ROLL_RESULT`] and are reported on the `content_fallback`
/// target so bad data stays visible without deadlocking a fight.
pub fn roll_expression(expression: &str, rng: &mut dyn RngOracle, critical: bool) -> i32 {
    match DiceExpr::parse(expression) {
        Ok(expr) => expr.roll(rng, critical),
        Err(error) => {
            tracing::warn!(
                target: "encounter::content_fallback",
                %expression,
                %error,
                "malformed dice expression, using minimal roll"
            );
            MALFORMED_ROLL_RESULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn proficiency_tiers() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(12), 4);
        assert_eq!(proficiency_bonus(13), 5);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn advantage_and_disadvantage_cancel() {
        let mut sources = AdvantageSources::new();
        assert_eq!(sources.mode(), RollMode::Normal);
        sources.impose_disadvantage();
        sources.impose_disadvantage();
        assert_eq!(sources.mode(), RollMode::Disadvantage);
        sources.grant_advantage();
        assert_eq!(sources.mode(), RollMode::Normal);
    }

    #[test]
    fn advantage_keeps_higher_disadvantage_keeps_lower() {
        let mut rng = ScriptedRng::new([4, 17, 4, 17]);
        let adv = roll_d20(&mut rng, RollMode::Advantage);
        assert_eq!(adv.kept, 17);
        assert_eq!(adv.discarded, Some(4));
        let dis = roll_d20(&mut rng, RollMode::Disadvantage);
        assert_eq!(dis.kept, 4);
        assert_eq!(dis.discarded, Some(17));
    }

    #[test]
    fn malformed_expression_rolls_minimum() {
        let mut rng = ScriptedRng::new([6]);
        assert_eq!(roll_expression("banana", &mut rng, false), MALFORMED_ROLL_RESULT);
        assert_eq!(rng.remaining(), 1);
        assert_eq!(roll_expression("1d6+1", &mut rng, false), 7);
    }
}
