//! Damage types and the resistance/immunity/vulnerability transform.

use crate::dice::roll_expression;
use crate::env::RngOracle;

// ============================================================================
// Damage Type
// ============================================================================

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Psychic,
    Radiant,
    Slashing,
    Thunder,
}

// ============================================================================
// Affinities
// ============================================================================

/// A creature's damage-type lists, matched case-insensitively.
///
/// Lists are free-form strings in content so that unknown types round-trip;
/// they only ever match a [`DamageType`] by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageAffinities {
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,
    pub vulnerabilities: Vec<String>,
}

fn listed(list: &[String], damage_type: DamageType) -> bool {
    list.iter()
        .any(|entry| entry.trim().eq_ignore_ascii_case(damage_type.as_ref()))
}

impl DamageAffinities {
    pub fn is_resistant(&self, damage_type: DamageType) -> bool {
        listed(&self.resistances, damage_type)
    }

    pub fn is_immune(&self, damage_type: DamageType) -> bool {
        listed(&self.immunities, damage_type)
    }

    pub fn is_vulnerable(&self, damage_type: DamageType) -> bool {
        listed(&self.vulnerabilities, damage_type)
    }

    /// Transforms rolled damage (dice + modifier) into damage taken.
    ///
    /// # Order
    ///
    /// ```text
    /// dealt = max(raw, 1)
    /// immune     → 0
    /// vulnerable → dealt * 2
    /// resistant  → dealt / 2   (integer division)
    /// ```
    ///
    /// The floor applies before the affinities, so an immune target always
    /// takes 0 and an unmodified hit always deals at least 1.
    pub fn apply(&self, raw: i32, damage_type: DamageType) -> u32 {
        let mut dealt = raw.max(1);
        if self.is_immune(damage_type) {
            return 0;
        }
        if self.is_vulnerable(damage_type) {
            dealt *= 2;
        }
        if self.is_resistant(damage_type) {
            dealt /= 2;
        }
        dealt.max(0) as u32
    }
}

/// Rolls a damage expression and adds a flat modifier.
///
/// Critical hits double the dice in `expression`, never `modifier`.
pub fn roll_damage(
    expression: &str,
    modifier: i32,
    critical: bool,
    rng: &mut dyn RngOracle,
) -> i32 {
    roll_expression(expression, rng, critical) + modifier
}

/// Subtracts damage from an HP pool, clamping at zero.
pub fn apply_damage(hp: u32, damage: u32) -> u32 {
    hp.saturating_sub(damage)
}
