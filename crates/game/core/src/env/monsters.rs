//! Monster template definitions and oracle interface.
//!
//! A [`MonsterTemplate`] is the complete stat block for one monster kind. The
//! engine copies it by value into each [`MonsterInstance`](crate::monster::MonsterInstance)
//! so later edits to the store never reach an in-progress fight.

use crate::character::AbilityScores;
use crate::combat::{DamageAffinities, DamageType};
use crate::loot::LootTable;

pub trait MonsterOracle: Send + Sync {
    fn template(&self, id: &str) -> Option<MonsterTemplate>;
}

/// Full monster stat block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    pub armor_class: i32,
    /// Hit-dice expression rolled for each new instance (`2d6`, `4d8+4`).
    pub hit_dice: String,
    /// Fixed HP used when `hit_dice` is malformed or rolls to zero.
    pub average_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: AbilityScores,
    /// Scanned in declared order by the AI.
    pub actions: Vec<MonsterAction>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub affinities: DamageAffinities,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: MonsterBehavior,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: LootTable,
    /// Experience awarded for the kill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp: u32,
}

/// One attack a monster can make.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAction {
    pub name: String,
    pub reach: ActionReach,
    pub attack_bonus: i32,
    /// Damage expression including any flat modifier.
    pub damage: String,
    pub damage_type: DamageType,
}

impl MonsterAction {
    pub fn melee(
        name: impl Into<String>,
        reach: u32,
        attack_bonus: i32,
        damage: impl Into<String>,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            reach: ActionReach::Melee { reach },
            attack_bonus,
            damage: damage.into(),
            damage_type,
        }
    }

    pub fn ranged(
        name: impl Into<String>,
        normal: u32,
        long: u32,
        attack_bonus: i32,
        damage: impl Into<String>,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            reach: ActionReach::Ranged { normal, long },
            attack_bonus,
            damage: damage.into(),
            damage_type,
        }
    }

    /// Whether the action can target something `range` bands away.
    pub const fn usable_at(&self, range: u32) -> bool {
        self.reach.covers(range)
    }

    pub const fn is_melee(&self) -> bool {
        matches!(self.reach, ActionReach::Melee { .. })
    }
}

/// Distance profile of a monster action, in range bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionReach {
    Melee { reach: u32 },
    Ranged { normal: u32, long: u32 },
}

impl ActionReach {
    /// Melee actions reach up to `reach`; ranged ones up to `long`.
    pub const fn covers(&self, range: u32) -> bool {
        match *self {
            Self::Melee { reach } => range <= reach,
            Self::Ranged { long, .. } => range <= long,
        }
    }
}

/// Disposition that gates the flee check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Aggression {
    Cowardly,
    #[default]
    Normal,
    Aggressive,
    /// Never flees.
    Berserker,
}

/// AI tuning for a monster kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterBehavior {
    #[cfg_attr(feature = "serde", serde(default))]
    pub aggression: Aggression,
    /// Range band the monster tries to hold.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_range: u32,
    /// Flee once `hp / max_hp` is at or below this fraction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flee_threshold: f64,
}

impl MonsterBehavior {
    pub const fn new(aggression: Aggression, preferred_range: u32, flee_threshold: f64) -> Self {
        Self {
            aggression,
            preferred_range,
            flee_threshold,
        }
    }
}

impl Default for MonsterBehavior {
    fn default() -> Self {
        Self::new(Aggression::Normal, 0, 0.0)
    }
}
