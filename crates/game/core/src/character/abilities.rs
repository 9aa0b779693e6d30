//! The six ability scores.

use crate::dice::ability_modifier;

/// Ability identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Ability {
    #[strum(serialize = "STR")]
    Strength,
    #[strum(serialize = "DEX")]
    Dexterity,
    #[strum(serialize = "CON")]
    Constitution,
    #[strum(serialize = "INT")]
    Intelligence,
    #[strum(serialize = "WIS")]
    Wisdom,
    #[strum(serialize = "CHA")]
    Charisma,
}

/// Raw ability scores of a creature.
///
/// Scores are stored as-is; modifiers are always derived with
/// [`ability_modifier`] so the two never drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub const fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub const fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.score(ability))
    }
}

impl Default for AbilityScores {
    /// All 10s: every modifier is zero.
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}
