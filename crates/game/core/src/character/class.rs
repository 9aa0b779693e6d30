//! Character classes, races and weapon proficiency sets.

use crate::env::WeaponCategory;

/// Unarmed strikes have no item; every class is proficient with them.
pub const UNARMED: &str = "unarmed";

const ROGUE_WEAPONS: &[&str] = &["hand_crossbow", "longsword", "rapier", "shortsword"];
const MONK_WEAPONS: &[&str] = &["shortsword"];
const DRUID_WEAPONS: &[&str] = &[
    "club",
    "dagger",
    "dart",
    "javelin",
    "mace",
    "quarterstaff",
    "scimitar",
    "sickle",
    "sling",
    "spear",
];
const ARCANE_WEAPONS: &[&str] = &["dagger", "dart", "sling", "quarterstaff", "light_crossbow"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

/// Which weapons a class is trained with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProficiencySet {
    pub categories: &'static [WeaponCategory],
    pub named: &'static [&'static str],
}

impl ProficiencySet {
    pub fn covers(&self, weapon_id: &str, category: WeaponCategory) -> bool {
        weapon_id == UNARMED
            || self.categories.contains(&category)
            || self.named.iter().any(|name| name.eq_ignore_ascii_case(weapon_id))
    }
}

impl CharacterClass {
    pub const fn proficiencies(&self) -> ProficiencySet {
        const SIMPLE: &[WeaponCategory] = &[WeaponCategory::Simple];
        const MARTIAL: &[WeaponCategory] = &[WeaponCategory::Simple, WeaponCategory::Martial];
        match self {
            Self::Barbarian | Self::Fighter | Self::Paladin | Self::Ranger => ProficiencySet {
                categories: MARTIAL,
                named: &[],
            },
            Self::Bard | Self::Rogue => ProficiencySet {
                categories: SIMPLE,
                named: ROGUE_WEAPONS,
            },
            Self::Monk => ProficiencySet {
                categories: SIMPLE,
                named: MONK_WEAPONS,
            },
            Self::Cleric | Self::Warlock => ProficiencySet {
                categories: SIMPLE,
                named: &[],
            },
            Self::Druid => ProficiencySet {
                categories: &[],
                named: DRUID_WEAPONS,
            },
            Self::Sorcerer | Self::Wizard => ProficiencySet {
                categories: &[],
                named: ARCANE_WEAPONS,
            },
        }
    }

    pub fn is_proficient(&self, weapon_id: &str, category: WeaponCategory) -> bool {
        self.proficiencies().covers(weapon_id, category)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    Dragonborn,
    Dwarf,
    Elf,
    Gnome,
    HalfElf,
    HalfOrc,
    Halfling,
    Human,
    Tiefling,
}

impl Race {
    /// Small races attack with heavy weapons at disadvantage.
    pub const fn is_small(&self) -> bool {
        matches!(self, Self::Gnome | Self::Halfling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn martial_classes_use_everything() {
        assert!(CharacterClass::Fighter.is_proficient("greataxe", WeaponCategory::Martial));
        assert!(CharacterClass::Ranger.is_proficient("club", WeaponCategory::Simple));
    }

    #[test]
    fn narrow_classes_use_named_lists() {
        assert!(CharacterClass::Rogue.is_proficient("rapier", WeaponCategory::Martial));
        assert!(!CharacterClass::Rogue.is_proficient("greatsword", WeaponCategory::Martial));
        assert!(CharacterClass::Wizard.is_proficient("Dagger", WeaponCategory::Simple));
        assert!(!CharacterClass::Wizard.is_proficient("mace", WeaponCategory::Simple));
        assert!(CharacterClass::Wizard.is_proficient(UNARMED, WeaponCategory::Simple));
    }

    #[test]
    fn small_races() {
        assert!(Race::Halfling.is_small());
        assert!(Race::Gnome.is_small());
        assert!(!Race::Dwarf.is_small());
    }
}
