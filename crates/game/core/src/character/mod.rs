//! Player character record.
//!
//! [`PlayerCharacter`] is the persistent record owned by the caller. The
//! engine writes HP, experience and spent equipment stacks back into it when
//! a fight settles; persisting it is up to the caller.

mod abilities;
mod class;
mod equipment;

pub use abilities::{Ability, AbilityScores};
pub use class::{CharacterClass, ProficiencySet, Race, UNARMED};
pub use equipment::{EquipSlot, Equipment, EquipmentBuilder, ItemStack};

use crate::env::AdvancementTable;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCharacter {
    pub name: String,
    pub class: CharacterClass,
    pub race: Race,
    pub experience: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub abilities: AbilityScores,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
}

impl PlayerCharacter {
    pub fn new(name: impl Into<String>, class: CharacterClass, race: Race, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            class,
            race,
            experience: 0,
            hp: max_hp,
            max_hp,
            abilities: AbilityScores::default(),
            equipment: Equipment::default(),
        }
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    /// Current level derived from experience.
    pub fn level(&self, table: &AdvancementTable) -> u32 {
        table.level_for(self.experience)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }
}
