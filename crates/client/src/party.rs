//! The simulated hero.

use encounter_core::{
    AbilityScores, CharacterClass, EquipSlot, Equipment, PlayerCharacter, Race,
};

/// Level 1 fighter with throwing weapons in both hands and chain mail.
pub fn default_hero() -> PlayerCharacter {
    PlayerCharacter::new("Brenna", CharacterClass::Fighter, Race::Dwarf, 14)
        .with_abilities(AbilityScores::new(16, 13, 14, 10, 12, 8))
        .with_equipment(
            Equipment::builder()
                .stack(EquipSlot::MainHand, "handaxe", 4)
                .stack(EquipSlot::OffHand, "dagger", 3)
                .item(EquipSlot::Chest, "chain_mail")
                .build(),
        )
}

/// Short rest between fights: back to full HP, nothing else restored.
pub fn rest(player: &mut PlayerCharacter) {
    player.hp = player.max_hp;
}
