//! Armor class from equipped gear.

use crate::character::{Ability, PlayerCharacter};
use crate::config::CombatConfig;
use crate::env::{ArmorBase, ArmorWeight, ItemOracle, OracleError};

impl ArmorBase {
    /// AC granted by this formula for a wearer with `dex_modifier`.
    pub fn armor_class(&self, dex_modifier: i32, config: &CombatConfig) -> i32 {
        match self.weight {
            ArmorWeight::Light => self.value + dex_modifier,
            ArmorWeight::Medium => {
                let cap = self.dex_cap.unwrap_or(config.medium_armor_dex_cap);
                self.value + dex_modifier.min(cap)
            }
            ArmorWeight::Heavy => self.value,
        }
    }
}

/// Computes the player's armor class.
///
/// # Formula
///
/// ```text
/// base  = first base-setting item in slot order, else 10 + DEX
/// bonus = sum of `bonus` over every other equipped armor item
/// ac    = base + bonus
/// ```
///
/// A second base-setting item is ignored entirely.
///
/// # Errors
///
/// Returns `OracleError::ItemNotFound` if an equipped item has no definition.
pub fn armor_class(
    player: &PlayerCharacter,
    items: &dyn ItemOracle,
    config: &CombatConfig,
) -> Result<i32, OracleError> {
    let dex = player.modifier(Ability::Dexterity);
    let mut base: Option<i32> = None;
    let mut bonus = 0;

    for (slot, stack) in player.equipment.iter() {
        let definition = items
            .definition(&stack.item_id)
            .ok_or_else(|| OracleError::ItemNotFound(stack.item_id.clone()))?;
        let Some(armor) = definition.armor() else {
            continue;
        };
        if let Some(formula) = armor.base {
            if base.is_some() {
                tracing::debug!(%slot, item = %stack.item_id, "ignoring second base armor");
                continue;
            }
            base = Some(formula.armor_class(dex, config));
        }
        bonus += armor.bonus;
    }

    Ok(base.unwrap_or(CombatConfig::BASE_ARMOR_CLASS + dex) + bonus)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::character::{AbilityScores, CharacterClass, EquipSlot, Equipment, Race};
    use crate::env::{ArmorData, ItemDefinition, ItemKind};

    struct Items(HashMap<String, ItemDefinition>);

    impl ItemOracle for Items {
        fn definition(&self, id: &str) -> Option<ItemDefinition> {
            self.0.get(id).cloned()
        }
    }

    fn items() -> Items {
        let defs = [
            ItemDefinition::new(
                "leather",
                "Leather",
                ItemKind::Armor(ArmorData::base(ArmorWeight::Light, 11)),
            ),
            ItemDefinition::new(
                "scale_mail",
                "Scale Mail",
                ItemKind::Armor(ArmorData::base(ArmorWeight::Medium, 14)),
            ),
            ItemDefinition::new(
                "half_plate_of_agility",
                "Half Plate of Agility",
                ItemKind::Armor(ArmorData::base(ArmorWeight::Medium, 15).with_dex_cap(3)),
            ),
            ItemDefinition::new(
                "splint",
                "Splint",
                ItemKind::Armor(ArmorData::base(ArmorWeight::Heavy, 17)),
            ),
            ItemDefinition::new(
                "plate_helm",
                "Plate Helm",
                ItemKind::Armor(ArmorData::base(ArmorWeight::Heavy, 18)),
            ),
            ItemDefinition::new("shield", "Shield", ItemKind::Armor(ArmorData::bonus(2))),
            ItemDefinition::new("ring", "Ring of Protection", ItemKind::Armor(ArmorData::bonus(1))),
            ItemDefinition::new("rope", "Rope", ItemKind::Gear),
        ];
        Items(defs.into_iter().map(|d| (d.id.clone(), d)).collect())
    }

    fn player(dex: i32, equipment: Equipment) -> PlayerCharacter {
        PlayerCharacter::new("Tess", CharacterClass::Fighter, Race::Human, 12)
            .with_abilities(AbilityScores::new(14, dex, 12, 10, 10, 10))
            .with_equipment(equipment)
    }

    fn ac(dex: i32, equipment: Equipment) -> i32 {
        armor_class(&player(dex, equipment), &items(), &CombatConfig::default()).unwrap()
    }

    #[test]
    fn unarmored_is_ten_plus_dex() {
        assert_eq!(ac(16, Equipment::empty()), 13);
        let rope = Equipment::builder().item(EquipSlot::Cloak, "rope").build();
        assert_eq!(ac(8, rope), 9);
    }

    #[test]
    fn light_medium_heavy() {
        let light = Equipment::builder().item(EquipSlot::Chest, "leather").build();
        assert_eq!(ac(18, light), 15);

        let medium = Equipment::builder().item(EquipSlot::Chest, "scale_mail").build();
        assert_eq!(ac(18, medium), 16);

        let capped = Equipment::builder()
            .item(EquipSlot::Chest, "half_plate_of_agility")
            .build();
        assert_eq!(ac(18, capped), 18);

        let heavy = Equipment::builder().item(EquipSlot::Chest, "splint").build();
        assert_eq!(ac(18, heavy), 17);
    }

    #[test]
    fn bonuses_stack_and_first_base_wins() {
        let equipment = Equipment::builder()
            .item(EquipSlot::Chest, "splint")
            .item(EquipSlot::Head, "plate_helm")
            .item(EquipSlot::OffHand, "shield")
            .item(EquipSlot::Ring, "ring")
            .build();
        assert_eq!(ac(10, equipment), 17 + 2 + 1);
    }

    #[test]
    fn missing_definition_is_a_data_error() {
        let equipment = Equipment::builder().item(EquipSlot::Chest, "mithral").build();
        let result = armor_class(&player(10, equipment), &items(), &CombatConfig::default());
        assert_eq!(result, Err(OracleError::ItemNotFound("mithral".into())));
    }
}
