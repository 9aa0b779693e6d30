//! Validated bundle of all combat content.

use std::collections::BTreeMap;

use encounter_core::loot::NOTHING;
use encounter_core::{
    AdvancementTable, CombatConfig, EnvironmentCategory, ItemDefinition, MonsterTemplate,
};

use crate::validate::{
    ContentError, validate_advancement, validate_config, validate_items, validate_monsters,
};

/// Everything the oracles serve, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct ContentSet {
    pub items: Vec<ItemDefinition>,
    pub monsters: Vec<MonsterTemplate>,
    pub advancement: AdvancementTable,
    pub environments: BTreeMap<String, EnvironmentCategory>,
    pub combat: CombatConfig,
}

impl ContentSet {
    /// Checks each catalog and the references between them.
    ///
    /// # Errors
    ///
    /// The first [`ContentError`] found.
    pub fn validate(&self) -> Result<(), ContentError> {
        validate_items(&self.items)?;
        validate_monsters(&self.monsters)?;
        validate_advancement(&self.advancement)?;
        validate_config(&self.combat)?;

        for monster in &self.monsters {
            let loot = &monster.loot;
            let guaranteed = loot.guaranteed.iter().map(|drop| drop.item.as_str());
            let rolled = loot
                .tiers
                .iter()
                .flat_map(|tier| tier.entries.iter())
                .filter(|entry| !entry.is_nothing())
                .map(|entry| entry.item.as_str());
            for item in guaranteed.chain(rolled) {
                if !self.items.iter().any(|def| def.id == item) && item != NOTHING {
                    return Err(ContentError::UnknownLootItem {
                        monster: monster.id.clone(),
                        item: item.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn monster_ids(&self) -> impl Iterator<Item = &str> {
        self.monsters.iter().map(|monster| monster.id.as_str())
    }
}
