//! Traits describing read-only combat content.
//!
//! Oracles expose item definitions, monster templates, the advancement table
//! and environment categories. The [`CombatEnv`] aggregate bundles them so the
//! engine can access everything it needs without hard coupling to concrete
//! implementations. Randomness is passed separately as `&mut dyn RngOracle`
//! because it is the only mutable collaborator.
mod environments;
mod error;
mod items;
mod monsters;
mod rng;
mod tables;

pub use environments::{EnvironmentCategory, EnvironmentOracle};
pub use error::OracleError;
pub use items::{
    ArmorBase, ArmorData, ArmorWeight, ItemDefinition, ItemKind, ItemOracle, ItemTag,
    WeaponCategory, WeaponData, WeaponStyle,
};
pub use monsters::{
    ActionReach, Aggression, MonsterAction, MonsterBehavior, MonsterOracle, MonsterTemplate,
};
pub use rng::{EntropyRng, RngOracle, ScriptedRng};
pub use tables::{AdvancementLevel, AdvancementTable, TablesOracle};

use crate::config::CombatConfig;

/// Aggregates the read-only oracles required by the combat engine.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    items: &'a dyn ItemOracle,
    monsters: &'a dyn MonsterOracle,
    tables: &'a dyn TablesOracle,
    environments: &'a dyn EnvironmentOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        monsters: &'a dyn MonsterOracle,
        tables: &'a dyn TablesOracle,
        environments: &'a dyn EnvironmentOracle,
    ) -> Self {
        Self {
            items,
            monsters,
            tables,
            environments,
        }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn environments(&self) -> &'a dyn EnvironmentOracle {
        self.environments
    }

    /// Looks up an item definition.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemNotFound` if the store has no such item.
    pub fn item(&self, id: &str) -> Result<ItemDefinition, OracleError> {
        self.items
            .definition(id)
            .ok_or_else(|| OracleError::ItemNotFound(id.to_string()))
    }

    /// Looks up a monster template.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MonsterNotFound` if the store has no such monster.
    pub fn monster(&self, id: &str) -> Result<MonsterTemplate, OracleError> {
        self.monsters
            .template(id)
            .ok_or_else(|| OracleError::MonsterNotFound(id.to_string()))
    }

    pub fn advancement(&self) -> &'a AdvancementTable {
        self.tables.advancement()
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.tables.combat()
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv").finish_non_exhaustive()
    }
}
