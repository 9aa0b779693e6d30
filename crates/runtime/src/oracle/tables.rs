//! Advancement table and combat tunables.

use encounter_core::{AdvancementTable, CombatConfig, TablesOracle};

#[derive(Debug, Clone, Default)]
pub struct TablesOracleImpl {
    advancement: AdvancementTable,
    combat: CombatConfig,
}

impl TablesOracleImpl {
    pub fn new(advancement: AdvancementTable, combat: CombatConfig) -> Self {
        Self {
            advancement,
            combat,
        }
    }
}

impl TablesOracle for TablesOracleImpl {
    fn advancement(&self) -> &AdvancementTable {
        &self.advancement
    }

    fn combat(&self) -> &CombatConfig {
        &self.combat
    }
}
