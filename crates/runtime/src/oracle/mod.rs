//! Runtime wrappers around static combat content.
//!
//! These implementations expose the `encounter-core` oracle traits and bundle
//! them into an [`OracleManager`] so workers can build [`CombatEnv`] views on
//! demand. The data is immutable once loaded; per-fight state lives in the
//! session workers.
mod environments;
mod items;
mod monsters;
mod tables;

use std::sync::Arc;

use encounter_content::ContentSet;
use encounter_core::CombatEnv;

pub use environments::EnvironmentOracleImpl;
pub use items::ItemOracleImpl;
pub use monsters::MonsterOracleImpl;
pub use tables::TablesOracleImpl;

/// Shares all oracle implementations between session workers.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) monsters: Arc<MonsterOracleImpl>,
    pub(crate) tables: Arc<TablesOracleImpl>,
    pub(crate) environments: Arc<EnvironmentOracleImpl>,
}

impl OracleManager {
    pub fn new(
        items: Arc<ItemOracleImpl>,
        monsters: Arc<MonsterOracleImpl>,
        tables: Arc<TablesOracleImpl>,
        environments: Arc<EnvironmentOracleImpl>,
    ) -> Self {
        Self {
            items,
            monsters,
            tables,
            environments,
        }
    }

    /// Builds every oracle from a validated content set.
    pub fn from_content(content: ContentSet) -> Self {
        let ContentSet {
            items,
            monsters,
            advancement,
            environments,
            combat,
        } = content;
        Self::new(
            Arc::new(ItemOracleImpl::new(items)),
            Arc::new(MonsterOracleImpl::new(monsters)),
            Arc::new(TablesOracleImpl::new(advancement, combat)),
            Arc::new(EnvironmentOracleImpl::new(environments)),
        )
    }

    /// Borrowed view handed to the engine.
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        CombatEnv::new(
            self.items.as_ref(),
            self.monsters.as_ref(),
            self.tables.as_ref(),
            self.environments.as_ref(),
        )
    }

    pub fn monsters(&self) -> &MonsterOracleImpl {
        &self.monsters
    }

    pub fn environments(&self) -> &EnvironmentOracleImpl {
        &self.environments
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager")
            .field("items", &self.items.len())
            .field("monsters", &self.monsters.len())
            .finish_non_exhaustive()
    }
}
