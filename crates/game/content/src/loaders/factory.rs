//! Content factory for building the content set from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use encounter_core::{
    AdvancementTable, CombatConfig, EnvironmentCategory, ItemDefinition, MonsterTemplate,
};

use crate::catalog::ContentSet;
use crate::loaders::{
    AdvancementLoader, ConfigLoader, EnvironmentLoader, ItemLoader, LoadResult, MonsterLoader,
};

/// Loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml        (optional, defaults otherwise)
/// ├── advancement.toml
/// ├── environments.toml
/// ├── items.ron
/// └── monsters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory of the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load combat tunables from `combat.toml`, or defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("combat.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no combat config, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_advancement(&self) -> LoadResult<AdvancementTable> {
        AdvancementLoader::load(&self.data_dir.join("advancement.toml"))
    }

    pub fn load_environments(&self) -> LoadResult<BTreeMap<String, EnvironmentCategory>> {
        EnvironmentLoader::load(&self.data_dir.join("environments.toml"))
    }

    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterTemplate>> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Loads every file and validates the result as a whole.
    pub fn load_all(&self) -> LoadResult<ContentSet> {
        let content = ContentSet {
            items: self.load_items()?,
            monsters: self.load_monsters()?,
            advancement: self.load_advancement()?,
            environments: self.load_environments()?,
            combat: self.load_config()?,
        };
        content
            .validate()
            .with_context(|| format!("Invalid content in {}", self.data_dir.display()))?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            items = content.items.len(),
            monsters = content.monsters.len(),
            environments = content.environments.len(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
