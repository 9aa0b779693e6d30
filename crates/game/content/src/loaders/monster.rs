//! Monster catalog loader.

use std::path::Path;

use encounter_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for monster stat blocks.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load monster templates from a RON file containing a [`MonsterCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;
        Ok(catalog.monsters)
    }
}
