//! Environment category loader.

use std::collections::BTreeMap;
use std::path::Path;

use encounter_core::EnvironmentCategory;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// `[environments]` table mapping environment IDs to categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentCatalog {
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentCategory>,
}

pub struct EnvironmentLoader;

impl EnvironmentLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, EnvironmentCategory>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, EnvironmentCategory>> {
        let catalog: EnvironmentCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse environments TOML: {}", e))?;
        Ok(catalog.environments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_ids_to_categories() {
        let environments = EnvironmentLoader::parse(
            r#"
            [environments]
            crypt = "enclosed"
            swamp = "dense"
            tundra = "open"
            "#,
        )
        .unwrap();
        assert_eq!(environments["crypt"], EnvironmentCategory::Enclosed);
        assert_eq!(environments["tundra"], EnvironmentCategory::Open);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(EnvironmentLoader::parse("[environments]\nvoid = \"astral\"").is_err());
    }
}
