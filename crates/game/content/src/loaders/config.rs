//! Combat configuration loader.

use std::path::Path;

use encounter_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("default_loot_rolls = 2").unwrap();
        assert_eq!(config.default_loot_rolls, 2);
        assert_eq!(config.unarmed_damage, CombatConfig::DEFAULT_UNARMED_DAMAGE);
        assert_eq!(
            config.unknown_environment_range,
            CombatConfig::DEFAULT_UNKNOWN_ENVIRONMENT_RANGE
        );
    }
}
