//! Advancement table loader.

use std::path::Path;

use encounter_core::AdvancementTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the level/experience table.
pub struct AdvancementLoader;

impl AdvancementLoader {
    /// Load the advancement table from TOML (`[[levels]]` rows).
    ///
    /// Rows are sorted by experience threshold regardless of file order.
    pub fn load(path: &Path) -> LoadResult<AdvancementTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AdvancementTable> {
        let table: AdvancementTable = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse advancement TOML: {}", e))?;
        Ok(AdvancementTable::new(table.levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_rows_and_defaults_multiplier() {
        let table = AdvancementLoader::parse(
            r#"
            [[levels]]
            level = 2
            experience = 300
            xp_multiplier = 0.9

            [[levels]]
            level = 1
            experience = 0
            "#,
        )
        .unwrap();

        assert_eq!(table.levels[0].level, 1);
        assert_eq!(table.xp_multiplier(1), 1.0);
        assert_eq!(table.xp_multiplier(2), 0.9);
        assert_eq!(table.level_for(450), 2);
    }
}
