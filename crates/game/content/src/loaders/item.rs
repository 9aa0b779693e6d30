//! Item catalog loader.

use std::path::Path;

use encounter_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file containing an [`ItemCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::env::{ItemKind, ItemTag, WeaponStyle};

    #[test]
    fn parses_weapons_armor_and_ammunition() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (
                        id: "rapier",
                        name: "Rapier",
                        kind: Weapon((
                            category: martial,
                            style: melee,
                            damage: "1d8",
                            damage_type: piercing,
                        )),
                        tags: [finesse],
                        max_stack: 1,
                    ),
                    (
                        id: "leather",
                        name: "Leather Armor",
                        kind: Armor((base: Some((weight: light, value: 11)))),
                        max_stack: 1,
                    ),
                    (id: "bolt", name: "Crossbow Bolt", kind: Ammunition, max_stack: 20),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 3);
        let rapier = items[0].weapon().unwrap();
        assert_eq!(rapier.style, WeaponStyle::Melee);
        assert!(items[0].has_tag(ItemTag::Finesse));
        assert_eq!(items[1].armor().and_then(|a| a.base).map(|b| b.value), Some(11));
        assert_eq!(items[2].kind, ItemKind::Ammunition);
    }

    #[test]
    fn reports_parse_errors() {
        let error = ItemLoader::parse("(items: [(id: 3)])").unwrap_err();
        assert!(error.to_string().contains("item catalog"));
    }
}
