//! In-memory [`encounter_core::ItemOracle`].
use std::collections::HashMap;

use encounter_core::{ItemDefinition, ItemOracle};

/// Item definitions keyed by ID.
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    definitions: HashMap<String, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new(items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            definitions: items.into_iter().map(|def| (def.id.clone(), def)).collect(),
        }
    }

    /// Adds or replaces a definition.
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, id: &str) -> Option<ItemDefinition> {
        self.definitions.get(id).cloned()
    }
}
