//! In-memory [`encounter_core::MonsterOracle`].

use std::collections::HashMap;

use encounter_core::{MonsterOracle, MonsterTemplate};

/// Oracle serving monster templates by ID.
#[derive(Debug, Default)]
pub struct MonsterOracleImpl {
    templates: HashMap<String, MonsterTemplate>,
}

impl MonsterOracleImpl {
    pub fn new(monsters: impl IntoIterator<Item = MonsterTemplate>) -> Self {
        Self {
            templates: monsters
                .into_iter()
                .map(|template| (template.id.clone(), template))
                .collect(),
        }
    }

    /// Add a template, replacing any previous one with the same ID.
    pub fn add(&mut self, template: MonsterTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Monster IDs in no particular order.
    pub fn monster_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MonsterOracle for MonsterOracleImpl {
    fn template(&self, id: &str) -> Option<MonsterTemplate> {
        self.templates.get(id).cloned()
    }
}
