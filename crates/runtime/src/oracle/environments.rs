//! Environment ID to terrain category lookup.

use std::collections::BTreeMap;

use encounter_core::{EnvironmentCategory, EnvironmentOracle};

#[derive(Debug, Clone, Default)]
pub struct EnvironmentOracleImpl {
    categories: BTreeMap<String, EnvironmentCategory>,
}

impl EnvironmentOracleImpl {
    pub fn new(categories: BTreeMap<String, EnvironmentCategory>) -> Self {
        Self { categories }
    }

    pub fn environment_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

impl EnvironmentOracle for EnvironmentOracleImpl {
    fn category(&self, id: &str) -> Option<EnvironmentCategory> {
        self.categories.get(id).copied()
    }
}
