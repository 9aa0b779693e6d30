//! Content loaders for reading combat data from files.
//!
//! Catalogs (items, monsters) are RON; tables and tunables (advancement,
//! environments, combat config) are TOML. Each loader returns core types
//! directly; [`ContentFactory`] loads and validates the whole set.

pub mod config;
pub mod environment;
pub mod factory;
pub mod item;
pub mod monster;
pub mod tables;

pub use config::ConfigLoader;
pub use environment::EnvironmentLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use monster::MonsterLoader;
pub use tables::AdvancementLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
