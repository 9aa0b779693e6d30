//! Data-driven combat content and its loaders.
//!
//! This crate loads static content from RON/TOML data files:
//! - Item catalog (RON)
//! - Monster stat blocks with AI tuning and loot tables (RON)
//! - Advancement table (TOML)
//! - Environment categories (TOML)
//! - Combat tunables (TOML)
//!
//! Content is validated once at load time and consumed by runtime oracles; it
//! never appears in session state.

pub mod catalog;
pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ContentSet;
pub use validate::ContentError;

#[cfg(feature = "loaders")]
pub use loaders::{
    AdvancementLoader, ConfigLoader, ContentFactory, EnvironmentLoader, ItemLoader, LoadResult,
    MonsterLoader,
};
