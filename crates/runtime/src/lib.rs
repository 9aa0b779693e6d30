//! Async session runtime for the combat engine.
//!
//! This crate wraps loaded content in oracle implementations and gives every
//! live fight its own worker task. Consumers embed [`CombatRuntime`] to open
//! fights and route commands, or hold a [`SessionHandle`] to talk to one
//! session directly.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the registry, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] adapts a content set to the engine's oracle traits
//! - `workers` keeps the per-session tasks internal to the crate
pub mod api;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{CombatOutcome, Result, RuntimeError, SessionHandle, SessionSnapshot};
pub use oracle::{
    EnvironmentOracleImpl, ItemOracleImpl, MonsterOracleImpl, OracleManager, TablesOracleImpl,
};
pub use runtime::{CombatRequest, CombatRuntime, CombatRuntimeBuilder, RuntimeConfig};
