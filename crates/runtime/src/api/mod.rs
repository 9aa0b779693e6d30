//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration and workers.

pub mod errors;
pub mod handle;

pub use errors::{Result, RuntimeError};
pub use handle::{CombatOutcome, SessionHandle, SessionSnapshot};
