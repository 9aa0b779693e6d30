//! Headless encounter simulator.
//!
//! Loads content, builds a [`CombatRuntime`](encounter_runtime::CombatRuntime)
//! and lets an [`Autoplayer`](autoplay::Autoplayer) fight through it. The
//! binary in `main.rs` is the composition root; the pieces live here so they
//! can be tested without a process.

pub mod autoplay;
pub mod config;
pub mod party;

pub use autoplay::{Autoplayer, FightReport};
pub use config::SimConfig;
