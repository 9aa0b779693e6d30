//! Live monsters and their decision making.

pub mod ai;
mod instance;

pub use ai::{AiContext, MonsterChoice, MonsterDecision, decide, monster_tree};
pub use instance::MonsterInstance;
