//! Turn-based encounter rules shared by the runtime and offline tools.
//!
//! `encounter-core` resolves one player-versus-monster fight: initiative,
//! attack and damage rolls, armor class, monster AI, death saves, XP and
//! loot. Static content is read through the oracle traits in [`env`] and all
//! randomness flows through [`env::RngOracle`]. Every session mutation goes
//! through [`engine::CombatEngine`].
pub mod character;
pub mod combat;
pub mod config;
pub mod dice;
pub mod engine;
pub mod env;
pub mod error;
pub mod loot;
pub mod monster;

pub use character::{
    Ability, AbilityScores, CharacterClass, EquipSlot, Equipment, ItemStack, PlayerCharacter, Race,
};
pub use combat::{AttackResult, DamageAffinities, DamageType, Hand};
pub use config::CombatConfig;
pub use dice::{DiceExpr, RollMode};
pub use engine::{
    AttackCommand, CombatEngine, CombatError, CombatPhase, CombatSession, CombatSummary,
    MoveDirection, PlayerCombatState, TwoWeaponError,
};
pub use env::{
    AdvancementLevel, AdvancementTable, CombatEnv, EntropyRng, EnvironmentCategory,
    EnvironmentOracle, ItemDefinition, ItemOracle, MonsterOracle, MonsterTemplate, OracleError,
    RngOracle, ScriptedRng, TablesOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use loot::{LootDrop, LootTable};
pub use monster::{MonsterDecision, MonsterInstance};
