//! Combat resolution rules.
//!
//! Pure functions and value types used by the engine. Nothing here touches a
//! session; randomness comes in as `&mut dyn RngOracle`.
//!
//! # Core Functions
//!
//! - `resolve_attack_roll`: d20 + bonus against AC with natural 20/1 rules
//! - `roll_damage`: damage dice with critical doubling
//! - `DamageAffinities::apply`: floor, then immunity/vulnerability/resistance
//! - `armor_class`: base formula plus additive gear bonuses
//! - `WeaponProfile::resolve`: attack bonus, range validity, disadvantage
//! - `order_initiative`: who acts first

pub mod armor;
pub mod damage;
pub mod hit;
pub mod initiative;
pub mod weapon;

pub use armor::armor_class;
pub use damage::{DamageAffinities, DamageType, apply_damage, roll_damage};
pub use hit::{AttackResult, resolve_attack_roll};
pub use initiative::{CombatantId, InitiativeEntry, order_initiative};
pub use weapon::{AttackStyle, Hand, WeaponProfile, ammunition_source, check_two_weapon};
