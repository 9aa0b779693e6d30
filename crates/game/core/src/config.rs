/// Combat configuration constants and tunable parameters.
///
/// Rule constants (d20 faces, death-save thresholds) are compile-time values.
/// Content-facing defaults can be overridden from `combat.toml`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage expression for unarmed strikes.
    pub unarmed_damage: String,
    /// Extra loot rolls when a table does not specify `rolls`.
    pub default_loot_rolls: u32,
    /// DEX cap for medium armor without a per-item override.
    pub medium_armor_dex_cap: i32,
    /// Starting range when the environment ID is unknown.
    pub unknown_environment_range: u32,
}

impl CombatConfig {
    // ===== rule constants =====
    pub const D20: i32 = 20;
    pub const DEATH_SAVE_DC: i32 = 10;
    pub const DEATH_SAVES_TO_STABILIZE: u8 = 3;
    pub const DEATH_SAVES_TO_DIE: u8 = 3;
    pub const BASE_ARMOR_CLASS: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_UNARMED_DAMAGE: &'static str = "1d4";
    pub const DEFAULT_LOOT_ROLLS: u32 = 1;
    pub const DEFAULT_MEDIUM_ARMOR_DEX_CAP: i32 = 2;
    pub const DEFAULT_UNKNOWN_ENVIRONMENT_RANGE: u32 = 2;

    pub fn new() -> Self {
        Self {
            unarmed_damage: Self::DEFAULT_UNARMED_DAMAGE.to_string(),
            default_loot_rolls: Self::DEFAULT_LOOT_ROLLS,
            medium_armor_dex_cap: Self::DEFAULT_MEDIUM_ARMOR_DEX_CAP,
            unknown_environment_range: Self::DEFAULT_UNKNOWN_ENVIRONMENT_RANGE,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
