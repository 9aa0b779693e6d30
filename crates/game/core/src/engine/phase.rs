/// Macro-state of a combat session.
///
/// ```text
/// Active ⇄ DeathSaves → { Victory | Defeat }
/// Active → Loot       (monster killed)
/// Active → Victory    (monster fled)
/// ```
///
/// Terminal phases never transition again; the caller settles the session
/// with `end_combat` and drops it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatPhase {
    #[default]
    Active,
    DeathSaves,
    Victory,
    Defeat,
    Loot,
}

impl CombatPhase {
    /// Phases in which `end_combat` is accepted.
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Victory | Self::Defeat | Self::Loot => true,
            Self::Active | Self::DeathSaves => false,
        }
    }

    /// Whether the fight's XP is kept at settlement.
    pub const fn keeps_experience(&self) -> bool {
        match self {
            Self::Victory | Self::Loot => true,
            Self::Active | Self::DeathSaves | Self::Defeat => false,
        }
    }
}
