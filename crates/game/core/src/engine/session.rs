//! Combat session aggregate.

use std::collections::BTreeMap;

use crate::character::PlayerCharacter;
use crate::combat::InitiativeEntry;
use crate::engine::CombatPhase;
use crate::loot::LootDrop;
use crate::monster::MonsterInstance;

/// Per-fight state of the player.
///
/// Copied from the [`PlayerCharacter`] at start. HP changes are mirrored back
/// into the player record as they happen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCombatState {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub action_used: bool,
    pub bonus_action_used: bool,
    pub death_save_successes: u8,
    pub death_save_failures: u8,
    pub is_unconscious: bool,
    pub is_stable: bool,
}

impl PlayerCombatState {
    pub fn from_player(player: &PlayerCharacter) -> Self {
        Self {
            name: player.name.clone(),
            hp: player.hp,
            max_hp: player.max_hp,
            ..Self::default()
        }
    }

    /// Whether anything has been spent since the last reset.
    pub const fn turn_started(&self) -> bool {
        self.action_used || self.bonus_action_used
    }

    pub fn reset_turn(&mut self) {
        self.action_used = false;
        self.bonus_action_used = false;
    }

    pub fn reset_death_saves(&mut self) {
        self.death_save_successes = 0;
        self.death_save_failures = 0;
    }
}

/// One player-versus-monster encounter.
///
/// Created by [`CombatEngine::start`](crate::engine::CombatEngine::start) and
/// mutated only through [`CombatEngine`](crate::engine::CombatEngine).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    pub party: PlayerCombatState,
    pub monster: MonsterInstance,
    /// Acting order; only the first entry matters.
    pub initiative: Vec<InitiativeEntry>,
    pub round: u32,
    pub range: u32,
    pub log: Vec<String>,
    pub phase: CombatPhase,
    pub xp_earned: u32,
    /// Item id to units spent.
    pub ammo_used: BTreeMap<String, u32>,
    pub pending_loot: Vec<LootDrop>,
    pub level_up_pending: bool,
    pub monster_fled: bool,
    pub settled: bool,
}

impl CombatSession {
    pub fn new(
        party: PlayerCombatState,
        monster: MonsterInstance,
        initiative: Vec<InitiativeEntry>,
        range: u32,
    ) -> Self {
        Self {
            party,
            monster,
            initiative,
            round: 1,
            range,
            log: Vec::new(),
            phase: CombatPhase::Active,
            xp_earned: 0,
            ammo_used: BTreeMap::new(),
            pending_loot: Vec::new(),
            level_up_pending: false,
            monster_fled: false,
            settled: false,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub(crate) fn narrate(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(round = self.round, "{line}");
        self.log.push(line);
    }

    /// Log lines appended since `mark`.
    pub(crate) fn lines_since(&self, mark: usize) -> Vec<String> {
        self.log.get(mark..).map(<[String]>::to_vec).unwrap_or_default()
    }

    pub(crate) fn record_ammo(&mut self, item_id: String) {
        *self.ammo_used.entry(item_id).or_insert(0) += 1;
    }
}
