//! Combat session orchestration.
//!
//! [`CombatEngine`] is the only writer of a [`CombatSession`]. Every entry
//! point validates its command completely before touching the session or
//! the player record, so a rejected command leaves both unchanged and can be
//! corrected and retried.
//!
//! ```text
//! start ──► Active ──player_attack──► Active | DeathSaves | Loot | Victory
//!             ▲                            │
//!             └──────── death_save ◄───────┘ ──► Victory | Defeat
//! ```
//!
//! Each call returns the narrative lines it appended to the session log.

mod command;
mod death;
mod errors;
mod monster_turn;
mod phase;
mod player_turn;
mod session;

pub use command::{AttackCommand, MoveDirection};
pub use errors::{CombatError, TwoWeaponError};
pub use phase::CombatPhase;
pub use session::{CombatSession, PlayerCombatState};

use std::collections::BTreeMap;

use crate::character::PlayerCharacter;
use crate::combat::{CombatantId, InitiativeEntry, armor_class, order_initiative};
use crate::env::{CombatEnv, RngOracle};
use crate::loot::LootDrop;
use crate::monster::MonsterInstance;

/// Settlement of a finished fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSummary {
    pub outcome: CombatPhase,
    /// XP credited to the player; zero on defeat.
    pub xp_earned: u32,
    pub loot: Vec<LootDrop>,
    pub ammo_used: BTreeMap<String, u32>,
    pub level_up: bool,
    pub monster_fled: bool,
}

pub struct CombatEngine<'a> {
    session: &'a mut CombatSession,
}

impl<'a> CombatEngine<'a> {
    pub fn new(session: &'a mut CombatSession) -> Self {
        Self { session }
    }

    /// Opens a fight against `monster_id` in `environment_id`.
    ///
    /// Rolls monster HP, the starting range and initiative. When the monster
    /// wins initiative its opening turn is resolved before returning, and any
    /// damage is already applied to `player`.
    ///
    /// # Errors
    ///
    /// `CombatError::Oracle` when the monster or an equipped item is unknown.
    pub fn start(
        env: CombatEnv<'_>,
        rng: &mut dyn RngOracle,
        monster_id: &str,
        environment_id: &str,
        player: &mut PlayerCharacter,
    ) -> Result<CombatSession, CombatError> {
        let template = env.monster(monster_id)?;
        let player_ac = armor_class(player, env.items(), env.config())?;

        let monster = MonsterInstance::spawn(template, rng);
        let range = match env.environments().category(environment_id) {
            Some(category) => category.roll_starting_range(rng),
            None => {
                tracing::debug!(environment = %environment_id, "unknown environment, default range");
                env.config().unknown_environment_range
            }
        };

        let mut initiative = vec![
            InitiativeEntry::roll(
                CombatantId::Player,
                player.name.clone(),
                player.abilities.dexterity,
                rng,
            ),
            InitiativeEntry::roll(
                CombatantId::Monster(0),
                monster.name(),
                monster.template.abilities.dexterity,
                rng,
            ),
        ];
        order_initiative(&mut initiative);
        let monster_first = initiative
            .first()
            .is_some_and(|entry| entry.combatant != CombatantId::Player);

        let mut session = CombatSession::new(
            PlayerCombatState::from_player(player),
            monster,
            initiative,
            range,
        );
        tracing::info!(
            monster = %monster_id,
            environment = %environment_id,
            range,
            monster_hp = session.monster.max_hp,
            monster_first,
            "combat started"
        );

        let opening = format!(
            "A {} ({} HP) appears at range {}.",
            session.monster.name(),
            session.monster.max_hp,
            range
        );
        session.narrate(opening);
        let order = session
            .initiative
            .iter()
            .map(|entry| format!("{} {}", entry.name, entry.total))
            .collect::<Vec<_>>()
            .join(", ");
        session.narrate(format!("Initiative: {order}."));

        if monster_first {
            CombatEngine::new(&mut session).monster_turn(rng, player, player_ac);
        }
        Ok(session)
    }

    pub fn session(&self) -> &CombatSession {
        self.session
    }

    /// Settles a finished fight.
    ///
    /// Fight XP is written into the player's experience on `loot` and
    /// `victory` and forfeited on `defeat`.
    ///
    /// # Errors
    ///
    /// - `CombatNotFinished` unless the phase is terminal
    /// - `AlreadySettled` on a second call
    pub fn end_combat(&mut self, player: &mut PlayerCharacter) -> Result<CombatSummary, CombatError> {
        let session = &mut *self.session;
        if !session.phase.is_terminal() {
            return Err(CombatError::CombatNotFinished(session.phase));
        }
        if session.settled {
            return Err(CombatError::AlreadySettled);
        }

        let keeps = session.phase.keeps_experience();
        let xp_earned = if keeps { session.xp_earned } else { 0 };
        player.experience = player.experience.saturating_add(xp_earned);
        player.hp = session.party.hp;
        session.settled = true;

        tracing::info!(
            outcome = %session.phase,
            xp_earned,
            loot = session.pending_loot.len(),
            "combat settled"
        );

        Ok(CombatSummary {
            outcome: session.phase,
            xp_earned,
            loot: if keeps { session.pending_loot.clone() } else { Vec::new() },
            ammo_used: session.ammo_used.clone(),
            level_up: keeps && session.level_up_pending,
            monster_fled: session.monster_fled,
        })
    }

    fn require_phase(&self, expected: CombatPhase) -> Result<(), CombatError> {
        if self.session.phase == expected {
            Ok(())
        } else {
            Err(CombatError::WrongPhase {
                expected,
                actual: self.session.phase,
            })
        }
    }

    /// Sets player HP in both the session and the player record.
    fn set_player_hp(&mut self, player: &mut PlayerCharacter, hp: u32) {
        self.session.party.hp = hp;
        player.hp = hp;
    }
}
