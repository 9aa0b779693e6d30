//! Death saving throws.
//!
//! | d20    | effect                                   |
//! |--------|------------------------------------------|
//! | 20     | revive at 1 HP, back to `active`         |
//! | 10..19 | one success; three → stable, `victory`   |
//! | 2..9   | one failure; three → `defeat`            |
//! | 1      | two failures                             |
//!
//! While the player is still down the monster gets one attack with
//! advantage. A hit adds a failure instead of damage. A melee attack at
//! range 0 always hits as a critical and adds two.

use crate::character::PlayerCharacter;
use crate::combat::armor_class;
use crate::config::CombatConfig;
use crate::dice::RollMode;
use crate::env::{CombatEnv, RngOracle};
use crate::monster::{MonsterChoice, decide};

use super::{CombatEngine, CombatError, CombatPhase};

impl CombatEngine<'_> {
    /// Rolls one death save for the unconscious player.
    ///
    /// # Errors
    ///
    /// `WrongPhase` unless the session is in `death_saves`.
    pub fn death_save(
        &mut self,
        env: CombatEnv<'_>,
        rng: &mut dyn RngOracle,
        player: &mut PlayerCharacter,
    ) -> Result<Vec<String>, CombatError> {
        self.require_phase(CombatPhase::DeathSaves)?;
        let player_ac = armor_class(player, env.items(), env.config())?;

        let mark = self.session.log.len();
        self.session.round += 1;
        let roll = rng.roll_d20();
        tracing::debug!(roll, "death save");

        match roll {
            CombatConfig::D20 => {
                self.revive(player);
                return Ok(self.session.lines_since(mark));
            }
            1 => self.add_failures(2, "natural 1, two failures"),
            r if r >= CombatConfig::DEATH_SAVE_DC => self.add_success(),
            _ => self.add_failures(1, "failure"),
        }

        if self.session.phase == CombatPhase::DeathSaves {
            self.attack_helpless(rng, player_ac);
        }
        Ok(self.session.lines_since(mark))
    }

    fn revive(&mut self, player: &mut PlayerCharacter) {
        self.set_player_hp(player, 1);
        let party = &mut self.session.party;
        party.is_unconscious = false;
        party.is_stable = false;
        party.reset_death_saves();
        self.session.phase = CombatPhase::Active;
        let line = format!("Natural 20! {} surges back to 1 HP.", self.session.party.name);
        self.session.narrate(line);
        tracing::info!("player revived");
    }

    fn add_success(&mut self) {
        let party = &mut self.session.party;
        party.death_save_successes = party
            .death_save_successes
            .saturating_add(1)
            .min(CombatConfig::DEATH_SAVES_TO_STABILIZE);
        let successes = party.death_save_successes;
        self.session.narrate(format!(
            "Death save: success ({successes}/{}).",
            CombatConfig::DEATH_SAVES_TO_STABILIZE
        ));

        if successes >= CombatConfig::DEATH_SAVES_TO_STABILIZE {
            self.session.party.is_stable = true;
            self.session.phase = CombatPhase::Victory;
            let line = format!("{} stabilizes.", self.session.party.name);
            self.session.narrate(line);
            tracing::info!("player stabilized");
        }
    }

    fn add_failures(&mut self, count: u8, label: &str) {
        let party = &mut self.session.party;
        party.death_save_failures = party
            .death_save_failures
            .saturating_add(count)
            .min(CombatConfig::DEATH_SAVES_TO_DIE);
        let failures = party.death_save_failures;
        self.session.narrate(format!(
            "Death save: {label} ({failures}/{}).",
            CombatConfig::DEATH_SAVES_TO_DIE
        ));

        if failures >= CombatConfig::DEATH_SAVES_TO_DIE {
            self.session.phase = CombatPhase::Defeat;
            let line = format!("{} dies.", self.session.party.name);
            self.session.narrate(line);
            tracing::info!("player died");
        }
    }

    /// The monster's single attack against the downed player.
    fn attack_helpless(&mut self, rng: &mut dyn RngOracle, player_ac: i32) {
        let decision = decide(&self.session.monster, self.session.range, false);
        self.monster_moves(decision.movement);
        let action = match decision.choice {
            MonsterChoice::Attack(index) => self.session.monster.template.actions.get(index).cloned(),
            MonsterChoice::Flee | MonsterChoice::None => None,
        };
        let Some(action) = action else {
            return;
        };

        let mut result = self.monster_attack_roll(rng, &action, player_ac, RollMode::Advantage);
        if action.is_melee() && self.session.range == 0 && !result.critical {
            result = result.automatic_critical();
            self.session.narrate("Melee strike on a helpless target lands as a critical.");
        }
        if !result.hit {
            return;
        }
        let failures = if result.critical { 2 } else { 1 };
        self.add_failures(failures, "struck while down");
    }
}
