use crate::character::PlayerCharacter;
use crate::combat::{AttackResult, apply_damage, resolve_attack_roll};
use crate::dice::{RollMode, roll_expression};
use crate::env::{MonsterAction, RngOracle};
use crate::monster::{MonsterChoice, decide};

use super::{CombatEngine, CombatPhase};

impl CombatEngine<'_> {
    /// Resolves the monster's turn: AI decision, movement, then the chosen
    /// action. Does nothing unless the session is active and the monster alive.
    pub(super) fn monster_turn(
        &mut self,
        rng: &mut dyn RngOracle,
        player: &mut PlayerCharacter,
        player_ac: i32,
    ) {
        if self.session.phase != CombatPhase::Active || !self.session.monster.alive {
            return;
        }

        let decision = decide(&self.session.monster, self.session.range, true);
        let index = match decision.choice {
            MonsterChoice::Flee => {
                self.monster_flees();
                return;
            }
            MonsterChoice::Attack(index) => Some(index),
            MonsterChoice::None => None,
        };

        self.monster_moves(decision.movement);
        let Some(action) = index.and_then(|i| self.session.monster.template.actions.get(i).cloned())
        else {
            let line = format!("{} has nothing in reach.", self.session.monster.name());
            self.session.narrate(line);
            return;
        };

        let result = self.monster_attack_roll(rng, &action, player_ac, RollMode::Normal);
        if !result.hit {
            return;
        }

        let damage = roll_expression(&action.damage, rng, result.critical).max(1) as u32;
        let hp = apply_damage(self.session.party.hp, damage);
        self.set_player_hp(player, hp);
        let line = format!(
            "{} takes {damage} {} damage ({hp} HP left).",
            self.session.party.name, action.damage_type
        );
        self.session.narrate(line);

        if hp == 0 {
            self.player_falls();
        }
    }

    /// Rolls and narrates one monster attack.
    pub(super) fn monster_attack_roll(
        &mut self,
        rng: &mut dyn RngOracle,
        action: &MonsterAction,
        player_ac: i32,
        mode: RollMode,
    ) -> AttackResult {
        let result = resolve_attack_roll(rng, action.attack_bonus, player_ac, mode);
        tracing::debug!(
            action = %action.name,
            ?mode,
            roll = result.roll,
            total = result.total,
            player_ac,
            hit = result.hit,
            "monster attack roll"
        );
        let outcome = match (result.hit, result.critical) {
            (true, true) => "critical hit",
            (true, false) => "hit",
            (false, _) => "miss",
        };
        let line = format!(
            "{} uses {}: {} vs AC {player_ac}, {outcome}.",
            self.session.monster.name(),
            action.name,
            result.total
        );
        self.session.narrate(line);
        result
    }

    pub(super) fn monster_moves(&mut self, movement: i32) {
        let previous = self.session.range;
        let range = previous.saturating_add_signed(movement);
        if range == previous {
            return;
        }
        self.session.range = range;
        let verb = if range < previous { "advances" } else { "retreats" };
        let line = format!("{} {verb} to range {range}.", self.session.monster.name());
        self.session.narrate(line);
    }

    fn monster_flees(&mut self) {
        self.session.monster_fled = true;
        self.session.phase = CombatPhase::Victory;
        let line = format!("{} flees the fight!", self.session.monster.name());
        self.session.narrate(line);
        tracing::info!(monster = %self.session.monster.template.id, "monster fled");
    }

    fn player_falls(&mut self) {
        let party = &mut self.session.party;
        party.is_unconscious = true;
        party.is_stable = false;
        party.reset_death_saves();
        self.session.phase = CombatPhase::DeathSaves;
        let line = format!("{} falls unconscious!", self.session.party.name);
        self.session.narrate(line);
        tracing::info!("player dropped to 0 hp");
    }
}
