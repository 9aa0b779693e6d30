//! Player attack processing.

use crate::character::{EquipSlot, PlayerCharacter};
use crate::combat::{
    Hand, WeaponProfile, ammunition_source, armor_class, check_two_weapon, resolve_attack_roll,
    roll_damage,
};
use crate::env::{CombatEnv, ItemDefinition, RngOracle};

use super::{AttackCommand, CombatEngine, CombatError, CombatPhase};

/// Fully validated attack, ready to resolve.
struct PlannedAttack {
    profile: WeaponProfile,
    range: u32,
    ammunition: Option<EquipSlot>,
}

impl CombatEngine<'_> {
    /// Processes one player attack and, unless the fight ends, the monster's
    /// response.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any state changes:
    /// `WrongPhase`, `TwoWeapon`, `NotAWeapon`, `NotThrowable`,
    /// `NotInMeleeRange`, `OutOfRange` and `NoAmmunition`.
    pub fn player_attack(
        &mut self,
        env: CombatEnv<'_>,
        rng: &mut dyn RngOracle,
        player: &mut PlayerCharacter,
        command: &AttackCommand,
    ) -> Result<Vec<String>, CombatError> {
        self.require_phase(CombatPhase::Active)?;
        let player_ac = armor_class(player, env.items(), env.config())?;
        let planned = self.plan_attack(env, player, command)?;

        let mark = self.session.log.len();
        self.begin_turn(command.hand);
        self.commit_move(planned.range);
        if let Some(item_id) = planned
            .ammunition
            .and_then(|slot| player.equipment.consume_one(slot))
        {
            self.session.record_ammo(item_id);
        }

        self.resolve_player_attack(env, rng, player, &planned.profile);
        match command.hand {
            Hand::Main => self.session.party.action_used = true,
            Hand::Off => self.session.party.bonus_action_used = true,
        }

        if !self.session.monster.alive {
            self.monster_slain(env, rng, player);
        } else {
            self.monster_turn(rng, player, player_ac);
        }
        Ok(self.session.lines_since(mark))
    }

    /// Runs every check for `command` without mutating anything.
    fn plan_attack(
        &self,
        env: CombatEnv<'_>,
        player: &PlayerCharacter,
        command: &AttackCommand,
    ) -> Result<PlannedAttack, CombatError> {
        let equipped = |slot: EquipSlot| -> Result<Option<ItemDefinition>, CombatError> {
            player
                .equipment
                .equipped(slot)
                .map(|stack| env.item(&stack.item_id))
                .transpose()
                .map_err(CombatError::from)
        };

        if command.hand == Hand::Off {
            let main = equipped(EquipSlot::MainHand)?;
            let off = equipped(EquipSlot::OffHand)?;
            check_two_weapon(
                main.as_ref(),
                off.as_ref(),
                self.session.party.bonus_action_used,
            )?;
        }

        let range = command.movement.apply(self.session.range);
        let slot = command.acting_slot();
        let level = player.level(env.advancement());
        let profile = match equipped(slot)? {
            Some(definition) => WeaponProfile::resolve(
                &definition,
                player,
                level,
                command.hand,
                command.thrown,
                player.equipment.is_empty(EquipSlot::OffHand),
            )?,
            None if command.thrown => {
                return Err(CombatError::NotThrowable {
                    weapon: crate::character::UNARMED.to_string(),
                });
            }
            None => WeaponProfile::unarmed(player, level, command.hand, env.config()),
        };
        profile.check_range(range)?;

        let ammunition = ammunition_source(&profile, slot);
        if ammunition.is_some_and(|source| player.equipment.is_empty(source)) {
            return Err(CombatError::NoAmmunition {
                weapon: profile.item_id.clone(),
            });
        }

        Ok(PlannedAttack {
            profile,
            range,
            ammunition,
        })
    }

    /// A main action starts a new turn; bonus attacks share the current one.
    fn begin_turn(&mut self, hand: Hand) {
        if hand == Hand::Main {
            if self.session.party.turn_started() {
                self.session.round += 1;
            }
            self.session.party.reset_turn();
        }
    }

    fn commit_move(&mut self, range: u32) {
        let previous = self.session.range;
        if range == previous {
            return;
        }
        self.session.range = range;
        let verb = if range < previous { "closes" } else { "backs off" };
        let line = format!("{} {verb} to range {range}.", self.session.party.name);
        self.session.narrate(line);
    }

    fn resolve_player_attack(
        &mut self,
        env: CombatEnv<'_>,
        rng: &mut dyn RngOracle,
        player: &PlayerCharacter,
        profile: &WeaponProfile,
    ) {
        let mode = profile.roll_mode(self.session.range, player.race);
        let target_ac = self.session.monster.armor_class;
        let result = resolve_attack_roll(rng, profile.attack_bonus(), target_ac, mode);
        tracing::debug!(
            weapon = %profile.item_id,
            ?mode,
            roll = result.roll,
            total = result.total,
            target_ac,
            hit = result.hit,
            "player attack roll"
        );

        let attacker = self.session.party.name.clone();
        let target = self.session.monster.name().to_string();
        if !result.hit {
            let reason = if result.natural_1 { " (natural 1)" } else { "" };
            self.session.narrate(format!(
                "{attacker} attacks {target} with {}: {} vs AC {target_ac}, miss{reason}.",
                profile.name, result.total
            ));
            return;
        }

        let raw = roll_damage(&profile.damage, profile.damage_modifier, result.critical, rng);
        let dealt = self
            .session
            .monster
            .template
            .affinities
            .apply(raw, profile.damage_type);
        let hp_left = self.session.monster.take_damage(dealt);

        let level = player.level(env.advancement());
        let multiplier = env.advancement().xp_multiplier(level);
        let xp = (f64::from(dealt) * multiplier).floor() as u32;
        self.session.xp_earned = self.session.xp_earned.saturating_add(xp);

        let crit = if result.critical { " Critical hit!" } else { "" };
        self.session.narrate(format!(
            "{attacker} attacks {target} with {}: {} vs AC {target_ac}, hit.{crit} {dealt} {} damage ({hp_left} HP left).",
            profile.name, result.total, profile.damage_type
        ));
    }

    /// Rolls loot, awards kill XP and closes the fight.
    fn monster_slain(&mut self, env: CombatEnv<'_>, rng: &mut dyn RngOracle, player: &PlayerCharacter) {
        let session = &mut *self.session;
        let loot = session
            .monster
            .template
            .loot
            .roll(rng, env.config().default_loot_rolls);
        session.xp_earned = session.xp_earned.saturating_add(session.monster.template.xp);
        session.level_up_pending = env.advancement().crosses_threshold(
            player.experience,
            player.experience.saturating_add(session.xp_earned),
        );
        session.pending_loot = loot;
        session.phase = CombatPhase::Loot;

        let name = session.monster.name().to_string();
        session.narrate(format!("{name} is slain!"));
        let drops = session
            .pending_loot
            .iter()
            .map(|drop| format!("{} x{}", drop.item_id, drop.quantity))
            .collect::<Vec<_>>();
        if !drops.is_empty() {
            let line = format!("Loot: {}.", drops.join(", "));
            session.narrate(line);
        }
        if session.level_up_pending {
            let line = format!("{} is ready to level up!", session.party.name);
            session.narrate(line);
        }
        tracing::info!(
            monster = %session.monster.template.id,
            xp_earned = session.xp_earned,
            drops = session.pending_loot.len(),
            "monster slain"
        );
    }
}
