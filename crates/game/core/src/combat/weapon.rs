//! Player weapon profiles: bonuses, range validity and two-weapon rules.

use crate::character::{Ability, EquipSlot, PlayerCharacter, Race, UNARMED};
use crate::combat::DamageType;
use crate::config::CombatConfig;
use crate::dice::{AdvantageSources, RollMode, proficiency_bonus};
use crate::engine::{CombatError, TwoWeaponError};
use crate::env::{ItemDefinition, ItemTag, WeaponStyle};

/// Which action economy slot an attack spends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Hand {
    /// The turn's action. Resets the per-turn flags.
    #[default]
    Main,
    /// Two-weapon fighting bonus action.
    Off,
}

/// How an attack reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    Melee,
    Ranged,
    Thrown,
}

/// Everything needed to roll one player attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeaponProfile {
    pub item_id: String,
    pub name: String,
    pub style: AttackStyle,
    pub damage: String,
    pub damage_type: DamageType,
    /// Ability modifier added to the attack roll.
    pub ability_modifier: i32,
    /// Zero when the class is not proficient.
    pub proficiency_bonus: i32,
    /// Added to damage; zero for off-hand attacks.
    pub damage_modifier: i32,
    pub normal_range: u32,
    pub long_range: u32,
    pub heavy: bool,
    pub needs_ammunition: bool,
}

impl WeaponProfile {
    /// Unarmed strike with the configured damage expression.
    pub fn unarmed(player: &PlayerCharacter, level: u32, hand: Hand, config: &CombatConfig) -> Self {
        let ability_modifier = player.modifier(Ability::Strength);
        Self {
            item_id: UNARMED.to_string(),
            name: "fists".to_string(),
            style: AttackStyle::Melee,
            damage: config.unarmed_damage.clone(),
            damage_type: DamageType::Bludgeoning,
            ability_modifier,
            proficiency_bonus: proficiency_bonus(level),
            damage_modifier: damage_modifier(ability_modifier, hand),
            normal_range: 0,
            long_range: 0,
            heavy: false,
            needs_ammunition: false,
        }
    }

    /// Builds the profile for the item in an attacking slot.
    ///
    /// `off_hand_empty` selects versatile two-handed damage.
    ///
    /// # Errors
    ///
    /// - `NotAWeapon` if the item has no weapon data
    /// - `NotThrowable` if `thrown` is requested for an item without the `thrown` tag
    pub fn resolve(
        definition: &ItemDefinition,
        player: &PlayerCharacter,
        level: u32,
        hand: Hand,
        thrown: bool,
        off_hand_empty: bool,
    ) -> Result<Self, CombatError> {
        let Some(weapon) = definition.weapon() else {
            return Err(CombatError::NotAWeapon {
                item: definition.id.clone(),
            });
        };
        if thrown && !definition.has_tag(ItemTag::Thrown) {
            return Err(CombatError::NotThrowable {
                weapon: definition.id.clone(),
            });
        }

        let style = match (thrown, weapon.style) {
            (true, _) => AttackStyle::Thrown,
            (false, WeaponStyle::Melee) => AttackStyle::Melee,
            (false, WeaponStyle::Ranged) => AttackStyle::Ranged,
        };

        let strength = player.modifier(Ability::Strength);
        let dexterity = player.modifier(Ability::Dexterity);
        let ability_modifier = if definition.has_tag(ItemTag::Finesse) {
            strength.max(dexterity)
        } else if weapon.style == WeaponStyle::Ranged {
            dexterity
        } else {
            strength
        };

        let proficient = player.class.is_proficient(&definition.id, weapon.category);
        let damage = match (&weapon.versatile_damage, style) {
            (Some(versatile), AttackStyle::Melee) if off_hand_empty => versatile.clone(),
            _ => weapon.damage.clone(),
        };

        Ok(Self {
            item_id: definition.id.clone(),
            name: definition.name.clone(),
            style,
            damage,
            damage_type: weapon.damage_type,
            ability_modifier,
            proficiency_bonus: if proficient { proficiency_bonus(level) } else { 0 },
            damage_modifier: damage_modifier(ability_modifier, hand),
            normal_range: weapon.normal_range,
            long_range: weapon.long_range,
            heavy: definition.has_tag(ItemTag::Heavy),
            needs_ammunition: !thrown && definition.has_tag(ItemTag::Ammunition),
        })
    }

    pub const fn attack_bonus(&self) -> i32 {
        self.ability_modifier + self.proficiency_bonus
    }

    /// Whether this attack can reach a target `range` bands away.
    ///
    /// # Errors
    ///
    /// - melee: `NotInMeleeRange` unless range is 0
    /// - ranged/thrown: `OutOfRange` beyond long range
    pub fn check_range(&self, range: u32) -> Result<(), CombatError> {
        match self.style {
            AttackStyle::Melee if range > 0 => Err(CombatError::NotInMeleeRange {
                weapon: self.item_id.clone(),
                range,
            }),
            AttackStyle::Ranged | AttackStyle::Thrown if range > self.long_range => {
                Err(CombatError::OutOfRange {
                    weapon: self.item_id.clone(),
                    range,
                    long_range: self.long_range,
                })
            }
            _ => Ok(()),
        }
    }

    /// Disadvantage sources for an attack at `range` by a wielder of `race`.
    pub fn roll_mode(&self, range: u32, race: Race) -> RollMode {
        let mut sources = AdvantageSources::new();
        if matches!(self.style, AttackStyle::Ranged | AttackStyle::Thrown) {
            if range == 0 {
                sources.impose_disadvantage();
            }
            if range > self.normal_range {
                sources.impose_disadvantage();
            }
        }
        if self.heavy && race.is_small() {
            sources.impose_disadvantage();
        }
        sources.mode()
    }
}

fn damage_modifier(ability_modifier: i32, hand: Hand) -> i32 {
    match hand {
        Hand::Main => ability_modifier,
        Hand::Off => 0,
    }
}

/// Checks two-weapon fighting eligibility.
///
/// Both hands must hold light weapons, the main-hand weapon must not need
/// reloading, and the bonus action must still be available.
pub fn check_two_weapon(
    main_hand: Option<&ItemDefinition>,
    off_hand: Option<&ItemDefinition>,
    bonus_action_used: bool,
) -> Result<(), TwoWeaponError> {
    let main = main_hand.ok_or(TwoWeaponError::MainHandEmpty)?;
    let off = off_hand.ok_or(TwoWeaponError::OffHandEmpty)?;
    for item in [main, off] {
        if !item.has_tag(ItemTag::Light) {
            return Err(TwoWeaponError::NotLight(item.id.clone()));
        }
    }
    if main.has_tag(ItemTag::Loading) {
        return Err(TwoWeaponError::MainHandLoading(main.id.clone()));
    }
    if bonus_action_used {
        return Err(TwoWeaponError::BonusActionUsed);
    }
    Ok(())
}

/// Slot that supplies the projectile for an attack, if any.
pub fn ammunition_source(profile: &WeaponProfile, weapon_slot: EquipSlot) -> Option<EquipSlot> {
    match profile.style {
        AttackStyle::Thrown => Some(weapon_slot),
        _ if profile.needs_ammunition => Some(EquipSlot::Ammunition),
        _ => None,
    }
}
