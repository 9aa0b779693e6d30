//! Load-time validation of content.
//!
//! Every dice expression, loot weight, flee threshold and range is checked
//! once here so the engine can treat content as well-formed. The engine still
//! degrades gracefully on bad data, but a store that passes validation never
//! hits those fallbacks.

use std::collections::HashSet;

use encounter_core::dice::{DiceExpr, DiceParseError};
use encounter_core::env::{ActionReach, ItemKind};
use encounter_core::error::{ErrorSeverity, GameError};
use encounter_core::loot::LootTable;
use encounter_core::{AdvancementTable, CombatConfig, ItemDefinition, MonsterTemplate};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("{owner}: {field} is not a valid dice expression")]
    InvalidDice {
        owner: String,
        field: &'static str,
        #[source]
        source: DiceParseError,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("monster '{monster}': flee threshold {value} is outside [0, 1]")]
    InvalidFleeThreshold { monster: String, value: f64 },

    #[error("monster '{monster}' has no actions")]
    NoActions { monster: String },

    #[error("monster '{monster}': action '{action}' has long range {long} below normal range {normal}")]
    InvalidActionRange {
        monster: String,
        action: String,
        normal: u32,
        long: u32,
    },

    #[error("item '{item}': long range {long} below normal range {normal}")]
    InvalidItemRange { item: String, normal: u32, long: u32 },

    #[error("monster '{monster}': loot tier '{tier}' has no positive weights")]
    EmptyLootTier { monster: String, tier: String },

    #[error("monster '{monster}': loot item '{item}' has min {min} above max {max}")]
    InvalidQuantity {
        monster: String,
        item: String,
        min: u32,
        max: u32,
    },

    #[error("monster '{monster}' drops unknown item '{item}'")]
    UnknownLootItem { monster: String, item: String },

    #[error("advancement table is empty")]
    EmptyAdvancement,

    #[error("advancement level {level}: xp multiplier {value} must be non-negative")]
    InvalidMultiplier { level: u32, value: f64 },
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Data
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDice { .. } => "CONTENT_INVALID_DICE",
            Self::DuplicateId { .. } => "CONTENT_DUPLICATE_ID",
            Self::InvalidFleeThreshold { .. } => "CONTENT_INVALID_FLEE_THRESHOLD",
            Self::NoActions { .. } => "CONTENT_NO_ACTIONS",
            Self::InvalidActionRange { .. } | Self::InvalidItemRange { .. } => {
                "CONTENT_INVALID_RANGE"
            }
            Self::EmptyLootTier { .. } => "CONTENT_EMPTY_LOOT_TIER",
            Self::InvalidQuantity { .. } => "CONTENT_INVALID_QUANTITY",
            Self::UnknownLootItem { .. } => "CONTENT_UNKNOWN_LOOT_ITEM",
            Self::EmptyAdvancement => "CONTENT_EMPTY_ADVANCEMENT",
            Self::InvalidMultiplier { .. } => "CONTENT_INVALID_MULTIPLIER",
        }
    }
}

fn dice(owner: &str, field: &'static str, expression: &str) -> Result<DiceExpr, ContentError> {
    DiceExpr::parse(expression).map_err(|source| ContentError::InvalidDice {
        owner: owner.to_string(),
        field,
        source,
    })
}

fn unique<'a>(kind: &'static str, ids: impl IntoIterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_items(items: &[ItemDefinition]) -> Result<(), ContentError> {
    unique("item", items.iter().map(|item| item.id.as_str()))?;
    for item in items {
        let ItemKind::Weapon(weapon) = &item.kind else {
            continue;
        };
        dice(&item.id, "damage", &weapon.damage)?;
        if let Some(versatile) = &weapon.versatile_damage {
            dice(&item.id, "versatile_damage", versatile)?;
        }
        if weapon.long_range < weapon.normal_range {
            return Err(ContentError::InvalidItemRange {
                item: item.id.clone(),
                normal: weapon.normal_range,
                long: weapon.long_range,
            });
        }
    }
    Ok(())
}

pub fn validate_monsters(monsters: &[MonsterTemplate]) -> Result<(), ContentError> {
    unique("monster", monsters.iter().map(|monster| monster.id.as_str()))?;
    for monster in monsters {
        dice(&monster.id, "hit_dice", &monster.hit_dice)?;

        let threshold = monster.behavior.flee_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ContentError::InvalidFleeThreshold {
                monster: monster.id.clone(),
                value: threshold,
            });
        }

        if monster.actions.is_empty() {
            return Err(ContentError::NoActions {
                monster: monster.id.clone(),
            });
        }
        for action in &monster.actions {
            dice(&monster.id, "action damage", &action.damage)?;
            if let ActionReach::Ranged { normal, long } = action.reach {
                if long < normal {
                    return Err(ContentError::InvalidActionRange {
                        monster: monster.id.clone(),
                        action: action.name.clone(),
                        normal,
                        long,
                    });
                }
            }
        }

        validate_loot(&monster.id, &monster.loot)?;
    }
    Ok(())
}

fn validate_loot(monster: &str, table: &LootTable) -> Result<(), ContentError> {
    let quantity = |item: &str, min: u32, max: u32| {
        if min > max {
            Err(ContentError::InvalidQuantity {
                monster: monster.to_string(),
                item: item.to_string(),
                min,
                max,
            })
        } else {
            Ok(())
        }
    };

    for drop in &table.guaranteed {
        quantity(&drop.item, drop.min, drop.max)?;
    }
    for tier in &table.tiers {
        if tier.entries.iter().all(|entry| entry.weight == 0) {
            return Err(ContentError::EmptyLootTier {
                monster: monster.to_string(),
                tier: tier.name.clone(),
            });
        }
        for entry in &tier.entries {
            quantity(&entry.item, entry.min, entry.max)?;
        }
    }
    Ok(())
}

pub fn validate_advancement(table: &AdvancementTable) -> Result<(), ContentError> {
    if table.levels.is_empty() {
        return Err(ContentError::EmptyAdvancement);
    }
    for row in &table.levels {
        if row.xp_multiplier.is_nan() || row.xp_multiplier < 0.0 {
            return Err(ContentError::InvalidMultiplier {
                level: row.level,
                value: row.xp_multiplier,
            });
        }
    }
    Ok(())
}

pub fn validate_config(config: &CombatConfig) -> Result<(), ContentError> {
    dice("combat config", "unarmed_damage", &config.unarmed_damage)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::env::{MonsterAction, MonsterBehavior, WeaponCategory, WeaponData};
    use encounter_core::loot::{LootEntry, LootTier};
    use encounter_core::{AdvancementLevel, DamageType};

    fn orc() -> MonsterTemplate {
        MonsterTemplate {
            id: "orc".into(),
            name: "Orc".into(),
            armor_class: 13,
            hit_dice: "2d8+6".into(),
            average_hp: 15,
            abilities: Default::default(),
            actions: vec![MonsterAction::melee("Greataxe", 0, 5, "1d12+3", DamageType::Slashing)],
            affinities: Default::default(),
            behavior: MonsterBehavior::default(),
            loot: Default::default(),
            xp: 100,
        }
    }

    #[test]
    fn accepts_well_formed_monster() {
        assert_eq!(validate_monsters(&[orc()]), Ok(()));
    }

    #[test]
    fn rejects_bad_hit_dice() {
        let mut monster = orc();
        monster.hit_dice = "2x8".into();
        let error = validate_monsters(&[monster]).unwrap_err();
        assert_eq!(error.error_code(), "CONTENT_INVALID_DICE");
        assert_eq!(error.severity(), ErrorSeverity::Data);
    }

    #[test]
    fn rejects_flee_threshold_out_of_range() {
        let mut monster = orc();
        monster.behavior.flee_threshold = 1.5;
        assert!(matches!(
            validate_monsters(&[monster]),
            Err(ContentError::InvalidFleeThreshold { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        assert_eq!(
            validate_monsters(&[orc(), orc()]),
            Err(ContentError::DuplicateId {
                kind: "monster",
                id: "orc".into()
            })
        );
    }

    #[test]
    fn rejects_zero_weight_tier() {
        let mut monster = orc();
        monster.loot.tiers.push(LootTier {
            name: "common".into(),
            weight: 1,
            entries: vec![LootEntry::new("copper", 0, 1, 3)],
        });
        assert!(matches!(
            validate_monsters(&[monster]),
            Err(ContentError::EmptyLootTier { .. })
        ));
    }

    #[test]
    fn rejects_inverted_weapon_range() {
        let bow = ItemDefinition::new(
            "bow",
            "Bow",
            ItemKind::Weapon(WeaponData::ranged(
                WeaponCategory::Simple,
                "1d6",
                DamageType::Piercing,
                4,
                2,
            )),
        );
        assert!(matches!(
            validate_items(&[bow]),
            Err(ContentError::InvalidItemRange { .. })
        ));
    }

    #[test]
    fn advancement_needs_rows() {
        assert_eq!(
            validate_advancement(&AdvancementTable::default()),
            Err(ContentError::EmptyAdvancement)
        );
        let table = AdvancementTable::new(vec![AdvancementLevel::new(1, 0, 1.0)]);
        assert_eq!(validate_advancement(&table), Ok(()));
    }
}
