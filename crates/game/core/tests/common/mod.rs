#![allow(dead_code)]

use std::collections::HashMap;

use encounter_core::env::{
    ActionReach, Aggression, ArmorData, ArmorWeight, ItemKind, ItemTag, MonsterAction,
    MonsterBehavior, WeaponCategory, WeaponData,
};
use encounter_core::{
    AbilityScores, AdvancementLevel, AdvancementTable, CharacterClass, CombatConfig, CombatEnv,
    DamageAffinities, DamageType, EnvironmentCategory, EnvironmentOracle, Equipment,
    ItemDefinition, ItemOracle, LootTable, MonsterOracle, MonsterTemplate, PlayerCharacter, Race,
    TablesOracle,
};

/// In-memory content for engine tests.
pub struct Content {
    pub items: HashMap<String, ItemDefinition>,
    pub monsters: HashMap<String, MonsterTemplate>,
    pub environments: HashMap<String, EnvironmentCategory>,
    pub advancement: AdvancementTable,
    pub config: CombatConfig,
}

impl ItemOracle for Content {
    fn definition(&self, id: &str) -> Option<ItemDefinition> {
        self.items.get(id).cloned()
    }
}

impl MonsterOracle for Content {
    fn template(&self, id: &str) -> Option<MonsterTemplate> {
        self.monsters.get(id).cloned()
    }
}

impl TablesOracle for Content {
    fn advancement(&self) -> &AdvancementTable {
        &self.advancement
    }

    fn combat(&self) -> &CombatConfig {
        &self.config
    }
}

impl EnvironmentOracle for Content {
    fn category(&self, id: &str) -> Option<EnvironmentCategory> {
        self.environments.get(id).copied()
    }
}

impl Content {
    pub fn env(&self) -> CombatEnv<'_> {
        CombatEnv::new(self, self, self, self)
    }

    pub fn with_monster(mut self, template: MonsterTemplate) -> Self {
        self.monsters.insert(template.id.clone(), template);
        self
    }
}

pub fn content() -> Content {
    let items = [
        ItemDefinition::new(
            "longsword",
            "Longsword",
            ItemKind::Weapon(
                WeaponData::melee(WeaponCategory::Martial, "1d8", DamageType::Slashing)
                    .with_versatile("1d10"),
            ),
        )
        .with_tags([ItemTag::Versatile]),
        ItemDefinition::new(
            "shortsword",
            "Shortsword",
            ItemKind::Weapon(WeaponData::melee(
                WeaponCategory::Martial,
                "1d6",
                DamageType::Piercing,
            )),
        )
        .with_tags([ItemTag::Light, ItemTag::Finesse]),
        ItemDefinition::new(
            "dagger",
            "Dagger",
            ItemKind::Weapon(
                WeaponData::melee(WeaponCategory::Simple, "1d4", DamageType::Piercing)
                    .with_range(1, 3),
            ),
        )
        .with_tags([ItemTag::Light, ItemTag::Finesse, ItemTag::Thrown])
        .with_max_stack(10),
        ItemDefinition::new(
            "shortbow",
            "Shortbow",
            ItemKind::Weapon(WeaponData::ranged(
                WeaponCategory::Simple,
                "1d6",
                DamageType::Piercing,
                2,
                4,
            )),
        )
        .with_tags([ItemTag::Ammunition, ItemTag::TwoHanded]),
        ItemDefinition::new("arrow", "Arrow", ItemKind::Ammunition).with_max_stack(20),
        ItemDefinition::new(
            "chain_mail",
            "Chain Mail",
            ItemKind::Armor(ArmorData::base(ArmorWeight::Heavy, 16)),
        )
        .with_tags([ItemTag::Heavy]),
        ItemDefinition::new("torch", "Torch", ItemKind::Gear),
    ];

    let advancement = AdvancementTable::new(vec![
        AdvancementLevel::new(1, 0, 1.0),
        AdvancementLevel::new(2, 300, 1.0),
        AdvancementLevel::new(3, 900, 1.0),
    ]);

    Content {
        items: items.into_iter().map(|item| (item.id.clone(), item)).collect(),
        monsters: HashMap::new(),
        environments: [
            ("dungeon".to_string(), EnvironmentCategory::Enclosed),
            ("forest".to_string(), EnvironmentCategory::Dense),
            ("plains".to_string(), EnvironmentCategory::Open),
        ]
        .into_iter()
        .collect(),
        advancement,
        config: CombatConfig::default(),
    }
    .with_monster(goblin())
    .with_monster(slinger())
}

/// Flat 10 HP, AC 12, one reach-0 scimitar (+4, 1d6+2), flees at half HP.
pub fn goblin() -> MonsterTemplate {
    MonsterTemplate {
        id: "goblin".into(),
        name: "Goblin".into(),
        armor_class: 12,
        hit_dice: "10".into(),
        average_hp: 7,
        abilities: AbilityScores::new(8, 14, 10, 10, 8, 8),
        actions: vec![MonsterAction::melee(
            "Scimitar",
            0,
            4,
            "1d6+2",
            DamageType::Slashing,
        )],
        affinities: DamageAffinities::default(),
        behavior: MonsterBehavior::new(Aggression::Cowardly, 0, 0.5),
        loot: LootTable::default(),
        xp: 50,
    }
}

/// The goblin with its scimitar swapped for a sling (normal 2, long 4).
pub fn slinger() -> MonsterTemplate {
    let mut template = with_reach(goblin(), ActionReach::Ranged { normal: 2, long: 4 });
    template.id = "slinger".into();
    template.name = "Slinger".into();
    template
}

pub fn with_reach(mut template: MonsterTemplate, reach: ActionReach) -> MonsterTemplate {
    for action in &mut template.actions {
        action.reach = reach;
    }
    template
}

/// Level 1 human fighter, STR 16 / DEX 14, 12 HP.
pub fn fighter(equipment: Equipment) -> PlayerCharacter {
    PlayerCharacter::new("Ash", CharacterClass::Fighter, Race::Human, 12)
        .with_abilities(AbilityScores::new(16, 14, 12, 10, 10, 10))
        .with_equipment(equipment)
}
