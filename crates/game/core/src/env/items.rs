use crate::combat::DamageType;

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: &str) -> Option<ItemDefinition>;
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (id, display name, tags, max_stack)
/// - `kind` enum holds type-specific data (weapon profile, armor contribution)
///
/// # Stacking
///
/// - Weapons/Armor: max_stack=1
/// - Ammunition and throwables: stackable (arrows, bolts, darts, javelins)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<ItemTag>,
    pub max_stack: u32,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            tags: Vec::new(),
            max_stack: 1,
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = ItemTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn armor(&self) -> Option<&ArmorData> {
        match &self.kind {
            ItemKind::Armor(armor) => Some(armor),
            _ => None,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Wielded weapon (main hand, off hand, or thrown from either).
    Weapon(WeaponData),

    /// Anything that contributes to armor class (body armor, shields, rings).
    Armor(ArmorData),

    /// Stackable projectiles consumed by `ammunition` weapons.
    Ammunition,

    /// Everything else.
    Gear,
}

/// Property tags that change how an item is used in combat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemTag {
    /// Eligible for two-weapon fighting.
    Light,
    /// Small races attack at disadvantage.
    Heavy,
    /// Uses the higher of STR and DEX.
    Finesse,
    /// One shot per action; rules out two-weapon fighting from the main hand.
    Loading,
    /// Larger damage die when the off hand is empty.
    Versatile,
    /// May be thrown using its range values.
    Thrown,
    /// Consumes one unit of equipped ammunition per attack.
    Ammunition,
    TwoHanded,
}

/// Weapon proficiency group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponCategory {
    Simple,
    Martial,
}

/// How a weapon reaches its target when not thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponStyle {
    Melee,
    Ranged,
}

/// Weapon-specific data.
///
/// `normal_range` and `long_range` are expressed in range bands. Melee weapons
/// leave them at zero unless they carry the `thrown` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub category: WeaponCategory,
    pub style: WeaponStyle,
    pub damage: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub versatile_damage: Option<String>,
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub normal_range: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub long_range: u32,
}

impl WeaponData {
    pub fn melee(
        category: WeaponCategory,
        damage: impl Into<String>,
        damage_type: DamageType,
    ) -> Self {
        Self {
            category,
            style: WeaponStyle::Melee,
            damage: damage.into(),
            versatile_damage: None,
            damage_type,
            normal_range: 0,
            long_range: 0,
        }
    }

    pub fn ranged(
        category: WeaponCategory,
        damage: impl Into<String>,
        damage_type: DamageType,
        normal_range: u32,
        long_range: u32,
    ) -> Self {
        Self {
            category,
            style: WeaponStyle::Ranged,
            damage: damage.into(),
            versatile_damage: None,
            damage_type,
            normal_range,
            long_range,
        }
    }

    pub fn with_range(mut self, normal_range: u32, long_range: u32) -> Self {
        self.normal_range = normal_range;
        self.long_range = long_range;
        self
    }

    pub fn with_versatile(mut self, damage: impl Into<String>) -> Self {
        self.versatile_damage = Some(damage.into());
        self
    }
}

/// Armor weight class of a base-setting item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ArmorWeight {
    /// Base + full DEX modifier.
    Light,
    /// Base + DEX modifier up to a cap.
    Medium,
    /// Base only.
    Heavy,
}

/// Base armor formula that replaces the unarmored `10 + DEX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorBase {
    pub weight: ArmorWeight,
    pub value: i32,
    /// Medium armor only; `None` uses the configured default cap.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dex_cap: Option<i32>,
}

/// Armor-class contribution of an equipped item.
///
/// An item either sets the base formula (`base`) or adds a flat `bonus`;
/// content may set both (magic armor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: Option<ArmorBase>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: i32,
}

impl ArmorData {
    pub const fn base(weight: ArmorWeight, value: i32) -> Self {
        Self {
            base: Some(ArmorBase {
                weight,
                value,
                dex_cap: None,
            }),
            bonus: 0,
        }
    }

    pub const fn bonus(bonus: i32) -> Self {
        Self { base: None, bonus }
    }

    pub fn with_dex_cap(mut self, cap: i32) -> Self {
        if let Some(base) = self.base.as_mut() {
            base.dex_cap = Some(cap);
        }
        self
    }
}
