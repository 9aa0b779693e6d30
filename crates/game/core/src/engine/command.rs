use crate::character::EquipSlot;
use crate::combat::Hand;

/// Movement that precedes a player attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveDirection {
    Toward,
    #[default]
    Hold,
    Away,
}

impl MoveDirection {
    pub const fn delta(self) -> i32 {
        match self {
            Self::Toward => -1,
            Self::Hold => 0,
            Self::Away => 1,
        }
    }

    /// Range after moving, clamped at 0.
    pub const fn apply(self, range: u32) -> u32 {
        range.saturating_add_signed(self.delta())
    }
}

/// One player attack.
///
/// Off-hand attacks always strike with the off-hand slot; `slot` only
/// selects the weapon for main actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCommand {
    pub slot: EquipSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub movement: MoveDirection,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hand: Hand,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thrown: bool,
}

impl AttackCommand {
    /// Main action with the item in `slot`.
    pub fn main(slot: EquipSlot) -> Self {
        Self {
            slot,
            movement: MoveDirection::Hold,
            hand: Hand::Main,
            thrown: false,
        }
    }

    /// Two-weapon bonus attack.
    pub fn off_hand() -> Self {
        Self {
            slot: EquipSlot::OffHand,
            movement: MoveDirection::Hold,
            hand: Hand::Off,
            thrown: false,
        }
    }

    pub fn moving(mut self, movement: MoveDirection) -> Self {
        self.movement = movement;
        self
    }

    pub fn thrown(mut self) -> Self {
        self.thrown = true;
        self
    }

    /// Slot whose item makes the attack.
    pub const fn acting_slot(&self) -> EquipSlot {
        match self.hand {
            Hand::Main => self.slot,
            Hand::Off => EquipSlot::OffHand,
        }
    }
}
