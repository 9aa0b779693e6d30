//! Equipped item slots.
//!
//! The engine never owns the player's inventory. It only reads "what is in
//! slot X" and decrements stacks when ammunition or thrown items are spent.

use std::collections::BTreeMap;

/// Equipment slot, in armor-class resolution order.
///
/// Ordering matters: when several equipped items set a base armor formula,
/// the first one in this order wins.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Chest,
    Head,
    Hands,
    Feet,
    Cloak,
    MainHand,
    OffHand,
    Ring,
    Amulet,
    Ammunition,
}

/// A quantity of one item occupying a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item_id: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }

    pub fn single(item_id: impl Into<String>) -> Self {
        Self::new(item_id, 1)
    }
}

/// Items currently equipped, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equipment {
    slots: BTreeMap<EquipSlot, ItemStack>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips a stack, returning whatever previously occupied the slot.
    pub fn equip(&mut self, slot: EquipSlot, stack: ItemStack) -> Option<ItemStack> {
        self.slots.insert(slot, stack)
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&ItemStack> {
        self.slots.get(&slot).filter(|stack| stack.quantity > 0)
    }

    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        self.equipped(slot).is_none()
    }

    /// Equipped stacks in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &ItemStack)> {
        self.slots
            .iter()
            .filter(|(_, stack)| stack.quantity > 0)
            .map(|(slot, stack)| (*slot, stack))
    }

    /// Spends one unit from `slot`, emptying it when the stack runs out.
    ///
    /// Returns the spent item ID, or `None` if the slot was empty.
    pub fn consume_one(&mut self, slot: EquipSlot) -> Option<String> {
        let stack = self.slots.get_mut(&slot).filter(|stack| stack.quantity > 0)?;
        stack.quantity -= 1;
        let item_id = stack.item_id.clone();
        if stack.quantity == 0 {
            self.slots.remove(&slot);
        }
        Some(item_id)
    }

    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    equipment: Equipment,
}

impl EquipmentBuilder {
    pub fn item(mut self, slot: EquipSlot, item_id: impl Into<String>) -> Self {
        self.equipment.equip(slot, ItemStack::single(item_id));
        self
    }

    pub fn stack(mut self, slot: EquipSlot, item_id: impl Into<String>, quantity: u32) -> Self {
        self.equipment.equip(slot, ItemStack::new(item_id, quantity));
        self
    }

    pub fn build(self) -> Equipment {
        self.equipment
    }
}
