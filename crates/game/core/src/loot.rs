//! Weighted loot tables.
//!
//! A table has guaranteed drops and a number of extra rolls. Each extra roll
//! picks one tier by weight, then one entry inside that tier by weight.

use crate::env::RngOracle;

/// Entry item ID that marks an empty result.
pub const NOTHING: &str = "nothing";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LootTable {
    pub guaranteed: Vec<GuaranteedDrop>,
    /// Extra weighted rolls; `None` uses the configured default.
    pub rolls: Option<u32>,
    pub tiers: Vec<LootTier>,
}

/// Always dropped, quantity uniform in `[min, max]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteedDrop {
    pub item: String,
    pub min: u32,
    pub max: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTier {
    pub name: String,
    pub weight: u32,
    pub entries: Vec<LootEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: String,
    pub weight: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub min: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub max: u32,
}

#[cfg(feature = "serde")]
fn default_quantity() -> u32 {
    1
}

impl LootEntry {
    pub fn new(item: impl Into<String>, weight: u32, min: u32, max: u32) -> Self {
        Self {
            item: item.into(),
            weight,
            min,
            max,
        }
    }

    pub fn nothing(weight: u32) -> Self {
        Self::new(NOTHING, weight, 0, 0)
    }

    pub fn is_nothing(&self) -> bool {
        self.item.eq_ignore_ascii_case(NOTHING) || self.max == 0
    }
}

/// Resolved drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootDrop {
    pub item_id: String,
    pub quantity: u32,
}

/// Maps a roll in `[1, total_weight]` onto a weighted index.
///
/// Index `i` is chosen exactly when `roll` falls inside its cumulative band
/// `(w_0 + .. + w_{i-1}, w_0 + .. + w_i]`. Zero weights never match.
pub fn select_weighted(weights: &[u32], roll: u32) -> Option<usize> {
    let mut cumulative = 0u32;
    for (index, weight) in weights.iter().enumerate() {
        cumulative = cumulative.saturating_add(*weight);
        if *weight > 0 && roll <= cumulative {
            return Some(index);
        }
    }
    None
}

fn pick<'t, T>(
    items: &'t [T],
    weight: impl Fn(&T) -> u32,
    rng: &mut dyn RngOracle,
) -> Option<&'t T> {
    let weights: Vec<u32> = items.iter().map(weight).collect();
    let total: u32 = weights.iter().fold(0u32, |sum, w| sum.saturating_add(*w));
    if total == 0 {
        return None;
    }
    let roll = rng.roll_range(1, total.min(i32::MAX as u32) as i32).max(1) as u32;
    select_weighted(&weights, roll).map(|index| &items[index])
}

fn roll_quantity(min: u32, max: u32, rng: &mut dyn RngOracle) -> u32 {
    rng.roll_range(min as i32, max as i32).max(0) as u32
}

fn push_merged(drops: &mut Vec<LootDrop>, item_id: &str, quantity: u32) {
    if quantity == 0 {
        return;
    }
    match drops.iter_mut().find(|drop| drop.item_id == item_id) {
        Some(existing) => existing.quantity += quantity,
        None => drops.push(LootDrop {
            item_id: item_id.to_string(),
            quantity,
        }),
    }
}

impl LootTable {
    /// Rolls the table. Identical items are merged into one drop, in order of
    /// first appearance.
    pub fn roll(&self, rng: &mut dyn RngOracle, default_rolls: u32) -> Vec<LootDrop> {
        let mut drops = Vec::new();

        for guaranteed in &self.guaranteed {
            let quantity = roll_quantity(guaranteed.min, guaranteed.max, rng);
            push_merged(&mut drops, &guaranteed.item, quantity);
        }

        for _ in 0..self.rolls.unwrap_or(default_rolls) {
            let Some(tier) = pick(&self.tiers, |tier| tier.weight, rng) else {
                continue;
            };
            let Some(entry) = pick(&tier.entries, |entry| entry.weight, rng) else {
                continue;
            };
            if entry.is_nothing() {
                tracing::debug!(tier = %tier.name, "loot roll came up empty");
                continue;
            }
            let quantity = roll_quantity(entry.min, entry.max, rng);
            push_merged(&mut drops, &entry.item, quantity);
        }

        drops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EntropyRng, ScriptedRng};

    fn tier(name: &str, weight: u32, entries: Vec<LootEntry>) -> LootTier {
        LootTier {
            name: name.to_string(),
            weight,
            entries,
        }
    }

    #[test]
    fn cumulative_bands() {
        let weights = [2, 0, 3];
        assert_eq!(select_weighted(&weights, 1), Some(0));
        assert_eq!(select_weighted(&weights, 2), Some(0));
        assert_eq!(select_weighted(&weights, 3), Some(2));
        assert_eq!(select_weighted(&weights, 5), Some(2));
        assert_eq!(select_weighted(&weights, 6), None);
    }

    #[test]
    fn guaranteed_and_merged() {
        let table = LootTable {
            guaranteed: vec![GuaranteedDrop {
                item: "gold".into(),
                min: 2,
                max: 6,
            }],
            rolls: Some(2),
            tiers: vec![tier("coins", 1, vec![LootEntry::new("gold", 1, 1, 3)])],
        };
        // guaranteed 4, then per roll: tier 1, entry 1, quantity
        let mut rng = ScriptedRng::new([4, 1, 1, 3, 1, 1, 2]);
        let drops = table.roll(&mut rng, 1);
        assert_eq!(
            drops,
            vec![LootDrop {
                item_id: "gold".into(),
                quantity: 9
            }]
        );
    }

    #[test]
    fn nothing_entries_drop_nothing() {
        let table = LootTable {
            guaranteed: vec![],
            rolls: None,
            tiers: vec![tier(
                "junk",
                1,
                vec![LootEntry::nothing(5), LootEntry::new("bone", 1, 0, 0)],
            )],
        };
        let mut rng = ScriptedRng::new([1, 3]);
        assert!(table.roll(&mut rng, 1).is_empty());
        let mut rng = ScriptedRng::new([1, 6]);
        assert!(table.roll(&mut rng, 1).is_empty());
    }

    #[test]
    fn tier_frequency_converges_to_weight() {
        let weights = [1u32, 3, 6];
        let table = LootTable {
            guaranteed: vec![],
            rolls: Some(1),
            tiers: weights
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let entry = LootEntry::new(format!("item{i}"), 1, 1, 1);
                    tier(&format!("t{i}"), *w, vec![entry])
                })
                .collect(),
        };
        let mut rng = EntropyRng::new();
        let mut counts = [0u32; 3];
        let trials = 20_000;
        for _ in 0..trials {
            for drop in table.roll(&mut rng, 1) {
                let index: usize = drop.item_id[4..].parse().unwrap();
                counts[index] += 1;
            }
        }
        for (count, weight) in counts.iter().zip(weights) {
            let observed = *count as f64 / trials as f64;
            let expected = weight as f64 / 10.0;
            assert!(
                (observed - expected).abs() < 0.03,
                "observed {observed}, expected {expected}"
            );
        }
    }
}
