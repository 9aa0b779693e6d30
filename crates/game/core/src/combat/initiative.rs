//! Initiative order.
//!
//! Initiative only decides who acts first; afterwards player and monster
//! strictly alternate.

use crate::dice::ability_modifier;
use crate::env::RngOracle;

/// Identity of a combatant within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatantId {
    Player,
    /// Index into the session's monster list.
    Monster(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeEntry {
    pub combatant: CombatantId,
    pub name: String,
    /// d20 + DEX modifier.
    pub total: i32,
    /// Raw DEX score, the first tiebreaker.
    pub dexterity: i32,
}

impl InitiativeEntry {
    pub fn roll(
        combatant: CombatantId,
        name: impl Into<String>,
        dexterity: i32,
        rng: &mut dyn RngOracle,
    ) -> Self {
        Self {
            combatant,
            name: name.into(),
            total: rng.roll_d20() + ability_modifier(dexterity),
            dexterity,
        }
    }
}

/// Sorts entries into acting order.
///
/// Higher total first, then higher raw DEX, then the player.
pub fn order_initiative(entries: &mut [InitiativeEntry]) {
    entries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.dexterity.cmp(&a.dexterity))
            .then_with(|| {
                let rank = |c: CombatantId| match c {
                    CombatantId::Player => 0,
                    CombatantId::Monster(_) => 1,
                };
                rank(a.combatant).cmp(&rank(b.combatant))
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    fn entry(combatant: CombatantId, total: i32, dexterity: i32) -> InitiativeEntry {
        InitiativeEntry {
            combatant,
            name: combatant.to_string(),
            total,
            dexterity,
        }
    }

    #[test]
    fn roll_adds_dex_modifier() {
        let mut rng = ScriptedRng::new([12]);
        let entry = InitiativeEntry::roll(CombatantId::Player, "Ash", 16, &mut rng);
        assert_eq!(entry.total, 15);
    }

    #[test]
    fn higher_total_goes_first() {
        let mut entries = vec![
            entry(CombatantId::Player, 9, 18),
            entry(CombatantId::Monster(0), 14, 8),
        ];
        order_initiative(&mut entries);
        assert_eq!(entries[0].combatant, CombatantId::Monster(0));
    }

    #[test]
    fn ties_break_on_dex_then_player() {
        let mut entries = vec![
            entry(CombatantId::Player, 12, 12),
            entry(CombatantId::Monster(0), 12, 14),
        ];
        order_initiative(&mut entries);
        assert_eq!(entries[0].combatant, CombatantId::Monster(0));

        let mut entries = vec![
            entry(CombatantId::Monster(0), 12, 14),
            entry(CombatantId::Player, 12, 14),
        ];
        order_initiative(&mut entries);
        assert_eq!(entries[0].combatant, CombatantId::Player);
    }
}
