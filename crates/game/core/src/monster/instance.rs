use crate::dice::DiceExpr;
use crate::env::{MonsterTemplate, RngOracle};

/// Live monster in one session.
///
/// Holds its own copy of the template so the fight is unaffected by later
/// edits to the content store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterInstance {
    pub template: MonsterTemplate,
    pub hp: u32,
    pub max_hp: u32,
    pub armor_class: i32,
    pub alive: bool,
}

impl MonsterInstance {
    /// Spawns a monster with rolled hit points.
    ///
    /// Falls back to the template's average HP (at least 1) when the hit-dice
    /// expression is malformed or rolls to zero or less.
    pub fn spawn(template: MonsterTemplate, rng: &mut dyn RngOracle) -> Self {
        let fallback = template.average_hp.max(1);
        let max_hp = match DiceExpr::parse(&template.hit_dice) {
            Ok(expr) => {
                let rolled = expr.roll(rng, false);
                if rolled > 0 {
                    rolled as u32
                } else {
                    tracing::debug!(monster = %template.id, rolled, "hit dice rolled non-positive");
                    fallback
                }
            }
            Err(error) => {
                tracing::warn!(
                    target: "encounter::content_fallback",
                    monster = %template.id,
                    hit_dice = %template.hit_dice,
                    %error,
                    "malformed hit dice, using average hp"
                );
                fallback
            }
        };

        Self {
            armor_class: template.armor_class,
            template,
            hp: max_hp,
            max_hp,
            alive: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    /// Current HP as a fraction of max HP.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    /// Applies damage, marking the monster dead at 0 HP. Returns HP left.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.hp = self.hp.saturating_sub(damage);
        if self.hp == 0 {
            self.alive = false;
        }
        self.hp
    }
}
