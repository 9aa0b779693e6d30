//! Monster turn selection.
//!
//! The decision is a small behavior tree evaluated against an [`AiContext`]:
//!
//! ```text
//! monster_tree()
//!   └─ Selector
//!       ├─ Sequence                      ← flee
//!       │   ├─ Condition(flee allowed)
//!       │   ├─ Inverter
//!       │   │   └─ Condition(berserker)
//!       │   ├─ Condition(hp at or below threshold)
//!       │   └─ Flee
//!       └─ Sequence                      ← engage
//!           ├─ StepTowardPreferredRange
//!           └─ AlwaysSucceed
//!               └─ Selector
//!                   ├─ FirstActionAfterMove
//!                   └─ FirstActionHoldingPosition
//! ```
//!
//! The engage branch always succeeds; when no action is usable at either
//! range the monster still moves and does nothing else.

use behavior_tree::builder::{always_succeed, condition, inverter, selector, sequence};
use behavior_tree::{Behavior, Status};

use crate::env::{Aggression, MonsterAction};
use crate::monster::MonsterInstance;

/// What the monster does this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterChoice {
    /// Attack with the action at this index in the template.
    Attack(usize),
    Flee,
    #[default]
    None,
}

/// AI output for one monster turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDecision {
    /// Range delta: -1 closer, 0 hold, +1 away.
    pub movement: i32,
    pub choice: MonsterChoice,
}

/// Blackboard for one decision.
#[derive(Clone, Debug)]
pub struct AiContext {
    pub hp_fraction: f64,
    pub aggression: Aggression,
    pub flee_threshold: f64,
    pub preferred_range: u32,
    /// Actions in template order.
    pub actions: Vec<MonsterAction>,
    pub range: u32,
    /// Death-save turns never flee.
    pub allow_flee: bool,
    pub decision: MonsterDecision,
}

impl AiContext {
    pub fn new(monster: &MonsterInstance, range: u32, allow_flee: bool) -> Self {
        let behavior = monster.template.behavior;
        Self {
            hp_fraction: monster.hp_fraction(),
            aggression: behavior.aggression,
            flee_threshold: behavior.flee_threshold,
            preferred_range: behavior.preferred_range,
            actions: monster.template.actions.clone(),
            range,
            allow_flee,
            decision: MonsterDecision::default(),
        }
    }

    fn first_usable_at(&self, range: u32) -> Option<usize> {
        self.actions.iter().position(|action| action.usable_at(range))
    }

    fn range_after_move(&self) -> u32 {
        self.range.saturating_add_signed(self.decision.movement)
    }
}

pub type MonsterTree = Box<dyn Behavior<AiContext>>;

// ============================================================================
// Actions
// ============================================================================

pub struct Flee;

impl Behavior<AiContext> for Flee {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decision = MonsterDecision {
            movement: 0,
            choice: MonsterChoice::Flee,
        };
        Status::Success
    }
}

/// One band toward the preferred range, or hold.
pub struct StepTowardPreferredRange;

impl Behavior<AiContext> for StepTowardPreferredRange {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decision.movement = match ctx.range.cmp(&ctx.preferred_range) {
            core::cmp::Ordering::Greater => -1,
            core::cmp::Ordering::Less => 1,
            core::cmp::Ordering::Equal => 0,
        };
        Status::Success
    }
}

/// First action in template order usable at the post-move range.
pub struct FirstActionAfterMove;

impl Behavior<AiContext> for FirstActionAfterMove {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.first_usable_at(ctx.range_after_move()) {
            Some(index) => {
                ctx.decision.choice = MonsterChoice::Attack(index);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// First action usable without moving; cancels the planned move.
pub struct FirstActionHoldingPosition;

impl Behavior<AiContext> for FirstActionHoldingPosition {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.first_usable_at(ctx.range) {
            Some(index) => {
                ctx.decision = MonsterDecision {
                    movement: 0,
                    choice: MonsterChoice::Attack(index),
                };
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

// ============================================================================
// Tree
// ============================================================================

pub fn monster_tree() -> MonsterTree {
    selector(vec![
        sequence(vec![
            condition(|ctx: &AiContext| ctx.allow_flee),
            inverter(condition(|ctx: &AiContext| ctx.aggression == Aggression::Berserker)),
            condition(|ctx: &AiContext| ctx.hp_fraction <= ctx.flee_threshold),
            Box::new(Flee),
        ]),
        sequence(vec![
            Box::new(StepTowardPreferredRange),
            always_succeed(selector(vec![
                Box::new(FirstActionAfterMove),
                Box::new(FirstActionHoldingPosition),
            ])),
        ]),
    ])
}

/// Decides the monster's turn at the current range.
pub fn decide(monster: &MonsterInstance, range: u32, allow_flee: bool) -> MonsterDecision {
    let mut ctx = AiContext::new(monster, range, allow_flee);
    monster_tree().tick(&mut ctx);
    tracing::debug!(
        monster = %monster.template.id,
        range,
        hp_fraction = ctx.hp_fraction,
        decision = ?ctx.decision,
        "monster decision"
    );
    ctx.decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DamageType;
    use crate::env::{MonsterBehavior, MonsterTemplate, ScriptedRng};

    fn monster(behavior: MonsterBehavior, actions: Vec<MonsterAction>, hp: u32) -> MonsterInstance {
        let template = MonsterTemplate {
            id: "bandit".into(),
            name: "Bandit".into(),
            armor_class: 12,
            hit_dice: "10".into(),
            average_hp: 10,
            abilities: Default::default(),
            actions,
            affinities: Default::default(),
            behavior,
            loot: Default::default(),
            xp: 25,
        };
        let mut instance = MonsterInstance::spawn(template, &mut ScriptedRng::new([]));
        instance.hp = hp;
        instance
    }

    fn scimitar() -> MonsterAction {
        MonsterAction::melee("Scimitar", 0, 3, "1d6+1", DamageType::Slashing)
    }

    fn crossbow() -> MonsterAction {
        MonsterAction::ranged("Light Crossbow", 3, 6, 3, "1d8+1", DamageType::Piercing)
    }

    #[test]
    fn flees_at_threshold() {
        let behavior = MonsterBehavior::new(Aggression::Normal, 0, 0.5);
        let decision = decide(&monster(behavior, vec![scimitar()], 5), 0, true);
        assert_eq!(decision.choice, MonsterChoice::Flee);
        assert_eq!(decision.movement, 0);
    }

    #[test]
    fn berserkers_never_flee() {
        let behavior = MonsterBehavior::new(Aggression::Berserker, 0, 0.5);
        let decision = decide(&monster(behavior, vec![scimitar()], 1), 0, true);
        assert_eq!(decision.choice, MonsterChoice::Attack(0));
    }

    #[test]
    fn death_save_turns_do_not_flee() {
        let behavior = MonsterBehavior::new(Aggression::Cowardly, 0, 0.9);
        let decision = decide(&monster(behavior, vec![scimitar()], 1), 0, false);
        assert_eq!(decision.choice, MonsterChoice::Attack(0));
    }

    #[test]
    fn closes_in_and_attacks_after_move() {
        let behavior = MonsterBehavior::new(Aggression::Aggressive, 0, 0.0);
        let decision = decide(&monster(behavior, vec![scimitar()], 10), 1, true);
        assert_eq!(decision.movement, -1);
        assert_eq!(decision.choice, MonsterChoice::Attack(0));
    }

    #[test]
    fn moves_without_acting_when_nothing_reaches() {
        let behavior = MonsterBehavior::new(Aggression::Aggressive, 0, 0.0);
        let decision = decide(&monster(behavior, vec![scimitar()], 10), 3, true);
        assert_eq!(decision.movement, -1);
        assert_eq!(decision.choice, MonsterChoice::None);
    }

    #[test]
    fn cancels_move_when_only_current_range_works() {
        // Prefers range 2 but only has a reach-0 attack; at range 0 it would
        // back off and lose the attack, so it holds and swings instead.
        let behavior = MonsterBehavior::new(Aggression::Normal, 2, 0.0);
        let decision = decide(&monster(behavior, vec![scimitar()], 10), 0, true);
        assert_eq!(decision.movement, 0);
        assert_eq!(decision.choice, MonsterChoice::Attack(0));
    }

    #[test]
    fn first_usable_action_in_template_order() {
        let behavior = MonsterBehavior::new(Aggression::Normal, 3, 0.0);
        let decision = decide(&monster(behavior, vec![scimitar(), crossbow()], 10), 2, true);
        assert_eq!(decision.movement, 1);
        assert_eq!(decision.choice, MonsterChoice::Attack(1));

        let decision = decide(&monster(behavior, vec![crossbow(), scimitar()], 10), 0, true);
        assert_eq!(decision.movement, 1);
        assert_eq!(decision.choice, MonsterChoice::Attack(0));
    }
}
