//! Leaf nodes.

use crate::{Behavior, Status};

/// Succeeds when its predicate holds. Never writes to the blackboard.
///
/// Takes a plain function pointer, so non-capturing closures work and the
/// node stays `Send + Sync` for any blackboard type.
pub struct Condition<C> {
    predicate: fn(&C) -> bool,
}

impl<C> Condition<C> {
    pub fn new(predicate: fn(&C) -> bool) -> Self {
        Self { predicate }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}
