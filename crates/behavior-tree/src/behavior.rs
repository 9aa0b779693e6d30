//! Node trait.
//!
//! [`Behavior`] is generic over the blackboard type `C`. Nodes read the
//! blackboard to make decisions and write their results back into it; the
//! returned [`Status`] only steers the enclosing composite.

use crate::Status;

/// A node that can be ticked against a blackboard.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets boxed trees be used wherever a node is expected.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
