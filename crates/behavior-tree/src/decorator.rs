//! Single-child decorators.

use crate::{Behavior, Status};

/// Logical NOT of its child.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Ticks its child and reports `Success` whatever the child returned.
///
/// Marks an optional step inside a [`Sequence`](crate::Sequence): the
/// child's blackboard writes are kept, its failure is not propagated.
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx);
        Status::Success
    }
}
