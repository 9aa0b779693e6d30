//! Composite nodes.
//!
//! [`Sequence`] ticks children until one fails, [`Selector`] until one
//! succeeds. Both short-circuit, so later children never observe blackboard
//! writes they were not meant to see.

use crate::{Behavior, Status};

/// Short-circuit AND over its children, left to right.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// # Panics
    ///
    /// If `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "sequence needs at least one child");
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Short-circuit OR over its children, left to right.
///
/// Child order is priority order: the first branch that succeeds wins.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// If `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(!children.is_empty(), "selector needs at least one child");
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
