//! Boxed shorthands for assembling trees inline.
//!
//! `selector(vec![sequence(vec![...]), condition(..)])` reads closer to the
//! tree diagram than nested `Box::new(Selector::new(..))` calls.

use crate::{AlwaysSucceed, Behavior, Condition, Inverter, Selector, Sequence};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

#[inline]
pub fn condition<C: 'static>(predicate: fn(&C) -> bool) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}
