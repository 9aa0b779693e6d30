//! Small behavior tree library for turn-based decisions.
//!
//! Trees are evaluated once per turn against a caller-owned blackboard and
//! never suspend, so there is no `Running` status and no per-node state.
//! A tick is a pure function of the blackboard, which keeps AI decisions
//! reproducible under a scripted random source.
//!
//! # Architecture
//!
//! - [`Behavior`]: trait implemented by every node
//! - [`Status`]: `Success` or `Failure`
//! - Composites: [`Sequence`] (AND) and [`Selector`] (OR)
//! - Decorators: [`Inverter`] and [`AlwaysSucceed`]
//! - Leaves: [`Condition`] for read-only predicates
//! - [`builder`]: boxed shorthands for assembling trees inline

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use leaf::Condition;
pub use status::Status;
