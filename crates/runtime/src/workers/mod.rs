//! Worker tasks that back the runtime orchestration.
//!
//! Each live combat session is owned by one [`SessionWorker`]; commands reach
//! it through an mpsc channel and are processed strictly one at a time.

mod session;

pub use session::{Command, SessionWorker};
