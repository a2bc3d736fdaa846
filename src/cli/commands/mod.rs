//! Command implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod inspect;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
