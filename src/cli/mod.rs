//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod menu;
pub mod resolve;
pub mod watch;

pub use args::{CheckArgs, Cli, Commands, MenuArgs, ResolveArgs, WatchArgs};
