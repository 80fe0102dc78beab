//! Core types shared by the resolver, the host seam and the CLI.

mod path;
mod state;

pub use path::NavPath;
pub use state::{is_shutdown, request_shutdown, setup_shutdown_handler};
