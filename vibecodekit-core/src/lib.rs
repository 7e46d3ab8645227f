//! Shared plumbing for the vibecodekit launcher.
//!
//! Everything here is free of launcher policy: running a child with the
//! caller's stdio, looking tools up on `PATH`, and locating the running
//! executable on disk.

pub mod command_stream;
pub mod error;
pub mod paths;

pub use command_stream::{
    exit_code, is_tool_installed, require_tool, run_inherited, FAILURE_EXIT_CODE,
};
pub use error::{LaunchError, Result};
