//! vibecodekit launcher library.
//!
//! The launcher looks for `install.sh` next to its own package and runs it
//! with the caller's arguments, working directory and terminal. When the
//! script is not shipped alongside the binary it is fetched from GitHub and
//! piped into the shell instead.

pub mod config;
pub mod launcher;
pub mod local;
pub mod remote;

// Re-export key items for the binary and integration tests
pub use config::{LauncherConfig, RemoteSource};
pub use launcher::{launch, launch_from_env, resolve, script_path, Invocation, Mode};
pub use local::run_local;
pub use remote::RemoteCommand;
