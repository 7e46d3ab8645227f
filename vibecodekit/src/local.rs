// Standard library
use std::ffi::OsString;
use std::path::Path;

// External crates
use tracing::debug;
use vibecodekit_core::{exit_code, run_inherited, FAILURE_EXIT_CODE};

// Internal imports
use crate::config::LauncherConfig;
use crate::launcher::Invocation;

/// Run a locally shipped installer as `<shell> <script> <args...>` in the
/// caller's directory and return the code to exit with.
pub fn run_local(script: &Path, invocation: &Invocation, config: &LauncherConfig) -> i32 {
    let mut argv: Vec<OsString> = Vec::with_capacity(invocation.args.len() + 1);
    argv.push(script.as_os_str().to_os_string());
    argv.extend(invocation.args.iter().cloned());

    match run_inherited(&config.shell, &argv, &invocation.cwd) {
        Ok(code) => exit_code(code),
        Err(e) => {
            debug!(error = %e, script = %script.display(), "local installer did not start");
            FAILURE_EXIT_CODE
        }
    }
}
