// Standard library
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

// External crates
use crate::error::{LaunchError, Result};
use duct::cmd;
use tracing::debug;
use which::which;

/// Exit code reported when a child never produced a status of its own.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Run `program` with `args` in `cwd`, wired straight to this process's
/// stdin, stdout and stderr, and wait for it.
///
/// Returns the child's exit code, or `None` when it was terminated without
/// one (e.g. by a signal). A non-zero exit is not an error here; only a
/// failure to start the child is.
pub fn run_inherited<A: AsRef<OsStr>>(
    program: &str,
    args: &[A],
    cwd: &Path,
) -> Result<Option<i32>> {
    debug!(program = %program, cwd = %cwd.display(), argc = args.len(), "spawning child");

    let output = cmd(program, args)
        .dir(cwd)
        .unchecked()
        .run()
        .map_err(|source| LaunchError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let code = output.status.code();
    debug!(program = %program, ?code, "child exited");
    Ok(code)
}

/// Collapse an optional child status into the code this process exits with.
pub fn exit_code(code: Option<i32>) -> i32 {
    code.unwrap_or(FAILURE_EXIT_CODE)
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

/// Like [`is_tool_installed`], but hands back the resolved path.
pub fn require_tool(tool_name: &str) -> Result<PathBuf> {
    which(tool_name).map_err(|_| LaunchError::ToolNotFound(tool_name.to_string()))
}
