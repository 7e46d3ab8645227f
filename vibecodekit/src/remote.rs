//! Remote-fetch mode.
//!
//! The downloaded script is executed as-is: there is no checksum, signature
//! or version pin. Everything that touches remote content goes through
//! [`RemoteCommand::run_unverified`].

// Standard library
use std::ffi::{OsStr, OsString};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

// External crates
use tracing::debug;
use vibecodekit_core::{
    error::Result, exit_code, require_tool, run_inherited, FAILURE_EXIT_CODE,
};

// Internal imports
use crate::config::LauncherConfig;

/// A composed `<fetcher> <flags> <url> | <shell> -s -- <args>` pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    line: OsString,
    fetcher: String,
    shell: String,
    command_shell: String,
}

impl RemoteCommand {
    /// Build the pipeline. Forwarded arguments are appended after `--`,
    /// joined by single spaces; with none, the line ends at the separator.
    pub fn compose(config: &LauncherConfig, args: &[OsString]) -> Self {
        let source = &config.remote;
        let mut parts: Vec<&OsStr> = Vec::with_capacity(source.fetch_flags.len() + 7);
        parts.push(source.fetcher.as_ref());
        parts.extend(source.fetch_flags.iter().map(OsStr::new));
        parts.push(source.url.as_ref());
        parts.push("|".as_ref());
        parts.push(config.shell.as_ref());
        parts.push("-s".as_ref());
        parts.push("--".as_ref());
        // Arguments keep their raw bytes, even when they are not UTF-8.
        parts.extend(args.iter().map(OsString::as_os_str));

        let mut line = OsString::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                line.push(" ");
            }
            line.push(part);
        }

        Self {
            line,
            fetcher: source.fetcher.clone(),
            shell: config.shell.clone(),
            command_shell: config.command_shell.clone(),
        }
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.line
    }

    /// Download the installer and execute it without any verification,
    /// returning the code to exit with.
    ///
    /// Every tool in the pipeline must be on `PATH`; a missing one counts as
    /// a failed launch and yields exit code 1.
    pub fn run_unverified(&self, cwd: &Path) -> i32 {
        match self.try_run(cwd) {
            Ok(code) => exit_code(code),
            Err(e) => {
                debug!(error = %e, command = %self, "remote installer did not start");
                FAILURE_EXIT_CODE
            }
        }
    }

    fn try_run(&self, cwd: &Path) -> Result<Option<i32>> {
        for tool in [&self.command_shell, &self.fetcher, &self.shell] {
            require_tool(tool)?;
        }
        run_inherited(&self.command_shell, &[OsStr::new("-c"), self.as_os_str()], cwd)
    }
}

impl Display for RemoteCommand {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.line.to_string_lossy())
    }
}
