// Standard library
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

// External crates
use tracing::debug;
use vibecodekit_core::{error::Result, paths, FAILURE_EXIT_CODE};

// Internal imports
use crate::config::LauncherConfig;
use crate::local::run_local;
use crate::remote::RemoteCommand;

/// Everything one launcher run depends on, captured up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Arguments after the program name, never interpreted by the launcher.
    pub args: Vec<OsString>,
    /// Directory the user ran the launcher from; the installer runs here.
    pub cwd: PathBuf,
    /// Directory of the launcher executable, if it could be determined.
    pub install_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(args: Vec<OsString>, cwd: PathBuf, install_dir: Option<PathBuf>) -> Self {
        Self {
            args,
            cwd,
            install_dir,
        }
    }

    pub fn from_env() -> Result<Self> {
        let cwd = paths::current_dir()?;
        let install_dir = match paths::install_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                debug!(error = %e, "could not locate launcher executable");
                None
            }
        };

        Ok(Self::new(env::args_os().skip(1).collect(), cwd, install_dir))
    }
}

/// How the installer will be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The script ships with the launcher at this path.
    Local(PathBuf),
    /// No local script; download it and pipe it into the shell.
    RemoteFetch,
}

/// Expected installer location: the parent of the launcher's directory.
pub fn script_path(install_dir: &Path, config: &LauncherConfig) -> PathBuf {
    install_dir
        .parent()
        .unwrap_or(install_dir)
        .join(&config.script_name)
}

pub fn resolve(invocation: &Invocation, config: &LauncherConfig) -> Mode {
    let Some(install_dir) = invocation.install_dir.as_deref() else {
        return Mode::RemoteFetch;
    };

    let script = script_path(install_dir, config);
    if script.exists() {
        Mode::Local(script)
    } else {
        debug!(script = %script.display(), "no local installer script");
        Mode::RemoteFetch
    }
}

/// Run the installer for `invocation` and return the code to exit with.
pub fn launch(invocation: &Invocation, config: &LauncherConfig) -> i32 {
    let mode = resolve(invocation, config);
    debug!(?mode, cwd = %invocation.cwd.display(), "resolved installer");

    match mode {
        Mode::Local(script) => run_local(&script, invocation, config),
        Mode::RemoteFetch => {
            RemoteCommand::compose(config, &invocation.args).run_unverified(&invocation.cwd)
        }
    }
}

/// Entry point used by the binary: capture the environment, then launch.
pub fn launch_from_env(config: &LauncherConfig) -> i32 {
    match Invocation::from_env() {
        Ok(invocation) => launch(&invocation, config),
        Err(e) => {
            debug!(error = %e, "launcher could not start");
            FAILURE_EXIT_CODE
        }
    }
}
