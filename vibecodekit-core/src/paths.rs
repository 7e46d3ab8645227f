//! Where the launcher lives and where it was called from.

// Standard library
use std::env;
use std::path::{Path, PathBuf};

// External crates
use crate::error::{LaunchError, Result};

/// Directory holding the running executable, with symlinks resolved.
///
/// Package managers usually expose binaries through a symlink in a shared
/// `bin/` directory; resolving it gets us back to the package itself.
pub fn install_dir() -> Result<PathBuf> {
    let exe_path = env::current_exe()?;
    Ok(containing_dir(&exe_path))
}

/// Parent of `path` after resolving symlinks. Falls back to the path as
/// given when it cannot be canonicalized.
pub fn containing_dir(path: &Path) -> PathBuf {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(resolved)
}

/// The directory the user invoked us from.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(LaunchError::CurrentDir)
}
