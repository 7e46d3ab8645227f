// Common test utilities and fixtures
#![allow(dead_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vibecodekit_core::is_tool_installed;

/// Installer stand-in: records its working directory and each argument on
/// its own line in `record.txt` inside the working directory, then exits
/// with `code`.
pub fn recording_script(code: i32) -> String {
    format!(
        "#!/usr/bin/env bash\n\
         pwd -P > record.txt\n\
         for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> record.txt; done\n\
         exit {code}\n"
    )
}

/// A package layout `pkg/bin/` + optional `pkg/install.sh`, and a separate
/// working directory the launcher is "invoked" from.
pub struct TestFixture {
    _temp_dir: TempDir,
    pub package_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub work_dir: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let package_dir = temp_dir.path().join("pkg");
        let bin_dir = package_dir.join("bin");
        let work_dir = temp_dir.path().join("work");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::create_dir_all(&work_dir).unwrap();

        Self {
            _temp_dir: temp_dir,
            package_dir,
            bin_dir,
            work_dir,
        }
    }

    pub fn with_local_script(code: i32) -> Self {
        let fixture = Self::new();
        fs::write(fixture.script_path(), recording_script(code)).unwrap();
        fixture
    }

    pub fn script_path(&self) -> PathBuf {
        self.package_dir.join("install.sh")
    }

    /// Recorded `(cwd, args)` from the last script run.
    pub fn record(&self) -> (PathBuf, Vec<String>) {
        let content = fs::read_to_string(self.work_dir.join("record.txt"))
            .expect("installer should have written record.txt");
        let mut lines = content.lines();
        let cwd = PathBuf::from(lines.next().expect("cwd line"));
        (cwd, lines.map(str::to_string).collect())
    }

    pub fn canonical_work_dir(&self) -> PathBuf {
        self.work_dir.canonicalize().unwrap()
    }
}

pub fn os_args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

/// True when every tool is on PATH; otherwise logs why the test is skipped.
pub fn tools_available(tools: &[&str]) -> bool {
    let missing: Vec<&str> = tools
        .iter()
        .copied()
        .filter(|tool| !is_tool_installed(tool))
        .collect();
    if !missing.is_empty() {
        eprintln!("skipping: not installed: {}", missing.join(", "));
        return false;
    }
    true
}

pub fn assert_same_dir(actual: &Path, expected: &Path) {
    assert_eq!(actual.canonicalize().unwrap(), expected.canonicalize().unwrap());
}
