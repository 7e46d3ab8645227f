mod common;

use std::fs;

use common::{assert_same_dir, os_args, recording_script, tools_available, TestFixture};
use vibecodekit::{launch, resolve, Invocation, LauncherConfig, Mode, RemoteCommand, RemoteSource};

/// Stand-in for the network: `cat <file>` instead of `curl -fsSL <url>`.
fn offline_config(script: &std::path::Path) -> LauncherConfig {
    LauncherConfig {
        remote: RemoteSource {
            fetcher: "cat".to_string(),
            fetch_flags: Vec::new(),
            url: script.display().to_string(),
        },
        ..LauncherConfig::default()
    }
}

#[test]
fn test_missing_script_composes_remote_command_with_args() {
    let fixture = TestFixture::new();
    let invocation = Invocation::new(
        os_args(&["--yes", "--dir=/tmp/x"]),
        fixture.work_dir.clone(),
        Some(fixture.bin_dir.clone()),
    );
    let config = LauncherConfig::default();

    assert_eq!(resolve(&invocation, &config), Mode::RemoteFetch);

    let command = RemoteCommand::compose(&config, &invocation.args).to_string();
    assert!(command.starts_with("curl -fsSL https://"));
    assert!(command.ends_with("| bash -s -- --yes --dir=/tmp/x"));
}

#[test]
fn test_missing_script_without_args_ends_at_separator() {
    let config = LauncherConfig::default();
    let command = RemoteCommand::compose(&config, &[]).to_string();
    assert!(command.ends_with("| bash -s --"));
    assert!(!command.ends_with(' '));
}

#[test]
fn test_remote_tools_missing_exits_one() {
    let fixture = TestFixture::new();
    let invocation = Invocation::new(
        os_args(&["--yes"]),
        fixture.work_dir.clone(),
        Some(fixture.bin_dir.clone()),
    );

    let mut no_fetcher = LauncherConfig::default();
    no_fetcher.remote.fetcher = "vibecodekit-no-such-fetcher".to_string();
    assert_eq!(launch(&invocation, &no_fetcher), 1);

    let no_shell = LauncherConfig {
        shell: "vibecodekit-no-such-shell".to_string(),
        ..LauncherConfig::default()
    };
    assert_eq!(launch(&invocation, &no_shell), 1);

    let no_command_shell = LauncherConfig {
        command_shell: "vibecodekit-no-such-sh".to_string(),
        ..LauncherConfig::default()
    };
    assert_eq!(launch(&invocation, &no_command_shell), 1);
}

#[test]
fn test_remote_script_runs_in_caller_cwd_with_args() {
    if !tools_available(&["sh", "bash", "cat"]) {
        return;
    }
    let fixture = TestFixture::new();
    let served = fixture.package_dir.join("served-install.sh");
    fs::write(&served, recording_script(3)).unwrap();

    let invocation = Invocation::new(
        os_args(&["--yes", "--dir=/tmp/x"]),
        fixture.work_dir.clone(),
        Some(fixture.bin_dir.clone()),
    );
    let config = offline_config(&served);

    assert_eq!(resolve(&invocation, &config), Mode::RemoteFetch);
    assert_eq!(launch(&invocation, &config), 3);

    let (cwd, args) = fixture.record();
    assert_same_dir(&cwd, &fixture.work_dir);
    assert_eq!(args, vec!["--yes", "--dir=/tmp/x"]);
}

#[test]
fn test_remote_exit_code_is_mirrored() {
    if !tools_available(&["sh", "bash", "cat"]) {
        return;
    }
    for code in [0, 2, 255] {
        let fixture = TestFixture::new();
        let served = fixture.package_dir.join("served-install.sh");
        fs::write(&served, recording_script(code)).unwrap();

        let invocation = Invocation::new(vec![], fixture.work_dir.clone(), None);
        assert_eq!(launch(&invocation, &offline_config(&served)), code);
    }
}
