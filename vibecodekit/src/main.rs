use vibecodekit::{launch_from_env, LauncherConfig};
use vibecodekit_logging::{init_subscriber, LogSettings};

fn main() {
    let log_guard = init_subscriber(&LogSettings::from_env());

    let code = launch_from_env(&LauncherConfig::default());

    // process::exit skips destructors; flush the log file first.
    drop(log_guard);
    std::process::exit(code);
}
