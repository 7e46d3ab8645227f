/// File name of the installer script shipped in the package root.
pub const INSTALL_SCRIPT_NAME: &str = "install.sh";

/// Where the installer is fetched from when it is not shipped locally.
pub const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Neurons-AI/vibecodekit/main/install.sh";

/// Interpreter for the installer script itself.
pub const DEFAULT_SHELL: &str = "bash";

/// Shell that evaluates the composed fetch-and-run pipeline.
pub const DEFAULT_COMMAND_SHELL: &str = "sh";

pub const DEFAULT_FETCHER: &str = "curl";
pub const DEFAULT_FETCH_FLAGS: &[&str] = &["-fsSL"];

/// Source of the installer in remote-fetch mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub fetcher: String,
    pub fetch_flags: Vec<String>,
    pub url: String,
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self {
            fetcher: DEFAULT_FETCHER.to_string(),
            fetch_flags: DEFAULT_FETCH_FLAGS.iter().map(|f| f.to_string()).collect(),
            url: INSTALL_SCRIPT_URL.to_string(),
        }
    }
}

/// Fixed launcher settings. The binary always runs with `Default`; the
/// fields exist so tests can point the launcher at local stand-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub script_name: String,
    pub shell: String,
    pub command_shell: String,
    pub remote: RemoteSource,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            script_name: INSTALL_SCRIPT_NAME.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            command_shell: DEFAULT_COMMAND_SHELL.to_string(),
            remote: RemoteSource::default(),
        }
    }
}
