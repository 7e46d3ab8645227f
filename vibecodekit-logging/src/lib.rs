//! Tracing setup for the launcher.
//!
//! The launcher's own output must never mix with the installer's, so console
//! logs go to stderr and the default level is `warn`, which keeps a normal run
//! completely silent. Configuration comes from the environment:
//!
//! - `RUST_LOG` - full filter directive, takes precedence over `LOG_LEVEL`
//! - `LOG_LEVEL` - default filter level (`warn`)
//! - `LOG_FORMAT` - `human`, `compact` or `json`
//! - `LOG_OUTPUT` - `console`, `file`, `both` or `none`
//! - `LOG_FILE_PATH` - log file location, rotated daily

use std::{
    env, io,
    path::{Path, PathBuf},
};
use tracing::Subscriber;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    EnvFilter, Layer, Registry,
};

const DEFAULT_LEVEL: &str = "warn";
const DEFAULT_LOG_FILE: &str = "vibecodekit.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    None,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            "none" => LogOutput::None,
            _ => LogOutput::Console,
        }
    }

    fn console(self) -> bool {
        matches!(self, LogOutput::Console | LogOutput::Both)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Human,
        }
    }
}

/// Logging configuration resolved from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub output: LogOutput,
    pub format: LogFormat,
    pub file_path: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let directive = get("RUST_LOG")
            .or_else(|| get("LOG_LEVEL"))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        let output = get("LOG_OUTPUT")
            .map(|value| LogOutput::parse(&value))
            .unwrap_or(LogOutput::Console);
        let format = get("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or(LogFormat::Human);
        let file_path = get("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE));

        Self {
            directive,
            output,
            format,
            file_path,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

fn fmt_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Human => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Daily-rotated appender for `path`; fails instead of panicking when the
/// directory or file cannot be created.
pub fn open_log_file(path: &Path) -> Result<RollingFileAppender, InitError> {
    let log_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_filename)
        .build(log_dir)
}

/// Initializes the global tracing subscriber from `settings`.
///
/// Returns the file writer's guard when file output is enabled; keep it alive
/// until the process is about to exit so buffered lines get flushed.
pub fn init_subscriber(settings: &LogSettings) -> Option<WorkerGuard> {
    let mut guard: Option<WorkerGuard> = None;
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if settings.output.console() {
        let ansi = settings.format != LogFormat::Json;
        let layer = fmt_layer::<Registry, _>(settings.format, io::stderr, ansi);
        layers.push(layer.with_filter(settings.env_filter()).boxed());
    }

    if settings.output.file() {
        // An unusable log file only loses the file sink, never the run.
        if let Ok(file_appender) = open_log_file(&settings.file_path) {
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            let layer = fmt_layer::<Registry, _>(settings.format, non_blocking, false);
            layers.push(layer.with_filter(settings.env_filter()).boxed());
        }
    }

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry().with(layers).try_init();

    guard
}
