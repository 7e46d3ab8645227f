use std::fmt::{self, Display, Formatter};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    Io(#[from] io::Error),
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    ToolNotFound(String),
    CurrentDir(#[source] io::Error),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LaunchError::Io(e) => write!(f, "I/O error: {}", e),
            LaunchError::Spawn { program, source } => {
                write!(f, "Failed to start '{}': {}", program, source)
            }
            LaunchError::ToolNotFound(tool) => {
                write!(f, "Required tool not found in PATH: {}", tool)
            }
            LaunchError::CurrentDir(e) => {
                write!(f, "Could not determine working directory: {}", e)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
