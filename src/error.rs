use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error("Error running {tool}: {diagnostics}")]
    Packaging { tool: String, diagnostics: String },
}

impl RunError {
    /// Every failure ends the run with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
