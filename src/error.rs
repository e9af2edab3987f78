//! Error taxonomy for project generation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Error, Debug)]
pub enum GenError {
    /// The scan root is missing, not a directory, or could not be walked.
    #[error("cannot scan {}: {reason}", path.display())]
    Scan { path: PathBuf, reason: String },

    /// A destination manifest could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub fn scan(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Scan { path: path.into(), reason: reason.into() }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}
