use miette::Diagnostic;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy)]
pub enum FileOperation {
    Read,
    Write,
    Mkdir,
}
impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Mkdir => write!(f, "mkdir"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("{operation} failed on '{path}'")]
#[diagnostic(
    code(dirsmith::io),
    help("Check permissions, free space, and that the path is not already taken by an entry of the other kind.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, source: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source,
        }
    }
}
