use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Usage: sign <file>")]
    Usage,

    #[error("Error reading file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error writing file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("boot block too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("ERR - io: {0}")]
    Io(#[from] io::Error),

    #[error("ERR - other: {0}")]
    Other(#[from] anyhow::Error),
}
