mod loader;

pub use loader::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("no valid rows found in {0} data")]
    NoValidRows(String),
    #[error("key row \"{name}\" at line {line} has {found} chords, expected {expected}")]
    KeyRowLength {
        line: usize,
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("no chord or progression data could be loaded")]
    Unavailable,
    #[error("failed to read reference table: {0}")]
    Io(String),
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
