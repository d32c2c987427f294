//! Error types for Value Changer

use crate::utils::text::error_string;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChangerError>;

/// Failure reported by the persistence gateway, carrying the platform error code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct StoreError {
    pub code: i32,
    pub message: String,
}

impl StoreError {
    /// Build from a platform error code, translating it once up front
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: error_string(code),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChangerError {
    #[error("Could not open registry key (error {0})")]
    OpenKey(StoreError),

    #[error("Write failed for {name} ({source})")]
    Write {
        name: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Name contains characters that could not be read.")]
    UnreadableName,

    #[error("Name too long (keep it <= {max}).")]
    NameTooLong { len: usize, max: usize },

    #[error("Invalid selection.")]
    InvalidSelection,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
