//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur while inspecting parsed fragments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fragment text was requested before the fragment was closed
    #[error("Fragment has not been finalized")]
    NotFinalized,
}

/// Result type for reply parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
