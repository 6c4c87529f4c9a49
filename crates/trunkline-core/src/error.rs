//! Error types for directory persistence and number parsing

use thiserror::Error;

use crate::phone::AreaCode;

/// Result type alias for trunkline-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for trunkline-core
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors while reading or writing a network file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CONNECT or PHONE record names a switchboard that was not declared earlier in the file
    #[error("line {line}: switchboard {area_code} has not been declared")]
    UndeclaredSwitchboard { line: usize, area_code: AreaCode },

    /// A record with the wrong shape or an unparsable field
    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A phone token that does not split into `<area>-<number>`
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// An area code token that is not a non-negative integer
    #[error("Invalid area code: {0}")]
    InvalidAreaCode(String),
}

impl Error {
    /// Check if this error came from a malformed network file
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::UndeclaredSwitchboard { .. } | Error::MalformedRecord { .. }
        )
    }

    /// Line number of the offending record, when the error came from a network file
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UndeclaredSwitchboard { line, .. } | Error::MalformedRecord { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
