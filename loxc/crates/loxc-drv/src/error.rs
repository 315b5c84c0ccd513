//! Error handling for the loxc driver.
//!
//! Lexical errors in the input are not driver errors: they are reported
//! as diagnostics and turned into [`Status::LexicalError`]. The variants
//! here are failures of the run itself.

use std::path::PathBuf;

use loxc_lex::LexError;
use thiserror::Error;

use crate::status::Status;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Token or diagnostic output could not be written.
    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),

    /// The logging subscriber could not be set up.
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// The scanner hit an internal fault.
    #[error("internal scanner fault: {0}")]
    Lex(#[from] LexError),
}

impl DriverError {
    /// Returns the exit status this error maps to.
    pub fn status(&self) -> Status {
        match self {
            DriverError::Read { .. }
            | DriverError::Write(_)
            | DriverError::Logging(_)
            | DriverError::Lex(_) => Status::UnknownError,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_display() {
        let err = DriverError::Read {
            path: PathBuf::from("missing.lox"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read 'missing.lox': not found");
        assert_eq!(err.status(), Status::UnknownError);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Write(_)));
        assert_eq!(err.status(), Status::UnknownError);
    }

    #[test]
    fn test_logging_error_display() {
        let err = DriverError::Logging("already set".to_string());
        assert_eq!(err.to_string(), "logging setup failed: already set");
    }
}
