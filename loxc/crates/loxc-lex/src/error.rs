//! Error types for the scanner.
//!
//! Lexical errors ([`ScanError`]) are recoverable and collected; the scan
//! carries on after each one. [`LexError`] is reserved for internal faults
//! that mean the scanner itself is wrong.

use std::num::ParseFloatError;

use loxc_util::{Diagnostic, DiagnosticCode};
use thiserror::Error;

/// What went wrong in a [`ScanError`].
///
/// The `Display` output is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// A character with no entry in the token catalog.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// A string literal still open at end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl ScanErrorKind {
    /// Returns the diagnostic code for this kind of error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanErrorKind::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}

/// A recoverable lexical error.
///
/// # Example
///
/// ```
/// use loxc_lex::{ScanError, ScanErrorKind};
///
/// let err = ScanError::new(ScanErrorKind::UnexpectedCharacter('@'), 1);
/// assert_eq!(err.to_string(), "[line 1] Error: Unexpected character: @");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,
    /// Line the error was detected on (1-based).
    pub line: u32,
}

impl ScanError {
    /// Creates a new scan error.
    pub fn new(kind: ScanErrorKind, line: u32) -> Self {
        Self { kind, line }
    }

    /// Returns the message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Converts this error into a diagnostic for a [`loxc_util::Handler`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message(), self.line).with_code(self.kind.code())
    }
}

/// Internal scanner fault.
#[derive(Debug, Error)]
pub enum LexError {
    /// A digit run the scanner accepted could not be parsed as a number.
    #[error("invalid number literal '{lexeme}' on line {line}: {source}")]
    InvalidNumber {
        /// The consumed text.
        lexeme: String,
        /// Line the literal started on.
        line: u32,
        /// The underlying parse error.
        source: ParseFloatError,
    },

    /// A number literal too large to be represented as a finite `f64`.
    #[error("number literal '{lexeme}' on line {line} is out of range")]
    NumberOutOfRange {
        /// The consumed text.
        lexeme: String,
        /// Line the literal started on.
        line: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ScanError::new(ScanErrorKind::UnterminatedString, 3);
        assert_eq!(err.message(), "Unterminated string.");
        assert_eq!(err.to_string(), "[line 3] Error: Unterminated string.");
    }

    #[test]
    fn test_to_diagnostic() {
        let err = ScanError::new(ScanErrorKind::UnexpectedCharacter('#'), 2);
        let diag = err.to_diagnostic();
        assert_eq!(diag.line, 2);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.to_string(), err.to_string());
    }

    #[test]
    fn test_invalid_number_display() {
        let source = "1.2.3".parse::<f64>().unwrap_err();
        let err = LexError::InvalidNumber {
            lexeme: "1.2.3".to_string(),
            line: 7,
            source,
        };
        assert!(err
            .to_string()
            .starts_with("invalid number literal '1.2.3' on line 7:"));
    }

    #[test]
    fn test_number_out_of_range_display() {
        let err = LexError::NumberOutOfRange {
            lexeme: "1e999".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "number literal '1e999' on line 2 is out of range"
        );
    }
}
