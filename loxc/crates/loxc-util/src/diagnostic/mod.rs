//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the types a loxc phase uses to report problems
//! back to the driver. Diagnostics are line-oriented: every message is
//! attached to the 1-based line it was detected on and renders as
//!
//! ```text
//! [line <N>] Error: <message>
//! ```
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{Diagnostic, Handler};
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("Unterminated string.", 3));
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// Every problem the scanner finds fails the run, so there is one level.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "Error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A problem that makes the run fail
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "Error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Line the problem was detected on (1-based)
    pub line: u32,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
            code: None,
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Diagnostic, Level};
    ///
    /// let diag = Diagnostic::error("Unexpected character: $", 2);
    /// assert_eq!(diag.level, Level::Error);
    /// assert_eq!(diag.line, 2);
    /// ```
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.level, self.message)
    }
}

/// Collector for diagnostics emitted during a session
///
/// The handler only needs a shared reference to accept diagnostics, so a
/// driver can hand it to several phases without juggling `&mut` borrows.
/// Diagnostics are kept in emission order.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Handler};
///
/// let handler = Handler::new();
/// handler.emit(Diagnostic::error("Unexpected character: #", 1));
///
/// if handler.has_errors() {
///     eprintln!("tokenizing failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("Unterminated string.", 4);
        assert_eq!(diag.to_string(), "[line 4] Error: Unterminated string.");
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("Unexpected character: @", 1)
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        // The code never leaks into the rendered line.
        assert_eq!(diag.to_string(), "[line 1] Error: Unexpected character: @");
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);

        handler.emit(Diagnostic::error("e1", 1));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);

        handler.emit(Diagnostic::new(Level::Error, "e2", 2));
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_preserves_order() {
        let handler = Handler::default();
        handler.emit(Diagnostic::error("first", 3));
        handler.emit(Diagnostic::error("second", 1));

        let messages: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
