//! loxc-util - Shared infrastructure for the loxc toolchain.
//!
//! The only thing every phase of loxc needs to agree on today is how
//! problems are reported, so this crate carries the diagnostic layer:
//!
//! - [`Diagnostic`] - a single message attached to a source line
//! - [`DiagnosticCode`] - stable identifiers for each kind of diagnostic
//! - [`Handler`] - the collector a driver threads through a session
//!
//! # Example
//!
//! ```
//! use loxc_util::{Diagnostic, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("Unexpected character: @", 1)
//!         .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 1] Error: Unexpected character: @"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
