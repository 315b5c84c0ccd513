//! loxc-lex - Scanner for the Lox scripting language
//!
//! This crate turns Lox source text into a flat sequence of tokens for
//! downstream parsing, together with every lexical error found along the
//! way.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::TokenKind;
//!
//! let scanned = loxc_lex::scan("(5 + 3) == 8").unwrap();
//!
//! for token in &scanned.tokens {
//!     println!("{}", token);
//! }
//!
//! assert_eq!(scanned.tokens[0].to_string(), "LEFT_PAREN ( null");
//! assert_eq!(scanned.tokens[1].to_string(), "NUMBER 5 5.0");
//! assert_eq!(scanned.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! assert!(scanned.errors.is_empty());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, TokenKind and Literal definitions
//! - [`catalog`] - Mapping from input symbols to token kinds
//! - [`cursor`] - Forward-only character cursor with lookahead
//! - [`scanner`] - The scanner and its sub-scans
//! - [`error`] - Lexical errors and internal faults
//!
//! # Token Categories
//!
//! ## Punctuation
//!
//! `(` `)` `{` `}` `,` `.` `;`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison and assignment**: `=`, `==`, `!`, `!=`, `<`, `<=`, `>`, `>=`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.5` (no exponent, no leading or trailing dot)
//! - **String**: `"hello"` (no escape sequences, may span lines)
//!
//! ## Skipped
//!
//! Spaces, tabs, newlines and `//` line comments.
//!
//! ## Special
//!
//! - **EOF**: always the last token, with an empty lexeme
//!
//! Any other character is reported as `Unexpected character` and skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, ScanError, ScanErrorKind};
pub use scanner::{Scanned, Scanner};
pub use token::{Literal, Token, TokenKind};

/// Scans `source` into tokens and lexical errors.
///
/// Shorthand for `Scanner::new(source).scan()`.
pub fn scan(source: &str) -> Result<Scanned, LexError> {
    Scanner::new(source).scan()
}
