//! Scanner module.
//!
//! The scanner is split into focused components:
//! - `core` - Scanner struct, the outer loop and token dispatch
//! - `operator` - one- and two-character operators
//! - `comment` - `/` and line comments
//! - `string` - string literal sub-scan
//! - `number` - number literal sub-scan

mod comment;
mod core;
mod number;
mod operator;
mod string;

pub use self::core::{Scanned, Scanner};
