//! String literal lexing.
//!
//! Strings run from `"` to the next `"`. There are no escape sequences, so
//! a string can never contain a double quote; it may span several lines.

use crate::error::ScanErrorKind;
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal. The opening quote has already been consumed.
    ///
    /// Emits a `STRING` token whose lexeme keeps the quotes and whose
    /// literal drops them. An unterminated string is reported on the line
    /// it started and produces no token.
    pub(crate) fn lex_string(&mut self) {
        self.cursor.eat_while(|c| c != '"');

        if !self.cursor.match_char('"') {
            self.report(ScanErrorKind::UnterminatedString);
            return;
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        let contents = &lexeme[1..lexeme.len() - 1];
        self.add_token(TokenKind::String, Literal::String(contents.to_string()));
    }
}
