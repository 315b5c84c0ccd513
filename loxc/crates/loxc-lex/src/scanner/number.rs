//! Number literal lexing.
//!
//! Numbers are a run of decimal digits with an optional fractional part.
//! A `.` joins the number only when a digit follows it, so `12.` is a
//! number and a dot, and `1.2.3` is `1.2`, `.`, `3`.

use crate::catalog::is_digit;
use crate::error::LexError;
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal. The first digit has already been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidNumber`] if the consumed text does not
    /// parse as `f64`, which only happens if the digit rules above are
    /// broken, and [`LexError::NumberOutOfRange`] if the value overflows to
    /// infinity.
    pub(crate) fn lex_number(&mut self) -> Result<(), LexError> {
        self.cursor.eat_while(is_digit);

        let has_fraction = self.cursor.current_char() == Some('.')
            && self.cursor.peek_char(1).is_some_and(is_digit);
        if has_fraction {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let text = self.cursor.slice_from(self.token_start);
        let value = text
            .parse::<f64>()
            .map_err(|source| LexError::InvalidNumber {
                lexeme: text.to_string(),
                line: self.token_start_line,
                source,
            })?;
        if !value.is_finite() {
            return Err(LexError::NumberOutOfRange {
                lexeme: text.to_string(),
                line: self.token_start_line,
            });
        }

        self.add_token(TokenKind::Number, Literal::Number(value));
        Ok(())
    }
}
