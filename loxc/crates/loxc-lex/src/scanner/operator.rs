//! Operator lexing.
//!
//! Handles `=`, `!`, `>` and `<`, each of which may combine with a
//! following `=`.

use crate::catalog::classify_pair;
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a one- or two-character operator whose first character `first`
    /// has already been consumed.
    ///
    /// Handles: `=`, `==`, `!`, `!=`, `>`, `>=`, `<`, `<=`
    ///
    /// The second character is consumed only when it completes a pair.
    pub(crate) fn lex_operator(&mut self, first: char, single: TokenKind) {
        let compound = self
            .cursor
            .current_char()
            .and_then(|second| classify_pair(first, second));

        match compound {
            Some(kind) => {
                self.cursor.advance();
                self.add_token(kind, Literal::None);
            },
            None => self.add_token(single, Literal::None),
        }
    }
}
