//! Slash and line comment lexing.

use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a slash or skips a line comment. The leading `/` has already
    /// been consumed.
    ///
    /// Handles: `/`, `//`
    pub(crate) fn lex_slash(&mut self) {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
        } else {
            self.add_token(TokenKind::Slash, Literal::None);
        }
    }

    /// Skips to the end of the line. The newline itself is left for the
    /// outer loop.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
