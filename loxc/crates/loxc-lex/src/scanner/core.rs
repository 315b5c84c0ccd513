//! Core scanner implementation.
//!
//! This module contains the Scanner struct, its outer loop and the
//! dispatch from catalog classifications to sub-scans.

use tracing::{debug, trace};

use crate::catalog::{classify, Class};
use crate::cursor::Cursor;
use crate::error::{LexError, ScanError, ScanErrorKind};
use crate::token::{Literal, Token, TokenKind};

/// Scanner for loxc source text.
///
/// A scanner is built for one source buffer and consumed by
/// [`Scanner::scan`], so nothing it accumulates can leak into another
/// scan.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
///
/// let scanned = Scanner::new("1 <= 2").scan().unwrap();
/// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Number, TokenKind::LessEqual, TokenKind::Number, TokenKind::Eof]
/// );
/// assert!(!scanned.has_errors());
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens emitted so far.
    tokens: Vec<Token>,

    /// Lexical errors collected so far.
    errors: Vec<ScanError>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,
}

/// The result of scanning one source buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Scanned {
    /// Tokens in source order, always terminated by exactly one `EOF`.
    pub tokens: Vec<Token>,
    /// Lexical errors in detection order.
    pub errors: Vec<ScanError>,
}

impl Scanned {
    /// Returns true if any lexical error was collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Splits the result into its token and error collections.
    pub fn into_parts(self) -> (Vec<Token>, Vec<ScanError>) {
        (self.tokens, self.errors)
    }
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            errors: Vec::new(),
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Scans the whole buffer.
    ///
    /// Lexical errors never stop the scan; they are collected in
    /// [`Scanned::errors`]. The only `Err` is an internal fault.
    pub fn scan(mut self) -> Result<Scanned, LexError> {
        loop {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            let Some(c) = self.cursor.advance() else {
                break;
            };
            self.scan_token(c)?;
        }

        let line = self.cursor.line();
        self.tokens.push(Token::eof(line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = line,
            "scan finished"
        );

        Ok(Scanned {
            tokens: self.tokens,
            errors: self.errors,
        })
    }

    /// Dispatches on the classification of `c`, which has already been
    /// consumed.
    fn scan_token(&mut self, c: char) -> Result<(), LexError> {
        match classify(c) {
            Some(Class::Token(TokenKind::Slash)) => self.lex_slash(),
            Some(Class::Token(
                kind @ (TokenKind::Equal | TokenKind::Bang | TokenKind::Greater | TokenKind::Less),
            )) => self.lex_operator(c, kind),
            Some(Class::Token(kind)) => self.add_token(kind, Literal::None),
            Some(Class::StringStart) => self.lex_string(),
            Some(Class::NumberStart) => self.lex_number()?,
            // The cursor already counted the newline.
            Some(Class::Newline) | Some(Class::Whitespace) => {},
            None => self.report(ScanErrorKind::UnexpectedCharacter(c)),
        }
        Ok(())
    }

    /// Emits a token spanning from the token start to the cursor.
    pub(crate) fn add_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.cursor.slice_from(self.token_start);
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.token_start_line));
    }

    /// Records a lexical error on the line the current token started.
    pub(crate) fn report(&mut self, kind: ScanErrorKind) {
        trace!(line = self.token_start_line, error = %kind, "lexical error");
        self.errors.push(ScanError::new(kind, self.token_start_line));
    }
}
