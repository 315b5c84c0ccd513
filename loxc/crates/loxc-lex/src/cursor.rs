//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through an in-memory source buffer. The cursor only ever
//! moves forward; lookahead is done with [`Cursor::peek_char`], which never
//! mutates state, so no caller has to step back after over-reading.

/// A forward-only cursor over source text.
///
/// The cursor tracks the current byte position and the 1-based line
/// number. Every `'\n'` consumed through [`Cursor::advance`] bumps the
/// line counter, whichever sub-scan consumed it.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("(1)");
///
/// assert_eq!(cursor.current_char(), Some('('));
/// assert_eq!(cursor.advance(), Some('('));
/// assert_eq!(cursor.peek_char(1), Some(')'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead without consuming
    /// anything (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), Some('1'));
    /// assert_eq!(cursor.peek_char(2), Some('5'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Consumes and returns the current character.
    ///
    /// Returns `None` and does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the current character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds or until end of input.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123;");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.slice_from(start), "123");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
