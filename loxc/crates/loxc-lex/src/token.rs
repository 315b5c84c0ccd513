//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it came
//! from, its decoded [`Literal`] and the line it started on. The `Display`
//! impls here define the textual token format consumed by tooling:
//!
//! ```text
//! KIND LEXEME LITERAL
//! ```

use std::fmt;

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // Comparison and assignment
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    /// A double-quoted string literal
    String,
    /// A decimal number literal
    Number,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the upper snake case name used when rendering tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::GreaterEqual.as_str(), "GREATER_EQUAL");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded value carried by a token.
///
/// Integral numbers render with exactly one decimal place (`1234` renders
/// as `1234.0`); other numbers use the shortest exact form.
///
/// ```
/// use loxc_lex::Literal;
///
/// assert_eq!(Literal::Number(1234.0).to_string(), "1234.0");
/// assert_eq!(Literal::Number(12.25).to_string(), "12.25");
/// assert_eq!(Literal::None.to_string(), "null");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Punctuation, operators and EOF carry no value.
    None,
    /// Value of a `NUMBER` token.
    Number(f64),
    /// Contents of a `STRING` token, without the surrounding quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::Number(value) if value.fract() == 0.0 => write!(f, "{:.1}", value),
            // Scanned numbers are always finite, so this is never `inf` or `NaN`.
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(contents) => f.write_str(contents),
        }
    }
}

/// A single lexical token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text matched (empty for EOF).
    pub lexeme: String,
    /// The decoded value, if any.
    pub literal: Literal,
    /// Line on which the token started (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Creates the end-of-input token for the given final line.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", Literal::None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}
