//! Token catalog.
//!
//! Static mapping from input symbols to what the scanner should do with
//! them. Single characters are looked up with [`classify`]; the
//! two-character operators (`==`, `!=`, `<=`, `>=`) with [`classify_pair`].
//! Anything missing from the table is `None`, which the scanner reports as
//! an unexpected character.

use crate::token::TokenKind;

/// Classification of a single input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// Starts a token of the given kind. For `=`, `!`, `>`, `<` and `/`
    /// this is the single-character kind; the scanner may still extend it
    /// with one character of lookahead.
    Token(TokenKind),
    /// Opening `"` of a string literal.
    StringStart,
    /// First digit of a number literal.
    NumberStart,
    /// `\n`
    Newline,
    /// Space or tab.
    Whitespace,
}

/// Classifies a single character.
///
/// # Example
///
/// ```
/// use loxc_lex::catalog::{classify, Class};
/// use loxc_lex::TokenKind;
///
/// assert_eq!(classify('('), Some(Class::Token(TokenKind::LeftParen)));
/// assert_eq!(classify('7'), Some(Class::NumberStart));
/// assert_eq!(classify('@'), None);
/// ```
pub fn classify(c: char) -> Option<Class> {
    let class = match c {
        '(' => Class::Token(TokenKind::LeftParen),
        ')' => Class::Token(TokenKind::RightParen),
        '{' => Class::Token(TokenKind::LeftBrace),
        '}' => Class::Token(TokenKind::RightBrace),
        '*' => Class::Token(TokenKind::Star),
        ',' => Class::Token(TokenKind::Comma),
        '.' => Class::Token(TokenKind::Dot),
        '+' => Class::Token(TokenKind::Plus),
        '-' => Class::Token(TokenKind::Minus),
        ';' => Class::Token(TokenKind::Semicolon),
        '/' => Class::Token(TokenKind::Slash),
        '=' => Class::Token(TokenKind::Equal),
        '!' => Class::Token(TokenKind::Bang),
        '>' => Class::Token(TokenKind::Greater),
        '<' => Class::Token(TokenKind::Less),
        '"' => Class::StringStart,
        '0'..='9' => Class::NumberStart,
        '\n' => Class::Newline,
        ' ' | '\t' => Class::Whitespace,
        _ => return None,
    };
    Some(class)
}

/// Classifies a two-character operator.
///
/// # Example
///
/// ```
/// use loxc_lex::catalog::classify_pair;
/// use loxc_lex::TokenKind;
///
/// assert_eq!(classify_pair('<', '='), Some(TokenKind::LessEqual));
/// assert_eq!(classify_pair('=', '>'), None);
/// ```
pub fn classify_pair(first: char, second: char) -> Option<TokenKind> {
    match (first, second) {
        ('=', '=') => Some(TokenKind::EqualEqual),
        ('!', '=') => Some(TokenKind::BangEqual),
        ('<', '=') => Some(TokenKind::LessEqual),
        ('>', '=') => Some(TokenKind::GreaterEqual),
        _ => None,
    }
}

/// Returns true if `c` is a decimal digit in the catalog.
#[inline]
pub fn is_digit(c: char) -> bool {
    classify(c) == Some(Class::NumberStart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation() {
        let table = [
            ('(', TokenKind::LeftParen),
            (')', TokenKind::RightParen),
            ('{', TokenKind::LeftBrace),
            ('}', TokenKind::RightBrace),
            ('*', TokenKind::Star),
            (',', TokenKind::Comma),
            ('.', TokenKind::Dot),
            ('+', TokenKind::Plus),
            ('-', TokenKind::Minus),
            (';', TokenKind::Semicolon),
            ('/', TokenKind::Slash),
            ('=', TokenKind::Equal),
            ('!', TokenKind::Bang),
            ('>', TokenKind::Greater),
            ('<', TokenKind::Less),
        ];
        for (c, kind) in table {
            assert_eq!(classify(c), Some(Class::Token(kind)), "symbol {:?}", c);
        }
    }

    #[test]
    fn test_markers() {
        assert_eq!(classify('"'), Some(Class::StringStart));
        assert_eq!(classify('\n'), Some(Class::Newline));
        assert_eq!(classify(' '), Some(Class::Whitespace));
        assert_eq!(classify('\t'), Some(Class::Whitespace));
        for c in '0'..='9' {
            assert_eq!(classify(c), Some(Class::NumberStart));
            assert!(is_digit(c));
        }
    }

    #[test]
    fn test_not_found() {
        for c in ['@', '#', '$', '%', '[', ']', 'a', '_', '\r', '\0', 'é'] {
            assert_eq!(classify(c), None, "symbol {:?}", c);
        }
        assert!(!is_digit('.'));
    }

    #[test]
    fn test_pairs() {
        assert_eq!(classify_pair('=', '='), Some(TokenKind::EqualEqual));
        assert_eq!(classify_pair('!', '='), Some(TokenKind::BangEqual));
        assert_eq!(classify_pair('>', '='), Some(TokenKind::GreaterEqual));
        assert_eq!(classify_pair('<', '='), Some(TokenKind::LessEqual));
        assert_eq!(classify_pair('=', '<'), None);
        assert_eq!(classify_pair('+', '='), None);
    }
}
