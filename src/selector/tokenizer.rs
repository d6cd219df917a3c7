//! logos-based selector tokenizer.
//!
//! A selector such as `h1.title#main` lexes into marker tokens (`.`, `#`) and
//! the runs of text between them. Text runs are split into [`Token::Name`]
//! (a valid class/id identifier) and [`Token::Junk`] (anything else), so the
//! parser can tell whether a segment is a single well-formed identifier.

use std::ops::Range;

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `.` — starts a class segment.
    #[token(".")]
    Dot,

    /// `#` — starts an id segment.
    #[token("#")]
    Hash,

    /// Identifier: `[A-Za-z0-9_][A-Za-z0-9_-]*`.
    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_-]*")]
    Name,

    /// Any run of characters that cannot start or continue an identifier,
    /// e.g. a leading `-`, whitespace, or punctuation.
    #[regex(r"[^.#A-Za-z0-9_]+")]
    Junk,
}

impl Token {
    /// Whether this token opens a class or id segment.
    pub fn is_marker(self) -> bool {
        matches!(self, Token::Dot | Token::Hash)
    }
}

/// Tokenize a selector into `(Token, byte span)` pairs.
///
/// Every byte of the input is covered by exactly one token. Lexer errors
/// cannot occur with this token set, but should one surface it is reported as
/// [`Token::Junk`] so that the span coverage holds.
pub fn tokenize(input: &str) -> Vec<(Token, Range<usize>)> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(Token::Junk), span))
        .collect()
}
