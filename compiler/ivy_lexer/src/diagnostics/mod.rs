//! Lexical diagnostics.
//!
//! The scanner encodes every lexical problem as a `TokenKind::Invalid` token.
//! This module recovers what went wrong from the token's span so the calling
//! layer can report it. Every `Invalid` token maps to exactly one
//! [`LexError`].

use crate::{SourceBuffer, Token, TokenKind};

/// What kind of lexical error an `Invalid` token represents.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"`; the token runs to end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedCharacter(char),
    /// `\r` with no `\n` after it.
    #[error("carriage return not followed by a newline")]
    BareCarriageReturn,
    /// A `0x00` byte before the end of the source.
    #[error("unexpected null byte")]
    InteriorNull,
}

/// A lexical error located in source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the offending span (inclusive).
    pub start: u32,
    /// Byte offset of the offending span (exclusive).
    pub end: u32,
    /// 1-based line the span starts on.
    pub line: u32,
}

impl LexError {
    /// Classify an `Invalid` token. Returns `None` for any other kind.
    pub fn from_token(buf: &SourceBuffer, token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Invalid {
            return None;
        }
        let kind = classify(buf.lexeme(token));
        Some(LexError {
            kind,
            start: token.start,
            end: token.end,
            line: token.line,
        })
    }
}

fn classify(lexeme: &str) -> LexErrorKind {
    match lexeme.chars().next() {
        Some('"') => LexErrorKind::UnterminatedString,
        Some('\r') => LexErrorKind::BareCarriageReturn,
        Some('\0') => LexErrorKind::InteriorNull,
        Some(c) => LexErrorKind::UnexpectedCharacter(c),
        None => LexErrorKind::UnexpectedCharacter(char::REPLACEMENT_CHARACTER),
    }
}

/// Collect one [`LexError`] per `Invalid` token, in source order.
pub fn collect_errors(buf: &SourceBuffer, tokens: &[Token]) -> Vec<LexError> {
    tokens
        .iter()
        .filter_map(|tok| LexError::from_token(buf, tok))
        .collect()
}

#[cfg(test)]
mod tests;
