//! Reserved keyword table.
//!
//! Six words are reserved: `fn`, `if`, `else`, `return`, `for`, `var`.
//! Lookup is exact and case-sensitive (`If` and `ifx` are identifiers).
//!
//! The table is a length-bucketed `match`, so it is compiled into the binary
//! and needs no runtime initialization. Lookup takes a borrowed view of the
//! identifier span; nothing is allocated per identifier.

use crate::TokenKind;

/// Shortest and longest reserved word, in bytes.
const MIN_LEN: usize = 2;
const MAX_LEN: usize = 6;

/// Look up a reserved keyword by its exact spelling.
///
/// Returns `None` for ordinary identifiers. Spellings outside the 2-6 byte
/// range are rejected before any comparison.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    if !(MIN_LEN..=MAX_LEN).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::KeywordFn),
            "if" => Some(TokenKind::KeywordIf),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::KeywordFor),
            "var" => Some(TokenKind::KeywordVar),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::KeywordElse),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::KeywordReturn),
            _ => None,
        },
        _ => None,
    }
}
