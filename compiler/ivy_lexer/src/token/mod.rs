//! Token value produced by the scanner.

use std::fmt;
use std::ops::Range;

use crate::TokenKind;

/// One lexical unit: its kind, byte range and starting line.
///
/// Tokens do not own text. Use [`SourceBuffer::lexeme`](crate::SourceBuffer::lexeme)
/// with the buffer the token was scanned from to get it back.
///
/// # Invariant
///
/// `start <= end <= source_len`. For `Eof`, `start == end == source_len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
    /// 1-based line on which the token starts.
    pub line: u32,
    pub kind: TokenKind,
}

/// Size assertion: u32 * 3 + u8 kind, padded to 16 bytes.
const _: () = assert!(std::mem::size_of::<Token>() <= 16);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, start: u32, end: u32, line: u32) -> Self {
        debug_assert!(start <= end);
        Token {
            start,
            end,
            line,
            kind,
        }
    }

    /// Length of the token in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Only `Eof` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Byte range for re-slicing the source text.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}:{}-{}",
            self.kind, self.line, self.start, self.end
        )
    }
}
