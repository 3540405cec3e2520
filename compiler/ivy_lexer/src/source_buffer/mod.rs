//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end-of-input without explicit bounds checks. The
//! total size is rounded up to the next 64-byte boundary, which also gives
//! `peek()` safe zero padding near the end.
//!
//! The buffer is never mutated after construction. A [`Scanner`](crate::Scanner)
//! holds a shared borrow of it through its [`Cursor`], so the borrow checker
//! rules out mutation while a scan is in progress.

use tracing::warn;

use crate::{Cursor, Token};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of a source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Token offsets are `u32`, so sources larger than `u32::MAX` bytes are
    /// truncated at the last character boundary that fits.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = truncated_len(source, u32::MAX as usize);
        if source_len < source_bytes.len() {
            warn!(
                len = source_bytes.len(),
                kept = source_len,
                "source exceeds u32 offsets; scanning a truncated prefix"
            );
        }
        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&source_bytes[..source_len]);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Source text of a token scanned from this buffer.
    ///
    /// Returns `""` for `Eof` and for spans outside this buffer.
    pub fn lexeme(&self, token: &Token) -> &str {
        self.as_bytes()
            .get(token.range())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Text of a 1-based line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `None` when `line` is 0 or past the last line.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        let bytes = self.as_bytes();

        let mut start = 0usize;
        for _ in 0..index {
            let offset = memchr::memchr(b'\n', &bytes[start..])?;
            start += offset + 1;
        }

        let end = memchr::memchr(b'\n', &bytes[start..]).map_or(bytes.len(), |off| start + off);
        let end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        #[allow(
            clippy::cast_possible_truncation,
            reason = "start and end are <= source_len which fits in u32"
        )]
        Some(self.cursor().slice(start as u32, end as u32))
    }
}

/// Longest prefix of `source` that fits in `limit` bytes and ends on a char
/// boundary.
fn truncated_len(source: &str, limit: usize) -> usize {
    let mut len = source.len().min(limit);
    while !source.is_char_boundary(len) {
        len -= 1;
    }
    len
}

/// Size assertion: `SourceBuffer` should be 32 bytes on 64-bit platforms.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
