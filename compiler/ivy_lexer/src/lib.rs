//! Ivy lexer.
//!
//! Converts a source buffer into an ordered sequence of [`Token`]s:
//! - [`SourceBuffer`] owns a sentinel-terminated copy of the source
//! - [`Cursor`] walks that buffer byte-by-byte
//! - [`Scanner`] is the state machine producing one token per step
//! - [`keywords::lookup`] reclassifies identifier spans as keywords
//! - [`diagnostics`] turns `Invalid` tokens into line-numbered errors
//!
//! # Design
//!
//! Tokens never own text. Each token is a `(kind, start, end, line)` record
//! pointing into the buffer it was scanned from; lexeme text is re-sliced on
//! demand with [`SourceBuffer::lexeme`].
//!
//! Scanning never fails. Malformed input produces `TokenKind::Invalid` and
//! scanning resumes right after it.
//!
//! ```
//! use ivy_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("var x = 1;").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::KeywordVar,
//!         TokenKind::Identifier,
//!         TokenKind::Equals,
//!         TokenKind::LiteralNumber,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

mod cursor;
pub mod diagnostics;
pub mod keywords;
mod options;
mod scanner;
mod source_buffer;
mod token;
mod token_kind;

pub use cursor::Cursor;
pub use diagnostics::{collect_errors, LexError, LexErrorKind};
pub use options::{CommentMode, ScanOptions};
pub use scanner::{tokenize, tokenize_with, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::Token;
pub use token_kind::TokenKind;
