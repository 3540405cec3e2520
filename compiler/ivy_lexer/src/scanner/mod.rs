//! Hand-written scanner producing [`Token`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces one
//! token per call with zero heap allocation. It does not resolve escapes or
//! parse numeric values; those are left to later stages.
//!
//! # Design
//!
//! Each call to [`Scanner::next_token`] starts in the initial state, skips
//! trivia (spaces, tabs, newlines, and comments in discard mode), then
//! dispatches on the current byte to a focused method that advances the
//! cursor over exactly one lexeme. The sentinel byte (`0x00`) dispatches to
//! the EOF check. Error conditions are encoded as `TokenKind::Invalid`, never
//! as `Result::Err`, and every non-EOF token consumes at least one byte.

use tracing::debug;

use crate::cursor::Cursor;
use crate::{keywords, CommentMode, ScanOptions, SourceBuffer, Token, TokenKind};

/// Single-pass scanner over one [`SourceBuffer`].
///
/// Use [`next_token`](Self::next_token) to pull tokens one at a time, the
/// [`Iterator`] impl to walk every token before `Eof`, or
/// [`scan_all`](Self::scan_all) to collect the whole sequence.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// 1-based line of the byte under the cursor.
    line: u32,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with default options (comments retained).
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_options(cursor, ScanOptions::default())
    }

    pub fn with_options(cursor: Cursor<'a>, options: ScanOptions) -> Self {
        Self {
            cursor,
            line: 1,
            options,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with `start == end == source_len` when the source is
    /// exhausted. Subsequent calls after EOF keep returning the same `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.cursor.pos();
            let line = self.line;
            return match self.cursor.current() {
                0 => self.eof_or_null(start, line),

                // ─── Trivia ───
                b' ' | b'\t' => {
                    self.cursor.eat_whitespace();
                    continue;
                }
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                    continue;
                }
                b'\r' => {
                    if self.cursor.peek() == b'\n' {
                        // CRLF counts as one newline
                        self.cursor.advance_n(2);
                        self.line += 1;
                        continue;
                    }
                    self.bare_carriage_return(start, line)
                }

                // ─── Single-byte punctuation ───
                b'(' => self.single(start, line, TokenKind::ParenLeft),
                b')' => self.single(start, line, TokenKind::ParenRight),
                b'{' => self.single(start, line, TokenKind::BraceLeft),
                b'}' => self.single(start, line, TokenKind::BraceRight),
                b'[' => self.single(start, line, TokenKind::BracketLeft),
                b']' => self.single(start, line, TokenKind::BracketRight),
                b'.' => self.single(start, line, TokenKind::Dot),
                b'*' => self.single(start, line, TokenKind::Star),
                b';' => self.single(start, line, TokenKind::Semicolon),

                // ─── One-byte lookahead operators ───
                b'<' => self.pair(start, line, b'=', TokenKind::AngleLeft, TokenKind::LesserEquals),
                b'>' => self.pair(start, line, b'=', TokenKind::AngleRight, TokenKind::GreaterEquals),
                b'+' => self.pair(start, line, b'=', TokenKind::Plus, TokenKind::PlusEquals),
                b'-' => self.pair(start, line, b'=', TokenKind::Minus, TokenKind::MinusEquals),
                b'!' => self.pair(start, line, b'=', TokenKind::Bang, TokenKind::BangEquals),
                b'=' => self.pair(start, line, b'=', TokenKind::Equals, TokenKind::EqualsEquals),
                b':' => self.pair(start, line, b':', TokenKind::Colon, TokenKind::ColonColon),
                b'/' => {
                    let tok = self.slash_or_comment(start, line);
                    if tok.kind.is_trivia() && self.options.comments == CommentMode::Discard
                    {
                        continue;
                    }
                    tok
                }

                // ─── Literals ───
                b'"' => self.string(start, line),
                b'0'..=b'9' => self.number(start, line),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, line),

                _ => self.invalid_char(start, line),
            };
        }
    }

    /// Drain the scanner, returning every remaining token plus one `Eof`.
    pub fn scan_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            tokens.push(tok);
            if tok.is_eof() {
                break;
            }
        }
        debug!(
            tokens = tokens.len(),
            invalid = tokens.iter().filter(|t| t.kind.is_error()).count(),
            lines = self.line,
            "scan complete"
        );
        tokens
    }

    // ─── Token construction ───

    #[inline]
    fn emit(&self, kind: TokenKind, start: u32, line: u32) -> Token {
        Token::new(kind, start, self.cursor.pos(), line)
    }

    // ─── EOF ───

    fn eof_or_null(&mut self, start: u32, line: u32) -> Token {
        if self.cursor.is_eof() {
            Token::new(TokenKind::Eof, start, start, line)
        } else {
            // Interior null byte
            self.invalid_char(start, line)
        }
    }

    // ─── Operators ───

    /// Single-byte token: advance one byte and emit the given kind.
    #[inline]
    fn single(&mut self, start: u32, line: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.emit(kind, start, line)
    }

    /// Operator that becomes `double` when followed by `second`, else `single`.
    #[inline]
    fn pair(
        &mut self,
        start: u32,
        line: u32,
        second: u8,
        single: TokenKind,
        double: TokenKind,
    ) -> Token {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.emit(double, start, line)
        } else {
            self.emit(single, start, line)
        }
    }

    // ─── Comments ───

    fn slash_or_comment(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume first '/'
        if self.cursor.current() == b'/' {
            self.cursor.advance(); // consume second '/'
            self.cursor.eat_until_line_end();
            self.emit(TokenKind::CommentLine, start, line)
        } else {
            self.emit(TokenKind::SlashForward, start, line)
        }
    }

    // ─── Literals ───

    fn string(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.emit(TokenKind::LiteralString, start, line);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if self.cursor.is_eof() {
                        continue;
                    }
                    if self.cursor.current() == b'\n' {
                        self.line += 1;
                    }
                    self.cursor.advance_char(); // escaped char stays uninterpreted
                }
                b'\n' => {
                    // Strings may span lines
                    self.cursor.advance();
                    self.line += 1;
                }
                _ => {
                    debug!(start, line, "unterminated string literal");
                    return self.emit(TokenKind::Invalid, start, line);
                }
            }
        }
    }

    #[inline]
    fn number(&mut self, start: u32, line: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // A fraction needs at least one digit after the dot; `1.` leaves the dot
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        self.emit(TokenKind::LiteralNumber, start, line)
    }

    #[inline]
    fn identifier(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);
        let kind = keywords::lookup(self.cursor.slice_from(start)).unwrap_or(TokenKind::Identifier);
        self.emit(kind, start, line)
    }

    // ─── Error tokens ───

    /// `\r` not followed by `\n`.
    fn bare_carriage_return(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance();
        debug!(start, line, "bare carriage return");
        self.emit(TokenKind::Invalid, start, line)
    }

    fn invalid_char(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance_char();
        debug!(start, line, "unexpected character");
        self.emit(TokenKind::Invalid, start, line)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Tokenize a source string with default options.
///
/// Returns every token followed by exactly one `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, ScanOptions::default())
}

/// Tokenize a source string with the given options.
pub fn tokenize_with(source: &str, options: ScanOptions) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    Scanner::with_options(buf.cursor(), options).scan_all()
}
