//! Lexical categories produced by the scanner.

use std::fmt;

/// Lexical category of a [`Token`](crate::Token).
///
/// Discriminants are grouped in semantic ranges with gaps for expansion:
///
/// | Range   | Category            |
/// |---------|---------------------|
/// | 0-15    | Punctuation         |
/// | 16-31   | Single operators    |
/// | 32-47   | Composite operators |
/// | 48-63   | Literals            |
/// | 64-79   | Trivia              |
/// | 80-95   | Keywords            |
/// | 240     | Errors              |
/// | 255     | Control             |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Punctuation (0-15) ===
    /// `(`
    ParenLeft = 0,
    /// `)`
    ParenRight = 1,
    /// `{`
    BraceLeft = 2,
    /// `}`
    BraceRight = 3,
    /// `[`
    BracketLeft = 4,
    /// `]`
    BracketRight = 5,
    /// `<`, also the less-than comparison.
    AngleLeft = 6,
    /// `>`, also the greater-than comparison.
    AngleRight = 7,
    /// `.`
    Dot = 8,
    /// `;`
    Semicolon = 9,
    /// `:`
    Colon = 10,

    // === Single operators (16-31) ===
    /// `*`
    Star = 16,
    /// `+`
    Plus = 17,
    /// `-`
    Minus = 18,
    /// `!`
    Bang = 19,
    /// `=`
    Equals = 20,
    /// `/`
    SlashForward = 21,

    // === Composite operators (32-47) ===
    /// `::`
    ColonColon = 32,
    /// `+=`
    PlusEquals = 33,
    /// `-=`
    MinusEquals = 34,
    /// `!=`
    BangEquals = 35,
    /// `==`
    EqualsEquals = 36,
    /// `>=`
    GreaterEquals = 37,
    /// `<=`
    LesserEquals = 38,

    // === Literals (48-63) ===
    Identifier = 48,
    /// String literal including both quotes. Escapes are not resolved.
    LiteralString = 49,
    /// Integer or decimal literal.
    LiteralNumber = 50,

    // === Trivia (64-79) ===
    /// `//` comment up to (not including) the line end.
    CommentLine = 64,

    // === Keywords (80-95) ===
    KeywordFn = 80,
    KeywordIf = 81,
    KeywordElse = 82,
    KeywordReturn = 83,
    KeywordFor = 84,
    KeywordVar = 85,

    // === Errors (240) ===
    /// Unrecognized character, unterminated string, or bare `\r`.
    Invalid = 240,

    // === Control (255) ===
    Eof = 255,
}

impl TokenKind {
    /// Snake-case name of the kind, as used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ParenLeft => "paren_left",
            Self::ParenRight => "paren_right",
            Self::BraceLeft => "brace_left",
            Self::BraceRight => "brace_right",
            Self::BracketLeft => "bracket_left",
            Self::BracketRight => "bracket_right",
            Self::AngleLeft => "angle_left",
            Self::AngleRight => "angle_right",
            Self::Dot => "dot",
            Self::Semicolon => "semicolon",
            Self::Colon => "colon",
            Self::Star => "star",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Bang => "bang",
            Self::Equals => "equals",
            Self::SlashForward => "slash_forward",
            Self::ColonColon => "colon_colon",
            Self::PlusEquals => "plus_equals",
            Self::MinusEquals => "minus_equals",
            Self::BangEquals => "bang_equals",
            Self::EqualsEquals => "equals_equals",
            Self::GreaterEquals => "greater_equals",
            Self::LesserEquals => "lesser_equals",
            Self::Identifier => "identifier",
            Self::LiteralString => "literal_string",
            Self::LiteralNumber => "literal_number",
            Self::CommentLine => "comment_line",
            Self::KeywordFn => "keyword_fn",
            Self::KeywordIf => "keyword_if",
            Self::KeywordElse => "keyword_else",
            Self::KeywordReturn => "keyword_return",
            Self::KeywordFor => "keyword_for",
            Self::KeywordVar => "keyword_var",
            Self::Invalid => "invalid",
            Self::Eof => "eof",
        }
    }

    /// Fixed source spelling, if this kind always has the same text.
    ///
    /// Returns `None` for identifiers, literals, comments, `Invalid` and `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::ParenLeft => Some("("),
            Self::ParenRight => Some(")"),
            Self::BraceLeft => Some("{"),
            Self::BraceRight => Some("}"),
            Self::BracketLeft => Some("["),
            Self::BracketRight => Some("]"),
            Self::AngleLeft => Some("<"),
            Self::AngleRight => Some(">"),
            Self::Dot => Some("."),
            Self::Semicolon => Some(";"),
            Self::Colon => Some(":"),
            Self::Star => Some("*"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Bang => Some("!"),
            Self::Equals => Some("="),
            Self::SlashForward => Some("/"),
            Self::ColonColon => Some("::"),
            Self::PlusEquals => Some("+="),
            Self::MinusEquals => Some("-="),
            Self::BangEquals => Some("!="),
            Self::EqualsEquals => Some("=="),
            Self::GreaterEquals => Some(">="),
            Self::LesserEquals => Some("<="),
            Self::KeywordFn => Some("fn"),
            Self::KeywordIf => Some("if"),
            Self::KeywordElse => Some("else"),
            Self::KeywordReturn => Some("return"),
            Self::KeywordFor => Some("for"),
            Self::KeywordVar => Some("var"),
            Self::Identifier
            | Self::LiteralString
            | Self::LiteralNumber
            | Self::CommentLine
            | Self::Invalid
            | Self::Eof => None,
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 80..=95)
    }

    /// Returns `true` for tokens a parser normally skips (comments).
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self as u8, 64..=79)
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
