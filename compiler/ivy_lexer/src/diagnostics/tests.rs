use pretty_assertions::assert_eq;

use super::*;
use crate::Scanner;

fn errors(source: &str) -> Vec<LexError> {
    let buf = SourceBuffer::new(source);
    let tokens = Scanner::new(buf.cursor()).scan_all();
    collect_errors(&buf, &tokens)
}

fn messages(source: &str) -> Vec<String> {
    errors(source).iter().map(ToString::to_string).collect()
}

#[test]
fn clean_source_has_no_errors() {
    assert!(errors("fn f() { return 1; }").is_empty());
    assert!(errors("").is_empty());
}

#[test]
fn non_invalid_token_is_none() {
    let buf = SourceBuffer::new("x");
    let tok = Token::new(TokenKind::Identifier, 0, 1, 1);
    assert_eq!(LexError::from_token(&buf, &tok), None);
}

#[test]
fn unterminated_string() {
    assert_eq!(
        errors("var s = \"abc\ndef"),
        vec![LexError {
            kind: LexErrorKind::UnterminatedString,
            start: 8,
            end: 16,
            line: 1,
        }]
    );
}

#[test]
fn unexpected_character() {
    let errs = errors("a @ b");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].kind, LexErrorKind::UnexpectedCharacter('@'));
    assert_eq!((errs[0].start, errs[0].end), (2, 3));
}

#[test]
fn multibyte_character_kept_whole() {
    let errs = errors("\u{3bb}");
    assert_eq!(errs[0].kind, LexErrorKind::UnexpectedCharacter('\u{3bb}'));
    assert_eq!((errs[0].start, errs[0].end), (0, 2));
}

#[test]
fn bare_carriage_return() {
    assert_eq!(errors("a\rb")[0].kind, LexErrorKind::BareCarriageReturn);
}

#[test]
fn interior_null() {
    assert_eq!(errors("a\0b")[0].kind, LexErrorKind::InteriorNull);
}

#[test]
fn errors_are_in_source_order_with_lines() {
    let lines: Vec<_> = errors("@\n$\n\n#").iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn display_messages() {
    assert_eq!(
        messages("@\n\"open"),
        vec![
            "line 1: unexpected character '@'".to_owned(),
            "line 2: unterminated string literal".to_owned(),
        ]
    );
    assert_eq!(
        messages("x\ry"),
        vec!["line 1: carriage return not followed by a newline".to_owned()]
    );
    assert_eq!(messages("\0x"), vec!["line 1: unexpected null byte".to_owned()]);
}

#[test]
fn control_character_is_escaped_in_message() {
    assert_eq!(
        messages("\x01"),
        vec!["line 1: unexpected character '\\u{1}'".to_owned()]
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let errs = errors("@");
    assert_error(&errs[0]);
}
