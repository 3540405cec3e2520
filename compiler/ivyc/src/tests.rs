#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::{Path, PathBuf};

use ivy_lexer::CommentMode;
use pretty_assertions::assert_eq;

use super::*;

fn run(config: &Config, source: &str) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let clean = report(config, source, &mut out, &mut err).unwrap();
    (
        clean,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// === Argument Parsing ===

#[test]
fn no_args_reads_stdin() {
    let config = Config::from_args(Vec::<String>::new()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.script, None);
}

#[test]
fn script_path() {
    let config = Config::from_args(["main.ivy"]).unwrap();
    assert_eq!(config.script, Some(PathBuf::from("main.ivy")));
    assert!(!config.print_tokens);
}

#[test]
fn flags_in_any_order() {
    let config = Config::from_args(["--discard-comments", "main.ivy", "-t"]).unwrap();
    assert_eq!(config.script.as_deref(), Some(Path::new("main.ivy")));
    assert!(config.print_tokens);
    assert_eq!(config.scan.comments, CommentMode::Discard);
}

#[test]
fn long_tokens_flag() {
    assert!(Config::from_args(["--tokens"]).unwrap().print_tokens);
}

#[test]
fn help_flags() {
    assert!(Config::from_args(["-h"]).unwrap().help);
    assert!(Config::from_args(["--help"]).unwrap().help);
}

#[test]
fn unknown_option_is_usage_error() {
    let err = Config::from_args(["--verbose"]).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.to_string(), "unknown option '--verbose'");
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn second_script_is_usage_error() {
    let err = Config::from_args(["a.ivy", "b.ivy"]).unwrap_err();
    assert_eq!(err.to_string(), "unexpected argument 'b.ivy'");
    assert_eq!(err.exit_code(), 64);
}

// === Reading ===

#[test]
fn missing_file_message() {
    let config = Config::from_args(["definitely/not/here.ivy"]).unwrap();
    let err = read_source(&config).unwrap_err();
    assert_eq!(err.to_string(), "cannot find file 'definitely/not/here.ivy'");
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[test]
fn read_error_messages_by_kind() {
    let read = |kind: io::ErrorKind| CliError::Read {
        path: "s.ivy".to_owned(),
        source: io::Error::new(kind, "boom"),
    };
    assert_eq!(
        read(io::ErrorKind::PermissionDenied).to_string(),
        "permission denied reading 's.ivy'"
    );
    assert_eq!(
        read(io::ErrorKind::InvalidData).to_string(),
        "'s.ivy' contains invalid UTF-8 data"
    );
    assert_eq!(
        read(io::ErrorKind::Other).to_string(),
        "error reading 's.ivy': boom"
    );
}

#[test]
fn read_error_keeps_source() {
    use std::error::Error as _;
    let err = CliError::Read {
        path: "s.ivy".to_owned(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.source().is_some());
}

#[test]
fn reads_existing_file() {
    let path = std::env::temp_dir().join(format!("ivyc-read-{}.ivy", std::process::id()));
    std::fs::write(&path, "var x = 1;").unwrap();
    let config = Config {
        script: Some(path.clone()),
        ..Config::default()
    };
    let source = read_source(&config);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(source.unwrap(), "var x = 1;");
}

// === Reporting ===

#[test]
fn clean_source_prints_done() {
    let (clean, out, err) = run(&Config::default(), "fn main() { return 0; }");
    assert!(clean);
    assert_eq!(out, "Done!\n");
    assert_eq!(err, "");
}

#[test]
fn empty_source_is_clean() {
    let (clean, out, _) = run(&Config::default(), "");
    assert!(clean);
    assert_eq!(out, "Done!\n");
}

#[test]
fn errors_reported_per_invalid_token() {
    let (clean, out, err) = run(&Config::default(), "var a = @;\nvar b = \"open");
    assert!(!clean);
    assert_eq!(out, "");
    assert_eq!(
        err,
        "error: line 1: unexpected character '@'\n\
         \x20   1 | var a = @;\n\
         error: line 2: unterminated string literal\n\
         \x20   2 | var b = \"open\n"
    );
}

#[test]
fn error_source_line_drops_crlf() {
    let (_, _, err) = run(&Config::default(), "ok;\r\nx = $;\r\nmore;");
    assert_eq!(
        err,
        "error: line 2: unexpected character '$'\n    2 | x = $;\n"
    );
}

#[test]
fn multiline_string_error_shows_first_line() {
    let (_, _, err) = run(&Config::default(), "a;\n\"one\ntwo");
    assert_eq!(
        err,
        "error: line 2: unterminated string literal\n    2 | \"one\n"
    );
}

#[test]
fn token_listing() {
    let config = Config {
        print_tokens: true,
        ..Config::default()
    };
    let (clean, out, _) = run(&config, "x += 1; // hi");
    assert!(clean);
    assert_eq!(
        out,
        "[identifier] 1:0-1 \"x\"\n\
         [plus_equals] 1:2-4 \"+=\"\n\
         [literal_number] 1:5-6 \"1\"\n\
         [semicolon] 1:6-7 \";\"\n\
         [comment_line] 1:8-13 \"// hi\"\n\
         [eof] 1:13-13 \"\"\n\
         Done!\n"
    );
}

#[test]
fn token_listing_discarding_comments() {
    let config = Config::from_args(["-t", "--discard-comments"]).unwrap();
    let (_, out, _) = run(&config, "// only a comment\n");
    assert_eq!(out, "[eof] 2:18-18 \"\"\nDone!\n");
}

// === Tracing ===

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
