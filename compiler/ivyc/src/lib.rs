//! Ivy command-line harness.
//!
//! Loads one script (or standard input), scans it, and reports every
//! lexical error. The binary in `main.rs` is a thin wrapper that maps
//! [`CliError`] and the scan outcome onto exit codes.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Once;

use ivy_lexer::{collect_errors, ScanOptions, Scanner, SourceBuffer};
use tracing::debug;

pub const USAGE: &str = "\
Usage: ivyc [options] [script]

Scans the script (or standard input when no script is given) and reports
lexical errors.

Options:
  -t, --tokens          Print every token with its lexeme
  --discard-comments    Skip comments instead of emitting them as tokens
  -h, --help            Show this help message

Set RUST_LOG (e.g. RUST_LOG=ivy_lexer=debug) to enable scanner logging.";

/// Exit code for malformed command lines (`EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;
/// Exit code for read failures and scripts with lexical errors.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that stop the harness before or while loading the source.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{}", read_message(.path, .source))]
    Read { path: String, source: io::Error },
    #[error("error reading standard input: {0}")]
    Stdin(#[source] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Read { .. } | CliError::Stdin(_) => EXIT_FAILURE,
        }
    }
}

fn read_message(path: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// Settings parsed from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Script to scan; `None` reads standard input.
    pub script: Option<PathBuf>,
    pub print_tokens: bool,
    pub help: bool,
    pub scan: ScanOptions,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Config, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => config.help = true,
                "-t" | "--tokens" => config.print_tokens = true,
                "--discard-comments" => config.scan = config.scan.discard_comments(),
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option '{arg}'")));
                }
                _ if config.script.is_some() => {
                    return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
                }
                _ => config.script = Some(PathBuf::from(arg)),
            }
        }
        Ok(config)
    }
}

/// Load the script named in `config`, or all of standard input.
pub fn read_source(config: &Config) -> Result<String, CliError> {
    let source = match &config.script {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        })?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::Stdin)?;
            source
        }
    };
    debug!(script = ?config.script, bytes = source.len(), "source loaded");
    Ok(source)
}

/// Scan `source` and write the report.
///
/// Tokens (when requested) and `Done!` go to `out`. Each invalid token writes
/// an `error:` line to `err`, followed by the source line it starts on.
/// Returns `true` when the source is clean.
pub fn report(
    config: &Config,
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let buf = SourceBuffer::new(source);
    let tokens = Scanner::with_options(buf.cursor(), config.scan).scan_all();

    if config.print_tokens {
        for tok in &tokens {
            writeln!(out, "{tok} {:?}", buf.lexeme(tok))?;
        }
    }

    let errors = collect_errors(&buf, &tokens);
    for error in &errors {
        writeln!(err, "error: {error}")?;
        if let Some(text) = buf.line_text(error.line) {
            writeln!(err, "{:>5} | {text}", error.line)?;
        }
    }
    if errors.is_empty() {
        writeln!(out, "Done!")?;
    }
    Ok(errors.is_empty())
}

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
