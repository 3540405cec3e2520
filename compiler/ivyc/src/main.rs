//! Ivy lexer CLI.

use ivyc::{init_tracing, read_source, report, CliError, Config, EXIT_FAILURE, USAGE};

fn main() {
    init_tracing();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if config.help {
        println!("{USAGE}");
        return;
    }

    let source = match read_source(&config) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match report(&config, &source, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_FAILURE),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn exit_with(e: &CliError) -> ! {
    eprintln!("error: {e}");
    if matches!(e, CliError::Usage(_)) {
        eprintln!();
        eprintln!("{USAGE}");
    }
    std::process::exit(e.exit_code());
}
