//! `jrd` - reads and validates a JSON file, reporting every diagnostic it
//! finds or pretty-printing the parsed value.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use jrd_drv::{from_file, printer, FromFileError};
use jrd_par::ParserConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// jrd - a standalone JSON reader and validator
#[derive(ClapParser, Debug)]
#[command(name = "jrd")]
#[command(author = "Fax Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reads, validates, and pretty-prints a JSON file", long_about = None)]
struct Cli {
    /// Path to the .json file to read
    path: PathBuf,

    /// Accept a trailing comma before a closing ']' or '}'
    #[arg(long)]
    allow_trailing_comma: bool,

    /// Accept a top-level scalar instead of requiring an object or array
    #[arg(long)]
    allow_bare_scalar: bool,

    /// Report only the first diagnostic instead of all of them
    #[arg(long)]
    first_error_only: bool,

    /// Spaces per indent level when pretty-printing
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, env = "JRD_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ParserConfig::new()
        .allow_trailing_comma(cli.allow_trailing_comma)
        .allow_bare_scalar(cli.allow_bare_scalar)
        .throw_all_errors(!cli.first_error_only);

    match from_file(&cli.path, config) {
        Ok(value) => {
            println!("{}", printer::to_string(&value, cli.indent));
            ExitCode::SUCCESS
        },
        Err(FromFileError::Filesystem(err)) => {
            eprintln!("jrd: {err}");
            ExitCode::FAILURE
        },
        Err(FromFileError::Syntax(report)) => {
            eprint!("{report}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
