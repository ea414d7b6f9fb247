use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tokenizer::{
    lexer::lexer::{tokenize, tokenize_strict},
    render_error,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SAMPLE: &str = "let five = 5;
let ten = 10;

if (five != ten) {
    return true;
};

if (five == ten) {
    return false;
};
";

/// Prints the tokens of a source file, one per line, ending with `Eof`.
#[derive(Parser, Debug)]
#[command(name = "tokenize")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a source file", long_about = None)]
struct Cli {
    /// Source file to tokenize (default: a built-in sample program)
    file: Option<PathBuf>,

    /// Stop with a diagnostic at the first illegal character
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, env = "TOKENIZE_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "TOKENIZE_NO_COLOR")]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let (source, file_name) = match &cli.file {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (source, path.display().to_string())
        }
        None => (String::from(SAMPLE), String::from("<sample>")),
    };

    info!(file = %file_name, strict = cli.strict, "tokenizing");

    let tokens = if cli.strict {
        match tokenize_strict(source.as_str(), Some(file_name)) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprint!("{}", render_error(&error, &source));
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        tokenize(source.as_str())
    };

    for token in &tokens {
        println!("{}", token);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
