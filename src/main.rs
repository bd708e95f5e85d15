use std::process::ExitCode;

use calc::{error::CalcError, evaluate, to_postfix, tokenize};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calc evaluates an arithmetic expression over integers and floats, such as
/// "3 + 4 * 2" or "sin(1.5) ^ 2".
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the expression in postfix order instead of evaluating it.
    #[arg(short, long, conflicts_with = "tokens")]
    postfix: bool,

    /// Prints the scanned tokens, one per line, instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// The expression to evaluate. Quote it so the shell passes it as a
    /// single argument.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Logs go to stderr so that stdout only ever carries the result. The level
/// is taken from `RUST_LOG` and defaults to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn run(args: &Args) -> Result<(), CalcError> {
    if args.tokens {
        for token in tokenize(&args.expression)? {
            println!("{token}");
        }
    } else if args.postfix {
        println!("{}", to_postfix(&args.expression)?);
    } else {
        println!("{}", evaluate(&args.expression)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
