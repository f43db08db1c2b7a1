use std::{path::PathBuf, process};

use arith::{run, run_file, run_prompt, utils::logger::StdoutLogger, Options};
use clap::Parser;

/// Evaluates arithmetic expressions built from numbers, + - * /, unary minus
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate each line of this file instead of starting a prompt.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print the token stream before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree before evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Expression to evaluate once.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let options = Options {
        show_tokens: args.tokens,
        show_ast: args.ast,
    };

    let result = match (args.file, args.expression) {
        (Some(path), _) => run_file(path, None, options),
        (None, Some(expression)) => {
            run(&expression, Box::new(StdoutLogger), options).map(|_| ())
        }
        (None, None) => run_prompt(options),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(65);
    }
}
