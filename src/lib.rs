use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use interpreter::Interpreter;
use utils::logger::{Logger, StdoutLogger};

pub mod ast_printer;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod utils;

pub use error::{Error, ParseError};
pub use interpreter::{evaluate, format_number};
pub use lexer::Lexer;
pub use parser::Parser;
pub use syntax::{
    expr::{Expr, Operator},
    token::{Token, TokenKind},
};

/// Which intermediate stages get printed alongside the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub show_tokens: bool,
    pub show_ast: bool,
}

/// Evaluates one expression, reporting through `logger`.
pub fn run(source: &str, logger: Box<dyn Logger>, options: Options) -> Result<f64, Error> {
    let mut interpreter = Interpreter::new(logger, options);
    Ok(interpreter.interpret(source)?)
}

/// Evaluates every non-blank line of a file. Lines starting with `#` are
/// comments. Stops at the first line that fails to parse.
pub fn run_file(
    path: impl AsRef<Path>,
    logger: Option<Box<dyn Logger>>,
    options: Options,
) -> Result<(), Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let logger = logger.unwrap_or_else(|| Box::new(StdoutLogger));
    let mut interpreter = Interpreter::new(logger, options);

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        interpreter
            .interpret(line)
            .map_err(|source| Error::Line {
                line: index + 1,
                source,
            })?;
    }

    Ok(())
}

/// Interactive loop on stdin.
pub fn run_prompt(options: Options) -> Result<(), Error> {
    let stdin = io::stdin();
    run_lines(stdin.lock(), Box::new(StdoutLogger), options)
}

/// Evaluates `input` line by line. `exit` or end of input leaves the loop;
/// a line that fails to parse is reported and the next one is read as usual.
pub fn run_lines(
    input: impl BufRead,
    logger: Box<dyn Logger>,
    options: Options,
) -> Result<(), Error> {
    let mut interpreter = Interpreter::new(logger, options);
    let mut lines = input.lines();

    loop {
        interpreter.prompt().map_err(Error::Prompt)?;

        let user_input = match lines.next() {
            Some(line) => line.map_err(Error::Prompt)?,
            None => break,
        };

        let user_input = user_input.trim();
        if user_input == "exit" {
            break;
        }
        if user_input.is_empty() {
            continue;
        }

        if let Err(e) = interpreter.interpret(user_input) {
            interpreter.report(&e);
        }
    }

    Ok(())
}
