use std::io;

use crate::{
    ast_printer::AstPrinter,
    error::ParseError,
    lexer::Lexer,
    parser::Parser,
    syntax::{
        expr::{Expr, Operator, Visitor},
        token::Token,
    },
    utils::logger::Logger,
    Options,
};

/// Reduces an expression tree to its value.
///
/// Division follows IEEE-754: dividing by zero yields an infinity, or NaN for
/// `0 / 0`.
pub fn evaluate(expr: &Expr) -> f64 {
    Evaluator.visit_expr(expr)
}

struct Evaluator;

impl Visitor<f64> for Evaluator {
    fn visit_expr(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Number { value } => *value,
            Expr::Prefix { operator, right } => {
                let right = self.visit_expr(right);
                match operator {
                    Operator::Minus => -right,
                    _ => unreachable!("unsupported prefix operator {operator}"),
                }
            }
            Expr::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.visit_expr(left);
                let right = self.visit_expr(right);
                match operator {
                    Operator::Plus => left + right,
                    Operator::Minus => left - right,
                    Operator::Asterisk => left * right,
                    Operator::Slash => left / right,
                }
            }
        }
    }
}

/// Formats a result the way the prompt shows it: integral values drop the
/// trailing `.0`.
pub fn format_number(value: f64) -> String {
    let s = value.to_string();
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

/// Runs single lines through the whole pipeline and reports each stage.
pub struct Interpreter {
    logger: Box<dyn Logger>,
    options: Options,
}

impl Interpreter {
    pub fn new(logger: Box<dyn Logger>, options: Options) -> Interpreter {
        Interpreter { logger, options }
    }

    pub fn interpret(&mut self, source: &str) -> Result<f64, ParseError> {
        if self.options.show_tokens {
            let tokens: Vec<String> = Lexer::new(source).map(|t| describe(&t)).collect();
            self.logger
                .print(format_args!("Tokens: [{}]", tokens.join(", ")));
        }

        let expr = Parser::new(source).parse()?;
        if self.options.show_ast {
            self.logger
                .print(format_args!("AST: {}", AstPrinter.print(&expr)));
        }

        let value = evaluate(&expr);
        log::debug!("{source:?} evaluated to {value}");
        self.logger
            .print(format_args!("Result: {}", format_number(value)));
        Ok(value)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        self.logger.prompt()
    }

    pub fn report(&mut self, error: &ParseError) {
        self.logger.error(format_args!("Error: {error}"));
    }
}

fn describe(token: &Token) -> String {
    format!("{:?}({})", token.kind, token.literal)
}
