use std::mem;

use crate::{
    error::ParseError,
    lexer::Lexer,
    syntax::{
        expr::{Expr, Operator},
        token::{Token, TokenKind},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
enum Precedence {
    Lowest,
    Sum,
    Product,
    Prefix,
}

impl Precedence {
    fn of(operator: Operator) -> Precedence {
        match operator {
            Operator::Plus | Operator::Minus => Precedence::Sum,
            Operator::Asterisk | Operator::Slash => Precedence::Product,
        }
    }
}

/// Deepest run of nested groups and unary minuses accepted. Each level costs
/// several stack frames in the parser and one in the evaluator.
const MAX_NESTING_DEPTH: usize = 256;

/// Precedence-climbing parser for a single expression.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    nesting_depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Parser {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            nesting_depth: 0,
        }
    }

    /// Parses the whole input. Anything left over after the expression is an
    /// error rather than being ignored.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expression(Precedence::Lowest)?;

        if !self.current.is_end() {
            return Err(ParseError::TrailingTokens(self.current.clone()));
        }

        Ok(expr)
    }

    fn expression(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.prefix()?;

        while let Some(operator) = Operator::from_token_kind(&self.current.kind) {
            let operator_precedence = Precedence::of(operator);
            if operator_precedence <= precedence {
                break;
            }

            self.advance();
            // left-associative
            let right = self.expression(operator_precedence)?;
            log::debug!("infix {operator} at {operator_precedence:?}");
            left = Expr::infix(left, operator, right);
        }

        Ok(left)
    }

    fn prefix(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Number => self.number(),
            TokenKind::Minus => {
                self.enter_nesting()?;
                self.advance();
                let right = self.expression(Precedence::Prefix);
                self.leave_nesting();
                Ok(Expr::negate(right?))
            }
            TokenKind::LeftParen => self.grouping(),
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput),
            _ => Err(self.unexpected("expression")),
        }
    }

    fn number(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();
        let value = token
            .literal
            .parse::<f64>()
            .map_err(|_| ParseError::MalformedNumber(token.literal.clone()))?;
        Ok(Expr::number(value))
    }

    fn grouping(&mut self) -> Result<Expr, ParseError> {
        self.enter_nesting()?;
        self.advance();
        let expr = self.expression(Precedence::Lowest);
        self.leave_nesting();
        let expr = expr?;

        match self.current.kind {
            TokenKind::RightParen => {
                self.advance();
                Ok(expr)
            }
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput),
            _ => Err(self.unexpected("')'")),
        }
    }

    /// Fails with `NestingTooDeep` on the current token once the limit is
    /// passed. Pair every `Ok` with [`Parser::leave_nesting`].
    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep(self.current.clone()));
        }
        self.nesting_depth += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    /// Moves to the next token and returns the one just consumed.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            token: self.current.clone(),
        }
    }
}
