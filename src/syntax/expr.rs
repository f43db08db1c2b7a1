use std::fmt;

use super::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Asterisk,
    Slash,
}

impl Operator {
    pub fn from_token_kind(kind: &TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Minus => Some(Operator::Minus),
            TokenKind::Asterisk => Some(Operator::Asterisk),
            TokenKind::Slash => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Asterisk => "*",
            Operator::Slash => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression tree produced by the parser.
///
/// `Prefix` nodes only ever carry `Operator::Minus`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number {
        value: f64,
    },
    Prefix {
        operator: Operator,
        right: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Number { value }
    }

    pub fn negate(right: Expr) -> Expr {
        Expr::Prefix {
            operator: Operator::Minus,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expr, operator: Operator, right: Expr) -> Expr {
        Expr::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

pub trait Visitor<T> {
    fn visit_expr(&self, expression: &Expr) -> T;
}
