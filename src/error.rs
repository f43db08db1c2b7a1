use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::token::Token;

/// Errors raised while building an expression tree.
///
/// Illegal characters are not errors on their own; they surface here only
/// once the parser meets one where it needs an operand or an operator.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {token}")]
    UnexpectedToken {
        expected: &'static str,
        token: Token,
    },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("unexpected {0} after complete expression")]
    TrailingTokens(Token),

    #[error("expression nested too deeply at {0}")]
    NestingTooDeep(Token),
}

impl ParseError {
    /// Token the error points at, if any.
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { token, .. }
            | ParseError::TrailingTokens(token)
            | ParseError::NestingTooDeep(token) => Some(token),
            ParseError::UnexpectedEndOfInput | ParseError::MalformedNumber(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: {source}")]
    Line { line: usize, source: ParseError },

    #[error("can't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("can't read input: {0}")]
    Prompt(#[source] std::io::Error),
}
