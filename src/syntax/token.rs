use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Number,

    // Single-character tokens
    Plus,
    Minus,
    Asterisk,
    Slash,
    LeftParen,
    RightParen,

    EndOfInput,
    Illegal,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token, empty for `EndOfInput`.
    pub literal: String,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "end of input at {}", self.position)
        } else {
            write!(f, "{:?} '{}' at {}", self.kind, self.literal, self.position)
        }
    }
}
