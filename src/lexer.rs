use crate::syntax::token::{Token, TokenKind};

/// Pull-based lexer: every call to [`Lexer::next_token`] scans one token.
///
/// Once the source is exhausted it keeps returning an `EndOfInput` token.
pub struct Lexer {
    source: String,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.to_string(),
            start: 0,
            current: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.current;

        let c = match self.advance() {
            Some(c) => c,
            None => return Token::new(TokenKind::EndOfInput, "", self.current),
        };

        let token = match c {
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Asterisk),
            '/' => self.make_token(TokenKind::Slash),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            c if c.is_ascii_digit() => self.number(),
            _ => self.make_token(TokenKind::Illegal),
        };

        log::trace!("lexed {token:?}");
        token
    }

    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }

        // look for fractional part of number
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            // consume the '.'
            self.current += 1;

            while self.peek().is_ascii_digit() {
                self.current += 1;
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.source[self.start..self.current], self.start)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.source[self.current..].chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.current += c.len_utf8();
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    // Digits and '.' are ASCII, so byte lookahead is enough here.
    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source.as_bytes()[self.current] as char
    }

    fn peek_next(&self) -> char {
        if (self.current + 1) >= self.source.len() {
            return '\0';
        }
        self.source.as_bytes()[self.current + 1] as char
    }
}

/// Yields tokens up to, but not including, `EndOfInput`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
