//! Forward-only cursor over a lexed token sequence.

use super::lexer::Token;

/// Owns the tokens of one parse and a cursor into them.
///
/// Reading past the end is well-defined: [`current`](Self::current) keeps
/// returning a synthetic `EndOfInput` token positioned at the end of the source.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            eof: Token::end_of_input(source_len),
        }
    }

    /// Token under the cursor. Never advances.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    /// Returns the current token, then moves past it unless already at the end.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if !self.is_end() {
            self.pos += 1;
        }
        token
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
