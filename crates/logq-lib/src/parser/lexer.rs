//! Lexer for log search queries.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! Ten delimiter characters (`\ " : , ( ) . * + -`) always lex as single-character tokens.
//! Everything else accumulates into runs of uniform whitespace classification: a whitespace
//! run becomes `Whitespace`, any other run becomes `Text`, unless the whole run is a
//! case-insensitive `and` / `or`.
//!
//! ## Error handling
//!
//! The lexer is total. Characters that no rule recognizes are coalesced into `Text` tokens,
//! leaving every error to the parser.

use logos::Logos;
use rowan::{TextRange, TextSize};
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::ops::Range;

use super::stream::TokenStream;

/// Token kinds. `EndOfInput` is never produced by the lexer; the token stream
/// synthesizes it once the sequence is exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    EndOfInput,

    #[regex(r"\s+")]
    Whitespace,

    #[token("\"")]
    Quote,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("\\")]
    Backslash,

    #[token(".")]
    FieldSeparator,

    /// A run of non-delimiter, non-whitespace characters.
    #[regex(r#"[^\s\\":,().*+\-]+"#)]
    Text,

    #[token("*")]
    Wildcard,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("-")]
    Minus,

    #[token("+")]
    Plus,

    /// Keywords win over `Text` only when they span the whole run (`and`, not `andy`).
    #[token("and", ignore(case))]
    And,

    #[token("or", ignore(case))]
    Or,
}

impl TokenKind {
    /// Kinds that can start a value term. Adjacent terms concatenate into a compound value.
    pub fn starts_term(self) -> bool {
        matches!(self, Self::Quote | Self::Wildcard | Self::Text)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`Token::text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// The synthetic end-of-input token: empty, positioned at the end of the source.
    ///
    /// # Panics
    ///
    /// If `source_len` exceeds [`MAX_SOURCE_LEN`].
    pub fn end_of_input(source_len: usize) -> Self {
        Self::new(TokenKind::EndOfInput, TextRange::empty(text_size(source_len)))
    }

    pub fn start(&self) -> usize {
        self.span.start().into()
    }

    pub fn len(&self) -> usize {
        self.span.len().into()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn end(&self) -> usize {
        self.span.end().into()
    }

    /// O(1) slice into source.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[Range::<usize>::from(self.span)]
    }

    /// Source text strictly between this token and `end`.
    pub fn text_between<'src>(&self, end: &Token, source: &'src str) -> &'src str {
        &source[self.end()..end.start()]
    }
}

impl Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.end()
    }
}

/// Largest source, in bytes, whose offsets fit a [`TextSize`].
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

pub(crate) fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).expect("query source longer than MAX_SOURCE_LEN")
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new(text_size(range.start), text_size(range.end))
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Consecutive characters Logos cannot classify are coalesced into a single `Text` token.
///
/// # Panics
///
/// If `source` is longer than [`MAX_SOURCE_LEN`] bytes.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Text, range_to_text_range(start..end)));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Text,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Lexes `source` and wraps the tokens in a fresh stream.
pub fn tokenize(source: &str) -> TokenStream {
    TokenStream::new(lex(source), source.len())
}
