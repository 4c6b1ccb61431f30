//! Parser state and low-level operations.

use super::ast::{FieldPhrase, Query};
use super::lexer::{Token, TokenKind};
use super::stream::TokenStream;

/// Maximum number of nested parenthesized groups before the parser stops descending.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Recursive-descent parser over one token stream.
///
/// Every production returns a node. Failures become diagnostics on that node,
/// and the offending token is consumed so the caller always makes progress.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) stream: TokenStream,
    pub(super) depth: u32,
    recursion_limit: u32,
    /// Set once the nesting limit swallowed the rest of the input.
    pub(super) truncated: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, stream: TokenStream) -> Self {
        Self {
            source,
            stream,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            truncated: false,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Query<'src> {
        let root = self.parse_operation();
        tracing::trace!(
            tokens = self.stream.len(),
            consumed = self.stream.position(),
            truncated = self.truncated,
            "parsed log query"
        );
        Query::new(root)
    }

    /// Parses a single `field:value` phrase from the start of the stream, skipping
    /// any leading whitespace.
    pub fn parse_phrase(mut self) -> FieldPhrase<'src> {
        self.parse_field_phrase()
    }

    #[inline]
    pub(super) fn current(&self) -> Token {
        self.stream.current()
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(super) fn bump(&mut self) -> Token {
        self.stream.advance()
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.currently_is(TokenKind::Whitespace) {
            self.bump();
        }
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}
