//! Parser infrastructure for log search queries.
//!
//! # Architecture
//!
//! Source text → [`lexer`] → [`TokenStream`] → [`Parser`] → [`Query`].
//!
//! - Zero-copy: tokens carry spans, and literal text borrows from the source
//! - One token of lookahead, no backtracking
//! - Whitespace is skipped explicitly at production boundaries, because
//!   adjacency is significant (`ab*cd` is one compound value, `ab * cd` is three terms)
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree for the entire input:
//!
//! 1. A token that cannot start a value is consumed into an empty `Literal` with a diagnostic
//! 2. A missing `)` is recorded on the group's operation; the next token is left alone
//! 3. Unterminated quotes and bad escapes end the literal with a diagnostic
//! 4. On hitting the nesting limit, the remaining input goes into a single recovered literal
//!
//! Diagnostics live on the nodes; see [`crate::diagnostics::collect_diagnostics`].

pub mod ast;
pub mod lexer;
pub mod stream;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use ast::{
    Absent, BooleanOperation, CompoundValue, FieldPhrase, Literal, NodeInfo, NodeRef, Operator,
    Query, Value, Wildcard,
};
pub use self::core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use lexer::{MAX_SOURCE_LEN, Token, TokenKind, lex, tokenize};
pub use stream::TokenStream;

/// Main entry point: the whole stream as one boolean operation.
///
/// Never fails. Problems are recorded on the nodes where they were found.
pub fn parse(stream: TokenStream, source: &str) -> Query<'_> {
    Parser::new(source, stream).parse()
}

/// Parses a `field:value` phrase.
///
/// Not reachable from [`parse`]: field qualifiers are only recognized by callers
/// that ask for a phrase explicitly.
///
/// Leading whitespace before the qualifier is skipped, so `"  level:warn"` parses
/// the same as `"level:warn"`.
pub fn parse_phrase(stream: TokenStream, source: &str) -> FieldPhrase<'_> {
    Parser::new(source, stream).parse_phrase()
}
