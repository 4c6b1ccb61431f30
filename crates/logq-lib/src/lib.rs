//! logq: error-tolerant parser for free-text log search queries.
//!
//! Turns what a user types into a log search box (`"timed out" OR retry*`)
//! into a syntax tree of boolean operations over text, wildcard and quoted terms,
//! plus a flat list of diagnostics anchored to source ranges. Translating the tree
//! into a storage backend's filter language is left to the caller.
//!
//! # Example
//!
//! ```
//! use logq_lib::QueryBuilder;
//!
//! let parsed = QueryBuilder::new("(alpha OR beta) gamma*").parse();
//! assert!(parsed.is_valid());
//! assert_eq!(
//!     parsed.printer().dump(),
//!     "op (op (lit (alpha) OR lit (beta)) AND comp (lit (gamma), wild))"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{
    Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, collect_diagnostics,
};
pub use parser::{Query, TokenStream, parse, parse_phrase, tokenize};
pub use query::{ParsedQuery, QueryBuilder, QueryConfig, QueryPrinter, render};

/// Errors surfaced to callers that opt into rejecting malformed queries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("query parsing failed with {} errors", .0.error_count())]
    InvalidQuery(Diagnostics),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;
