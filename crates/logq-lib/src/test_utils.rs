//! Test helpers shared by the parser and query suites.

use crate::query::{ParsedQuery, QueryBuilder};

impl ParsedQuery<'_> {
    /// Renders the AST, panicking if the query produced diagnostics.
    #[track_caller]
    pub fn expect_valid_ast(src: &str) -> String {
        let parsed = QueryBuilder::new(src).parse();
        if !parsed.is_valid() {
            panic!(
                "expected valid query, got diagnostics:\n{}",
                parsed.diagnostics()
            );
        }
        parsed.printer().dump()
    }

    /// Renders the AST with spans, panicking if the query produced diagnostics.
    #[track_caller]
    pub fn expect_valid_spans(src: &str) -> String {
        let parsed = QueryBuilder::new(src).parse();
        if !parsed.is_valid() {
            panic!(
                "expected valid query, got diagnostics:\n{}",
                parsed.diagnostics()
            );
        }
        parsed.printer().with_spans(true).dump()
    }

    /// AST followed by the plain diagnostics list, panicking if the query is valid.
    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        let parsed = QueryBuilder::new(src).parse();
        if parsed.is_valid() {
            panic!("expected diagnostics for {src:?}, got none");
        }
        format!("{}\n{}", parsed.printer().dump(), parsed.diagnostics())
    }
}
