//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::lexer::TokenKind;

impl Parser<'_> {
    #[inline]
    pub(super) fn assert_current(&self, expected_kind: TokenKind) {
        let current_kind = self.current().kind;
        assert_eq!(
            current_kind, expected_kind,
            "broken parser invariant: expected {:?} but found {:?} (upstream caller's responsibility)",
            expected_kind, current_kind,
        );
    }
}
