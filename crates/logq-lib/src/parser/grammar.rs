//! Grammar productions.
//!
//! ```text
//! operation := value operator? (operation)?
//! value     := "(" operation ")" | term term*        (terms with no whitespace between)
//! term      := quoted | "*" | text
//! phrase    := value (":" operation)?
//! ```
//!
//! AND and OR share one precedence level and fold to the right. An operand list
//! that ends without a right-hand value (`a AND` or the last term of `a b c`)
//! produces the trailing shape `op(left, Absent)`, which the enclosing operation
//! flattens into its own right operand.

use super::ast::{
    Absent, BooleanOperation, CompoundValue, FieldPhrase, Literal, NodeInfo, Operator, Value,
    Wildcard,
};
use super::core::Parser;
use super::lexer::{Token, TokenKind};
use crate::diagnostics::DiagnosticKind;

impl<'src> Parser<'src> {
    /// Parses operands until `)` or end of input and folds them right to left.
    ///
    /// Equivalent to descending once per operand, but only parenthesized groups
    /// consume stack.
    pub(super) fn parse_operation(&mut self) -> BooleanOperation<'src> {
        let mut pending = Vec::new();
        let mut operand = self.parse_operand();
        while !self.at_operation_end() {
            pending.push(operand);
            operand = self.parse_operand();
        }

        let (left, operator) = operand;
        let absent = Value::Absent(Absent::new(self.current()));
        let mut folded = BooleanOperation::new(left, absent, operator);

        for (left, operator) in pending.into_iter().rev() {
            let right = if folded.is_unary() {
                folded.into_left()
            } else {
                Value::Operation(Box::new(folded))
            };
            folded = BooleanOperation::new(left, right, operator);
        }

        folded
    }

    /// One left operand and the operator after it. Missing operators mean AND.
    fn parse_operand(&mut self) -> (Value<'src>, Operator) {
        self.skip_whitespace();
        let value = self.parse_value();
        self.skip_whitespace();
        let operator = self.try_parse_operator().unwrap_or_default();
        self.skip_whitespace();
        (value, operator)
    }

    fn at_operation_end(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::ParenClose | TokenKind::EndOfInput
        )
    }

    /// Skips whitespace, then consumes `and`/`or` if present. Anything else is left in place.
    pub(super) fn try_parse_operator(&mut self) -> Option<Operator> {
        loop {
            match self.current().kind {
                TokenKind::Whitespace => {
                    self.bump();
                }
                TokenKind::Or => {
                    self.bump();
                    return Some(Operator::Or);
                }
                TokenKind::And => {
                    self.bump();
                    return Some(Operator::And);
                }
                _ => return None,
            }
        }
    }

    /// A parenthesized group, or one or more adjacent terms.
    ///
    /// Adjacent terms (no whitespace between them) become a [`CompoundValue`];
    /// a single term is returned as-is.
    pub(super) fn parse_value(&mut self) -> Value<'src> {
        if self.currently_is(TokenKind::ParenOpen) {
            return self.parse_group();
        }

        let first = self.parse_value_term();
        if !self.current().kind.starts_term() {
            return first;
        }

        let start = first.start();
        let mut values = vec![first];
        while self.current().kind.starts_term() {
            values.push(self.parse_value_term());
        }
        let end = values.last().map_or(start, Value::end);

        Value::Compound(CompoundValue {
            info: NodeInfo::new(start, end),
            values,
        })
    }

    fn parse_group(&mut self) -> Value<'src> {
        self.assert_current(TokenKind::ParenOpen);

        if !self.enter_recursion() {
            return self.swallow_rest();
        }

        let open = self.bump();
        let mut operation = self.parse_operation();
        self.exit_recursion();

        operation.info.start = open;
        if self.currently_is(TokenKind::ParenClose) {
            operation.info.end = self.bump();
        } else if !self.truncated {
            operation.info.diagnostics.push(DiagnosticKind::UnclosedParen);
        }

        Value::Operation(Box::new(operation))
    }

    /// Nesting limit hit: the remaining input becomes one recovered literal.
    fn swallow_rest(&mut self) -> Value<'src> {
        let start = self.current();
        let mut end = start;
        while !self.stream.is_end() {
            end = self.bump();
        }

        tracing::warn!(
            limit = self.recursion_limit(),
            offset = start.start(),
            "query nesting limit exceeded, skipping rest of input"
        );
        self.truncated = true;

        Value::Literal(Literal::error(start, end, DiagnosticKind::NestingTooDeep))
    }

    /// Exactly one term. Always consumes at least one token, even on failure.
    pub(super) fn parse_value_term(&mut self) -> Value<'src> {
        let start = self.bump();

        match start.kind {
            TokenKind::Quote => Value::Literal(self.parse_quoted(start)),
            TokenKind::Wildcard => Value::Wildcard(Wildcard::new(start)),
            TokenKind::Text => Value::Literal(Literal::new(start, start, start.text(self.source))),
            _ => Value::Literal(Literal::error(start, start, DiagnosticKind::ExpectedValue)),
        }
    }

    /// Scans for the closing quote. `\"` is the only escape and is kept verbatim in the text.
    fn parse_quoted(&mut self, open: Token) -> Literal<'src> {
        loop {
            let next = self.bump();
            match next.kind {
                TokenKind::Backslash => {
                    let escaped = self.bump();
                    if escaped.kind != TokenKind::Quote {
                        return Literal::error(open, escaped, DiagnosticKind::InvalidEscape);
                    }
                }
                TokenKind::Quote => {
                    return Literal::new(open, next, open.text_between(&next, self.source));
                }
                TokenKind::EndOfInput => {
                    return Literal::error(open, next, DiagnosticKind::UnclosedQuote);
                }
                _ => {}
            }
        }
    }

    /// `field:value`, or a bare value with an absent qualifier.
    pub(super) fn parse_field_phrase(&mut self) -> FieldPhrase<'src> {
        self.skip_whitespace();
        let left = self.parse_value();

        if self.currently_is(TokenKind::Colon) {
            self.bump();
            let right = self.parse_operation();
            return FieldPhrase::new(left, Value::Operation(Box::new(right)));
        }

        let absent = Value::Absent(Absent::new(self.current()));
        FieldPhrase::new(absent, left)
    }
}
