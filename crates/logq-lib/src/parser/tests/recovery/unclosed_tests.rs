use crate::{DiagnosticKind, ParsedQuery, QueryBuilder};

#[test]
fn unclosed_paren() {
    let res = ParsedQuery::expect_invalid("(alpha");
    insta::assert_snapshot!(res, @r"
    op (op (lit (alpha)))
    error at 0..6: expected a closing paren
    ");
}

#[test]
fn unclosed_paren_keeps_group_contents() {
    let parsed = QueryBuilder::new("(alpha").parse();
    let group = parsed.query().root.left.as_operation().expect("group");

    assert_eq!(group.left.as_literal().map(|l| l.text), Some("alpha"));
    assert_eq!(group.info.diagnostics, [DiagnosticKind::UnclosedParen]);
}

#[test]
fn lone_open_paren() {
    let res = ParsedQuery::expect_invalid("(");
    insta::assert_snapshot!(res, @r"
    op (op (lit ()))
    error at 0..1: expected a closing paren
    error at 1..1: expected to find a value
    ");
}

#[test]
fn nested_unclosed_parens_report_outer_first() {
    let res = ParsedQuery::expect_invalid("(a OR (b");
    insta::assert_snapshot!(res, @r"
    op (op (lit (a) OR op (lit (b))))
    error at 0..8: expected a closing paren
    error at 6..8: expected a closing paren
    ");
}

#[test]
fn unclosed_quote() {
    let res = ParsedQuery::expect_invalid(r#""oops"#);
    insta::assert_snapshot!(res, @r"
    op (lit ())
    error at 0..5: expected to find a closing double-quote
    ");
}

#[test]
fn unclosed_quote_consumes_rest_of_input() {
    let res = ParsedQuery::expect_invalid(r#"a "b OR c"#);
    insta::assert_snapshot!(res, @r"
    op (lit (a) AND lit ())
    error at 2..9: expected to find a closing double-quote
    ");
}

#[test]
fn unclosed_quote_inside_group() {
    let res = ParsedQuery::expect_invalid(r#"("a)"#);
    insta::assert_snapshot!(res, @r"
    op (op (lit ()))
    error at 0..4: expected a closing paren
    error at 1..4: expected to find a closing double-quote
    ");
}
