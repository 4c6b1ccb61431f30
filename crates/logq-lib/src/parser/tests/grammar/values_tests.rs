use crate::ParsedQuery;

#[test]
fn wildcard_inside_text() {
    let res = ParsedQuery::expect_valid_ast("ab*cd");
    insta::assert_snapshot!(res, @"op (comp (lit (ab), wild, lit (cd)))");
}

#[test]
fn leading_and_trailing_wildcards() {
    let res = ParsedQuery::expect_valid_ast("*error");
    insta::assert_snapshot!(res, @"op (comp (wild, lit (error)))");

    let res = ParsedQuery::expect_valid_ast("time*");
    insta::assert_snapshot!(res, @"op (comp (lit (time), wild))");
}

#[test]
fn lone_wildcard_is_not_wrapped() {
    let res = ParsedQuery::expect_valid_ast("*");
    insta::assert_snapshot!(res, @"op (wild)");
}

#[test]
fn adjacent_wildcards() {
    let res = ParsedQuery::expect_valid_ast("**");
    insta::assert_snapshot!(res, @"op (comp (wild, wild))");
}

#[test]
fn text_touching_quoted_literal() {
    let res = ParsedQuery::expect_valid_ast(r#"foo"bar""#);
    insta::assert_snapshot!(res, @"op (comp (lit (foo), lit (bar)))");

    let res = ParsedQuery::expect_valid_ast(r#""time out"*"#);
    insta::assert_snapshot!(res, @"op (comp (lit (time out), wild))");
}

#[test]
fn whitespace_separates_values() {
    let res = ParsedQuery::expect_valid_ast("ab * cd");
    insta::assert_snapshot!(res, @"op (lit (ab) AND op (wild AND lit (cd)))");
}

#[test]
fn keyword_inside_text_run_is_text() {
    let res = ParsedQuery::expect_valid_ast("fooANDbar");
    insta::assert_snapshot!(res, @"op (lit (fooANDbar))");
}

#[test]
fn compound_in_operation() {
    let res = ParsedQuery::expect_valid_ast("conn* OR *timeout");
    insta::assert_snapshot!(res, @"op (comp (lit (conn), wild) OR comp (wild, lit (timeout)))");
}

#[test]
fn compound_spans() {
    let res = ParsedQuery::expect_valid_spans("ab*cd");
    insta::assert_snapshot!(res, @"op@0..5 (comp@0..5 (lit@0..2 (ab), wild@2..3, lit@3..5 (cd)))");
}

#[test]
fn multibyte_literal() {
    let res = ParsedQuery::expect_valid_spans("größe*");
    insta::assert_snapshot!(res, @"op@0..8 (comp@0..8 (lit@0..7 (größe), wild@7..8))");
}
