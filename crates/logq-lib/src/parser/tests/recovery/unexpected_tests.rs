use crate::ParsedQuery;

#[test]
fn empty_input() {
    let res = ParsedQuery::expect_invalid("");
    insta::assert_snapshot!(res, @r"
    op (lit ())
    error at 0..0: expected to find a value
    ");
}

#[test]
fn whitespace_only() {
    let res = ParsedQuery::expect_invalid("   ");
    insta::assert_snapshot!(res, @r"
    op (lit ())
    error at 3..3: expected to find a value
    ");
}

#[test]
fn leading_close_paren() {
    let res = ParsedQuery::expect_invalid(") a");
    insta::assert_snapshot!(res, @r"
    op (lit () AND lit (a))
    error at 0..1: expected to find a value
    ");
}

#[test]
fn leading_operator() {
    let res = ParsedQuery::expect_invalid("OR a");
    insta::assert_snapshot!(res, @r"
    op (lit () AND lit (a))
    error at 0..2: expected to find a value
    ");
}

#[test]
fn doubled_operator() {
    let res = ParsedQuery::expect_invalid("a AND OR b");
    insta::assert_snapshot!(res, @r"
    op (lit (a) AND op (lit () AND lit (b)))
    error at 6..8: expected to find a value
    ");
}

#[test]
fn stray_minus_joins_following_text() {
    let res = ParsedQuery::expect_invalid("-debug");
    insta::assert_snapshot!(res, @r"
    op (comp (lit (), lit (debug)))
    error at 0..1: expected to find a value
    ");
}

#[test]
fn backslash_outside_quotes() {
    let res = ParsedQuery::expect_invalid(r"a\b");
    insta::assert_snapshot!(res, @r"
    op (lit (a) AND comp (lit (), lit (b)))
    error at 1..2: expected to find a value
    ");
}

#[test]
fn invalid_escape() {
    let res = ParsedQuery::expect_invalid(r#""a\b""#);
    insta::assert_snapshot!(res, @r"
    op (comp (lit (), lit ()))
    error at 0..4: invalid escape sequence
    error at 4..5: expected to find a closing double-quote
    ");
}

#[test]
fn backslash_at_end_of_input() {
    let res = ParsedQuery::expect_invalid(r#""a\"#);
    insta::assert_snapshot!(res, @r"
    op (lit ())
    error at 0..3: invalid escape sequence
    ");
}

#[test]
fn every_unexpected_token_is_reported() {
    let res = ParsedQuery::expect_invalid("a , b + c");
    insta::assert_snapshot!(res, @r"
    op (lit (a) AND op (lit () AND op (lit (b) AND op (lit () AND lit (c)))))
    error at 2..3: expected to find a value
    error at 6..7: expected to find a value
    ");
}
