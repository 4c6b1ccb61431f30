use crate::{ParsedQuery, QueryBuilder};

#[test]
fn quoted_phrase() {
    let res = ParsedQuery::expect_valid_ast(r#""hello world""#);
    insta::assert_snapshot!(res, @"op (lit (hello world))");
}

#[test]
fn quoted_keywords_are_text() {
    let res = ParsedQuery::expect_valid_ast(r#""a OR b""#);
    insta::assert_snapshot!(res, @"op (lit (a OR b))");
}

#[test]
fn quoted_delimiters_are_text() {
    let res = ParsedQuery::expect_valid_ast(r#""x:(y)*""#);
    insta::assert_snapshot!(res, @"op (lit (x:(y)*))");
}

#[test]
fn escaped_quotes_stay_raw() {
    let res = ParsedQuery::expect_valid_ast(r#""say \"hi\"""#);
    insta::assert_snapshot!(res, @r#"op (lit (say \"hi\"))"#);
}

#[test]
fn empty_quotes() {
    let res = ParsedQuery::expect_valid_ast(r#""""#);
    insta::assert_snapshot!(res, @"op (lit ())");
}

#[test]
fn quoted_text_excludes_delimiting_quotes() {
    let source = r#"pre "inner text" post"#;
    let parsed = QueryBuilder::new(source).parse();
    assert!(parsed.is_valid());

    let root = &parsed.query().root;
    let inner = root.right.as_operation().expect("right-folded chain");
    let literal = inner.left.as_literal().expect("quoted literal");
    assert_eq!(literal.text, "inner text");
    assert_eq!(literal.info.start.text(source), "\"");
    assert_eq!(literal.info.end.text(source), "\"");
}

#[test]
fn quoted_spans_include_quotes() {
    let res = ParsedQuery::expect_valid_spans(r#""a b" c"#);
    insta::assert_snapshot!(res, @"op@0..7 (lit@0..5 (a b) AND lit@6..7 (c))");
}

#[test]
fn quoted_operands() {
    let res = ParsedQuery::expect_valid_ast(r#""disk full" OR "out of memory""#);
    insta::assert_snapshot!(res, @"op (lit (disk full) OR lit (out of memory))");
}
