use crate::ParsedQuery;

#[test]
fn single_term() {
    let res = ParsedQuery::expect_valid_ast("alpha");
    insta::assert_snapshot!(res, @"op (lit (alpha))");
}

#[test]
fn implicit_and() {
    let res = ParsedQuery::expect_valid_ast("alpha beta");
    insta::assert_snapshot!(res, @"op (lit (alpha) AND lit (beta))");
}

#[test]
fn explicit_and() {
    let res = ParsedQuery::expect_valid_ast("alpha AND beta");
    insta::assert_snapshot!(res, @"op (lit (alpha) AND lit (beta))");
}

#[test]
fn operators_ignore_case() {
    let res = ParsedQuery::expect_valid_ast("alpha or beta");
    insta::assert_snapshot!(res, @"op (lit (alpha) OR lit (beta))");
}

#[test]
fn or_chain_folds_right() {
    let res = ParsedQuery::expect_valid_ast("a OR b OR c");
    insta::assert_snapshot!(res, @"op (lit (a) OR op (lit (b) OR lit (c)))");
}

#[test]
fn implicit_chain_folds_right() {
    let res = ParsedQuery::expect_valid_ast("a b c");
    insta::assert_snapshot!(res, @"op (lit (a) AND op (lit (b) AND lit (c)))");
}

#[test]
fn and_or_share_precedence() {
    let res = ParsedQuery::expect_valid_ast("a OR b AND c");
    insta::assert_snapshot!(res, @"op (lit (a) OR op (lit (b) AND lit (c)))");

    let res = ParsedQuery::expect_valid_ast("a AND b OR c");
    insta::assert_snapshot!(res, @"op (lit (a) AND op (lit (b) OR lit (c)))");
}

#[test]
fn group_as_left_operand() {
    let res = ParsedQuery::expect_valid_ast("(a AND b) OR c");
    insta::assert_snapshot!(res, @"op (op (lit (a) AND lit (b)) OR lit (c))");
}

#[test]
fn nested_groups() {
    let res = ParsedQuery::expect_valid_ast("a OR (b (c OR d))");
    insta::assert_snapshot!(res, @"op (lit (a) OR op (lit (b) AND op (lit (c) OR lit (d))))");
}

#[test]
fn group_with_single_term() {
    let res = ParsedQuery::expect_valid_ast("(a)");
    insta::assert_snapshot!(res, @"op (op (lit (a)))");

    let res = ParsedQuery::expect_valid_ast("(a) OR b");
    insta::assert_snapshot!(res, @"op (op (lit (a)) OR lit (b))");
}

#[test]
fn trailing_operator_keeps_unary_shape() {
    let res = ParsedQuery::expect_valid_ast("alpha AND");
    insta::assert_snapshot!(res, @"op (lit (alpha))");
}

#[test]
fn trailing_operator_after_last_operand_is_dropped() {
    let res = ParsedQuery::expect_valid_ast("a OR b AND");
    insta::assert_snapshot!(res, @"op (lit (a) OR lit (b))");
}

#[test]
fn surrounding_whitespace() {
    let res = ParsedQuery::expect_valid_ast("  a   OR   b  ");
    insta::assert_snapshot!(res, @"op (lit (a) OR lit (b))");
}

#[test]
fn unconsumed_trailing_input_is_ignored() {
    let res = ParsedQuery::expect_valid_ast("a) b");
    insta::assert_snapshot!(res, @"op (lit (a))");
}

#[test]
fn operation_spans() {
    let res = ParsedQuery::expect_valid_spans("a OR b");
    insta::assert_snapshot!(res, @"op@0..6 (lit@0..1 (a) OR lit@5..6 (b))");
}

#[test]
fn group_spans_include_parens() {
    let res = ParsedQuery::expect_valid_spans("(a b) c");
    insta::assert_snapshot!(res, @"op@0..7 (op@0..5 (lit@1..2 (a) AND lit@3..4 (b)) AND lit@6..7 (c))");
}

#[test]
fn leaves_match_source_order() {
    let source = "(error OR warn) AND service AND (api OR worker OR cron)";
    let parsed = crate::QueryBuilder::new(source).parse();
    assert!(parsed.is_valid());

    let mut leaves = Vec::new();
    collect_literals(crate::parser::NodeRef::from(parsed.query()), &mut leaves);
    assert_eq!(
        leaves,
        ["error", "warn", "service", "api", "worker", "cron"]
    );
}

fn collect_literals<'src>(node: crate::parser::NodeRef<'_, 'src>, out: &mut Vec<&'src str>) {
    if let crate::parser::NodeRef::Literal(literal) = node {
        out.push(literal.text);
    }
    for child in node.children() {
        collect_literals(child, out);
    }
}
