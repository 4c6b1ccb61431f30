//! Typed AST for log queries.
//!
//! The node set is closed. [`Value`] is the only polymorphic position, and a
//! [`BooleanOperation`] is itself a value so parenthesized groups can appear
//! wherever an operand is expected. Parents own their children; there are no
//! back-references.
//!
//! Literal text borrows from the source: a bare term is its token text, a quoted
//! term is the raw text between the quotes (escapes are kept as written).

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::lexer::Token;
use crate::diagnostics::DiagnosticKind;

/// Span and local diagnostics carried by every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub start: Token,
    pub end: Token,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DiagnosticKind>,
}

impl NodeInfo {
    pub fn new(start: Token, end: Token) -> Self {
        Self {
            start,
            end,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostic(mut self, kind: DiagnosticKind) -> Self {
        self.diagnostics.push(kind);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// Also the implicit operator between adjacent terms.
    #[default]
    And,
    Or,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::And => f.write_str("AND"),
            Operator::Or => f.write_str("OR"),
        }
    }
}

/// The whole-document wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query<'src> {
    pub info: NodeInfo,
    pub root: BooleanOperation<'src>,
}

impl<'src> Query<'src> {
    pub fn new(root: BooleanOperation<'src>) -> Self {
        Self {
            info: NodeInfo::new(root.info.start, root.info.end),
            root,
        }
    }
}

/// `left <operator> right`. A right operand of [`Value::Absent`] marks the
/// trailing shape: an operator was recorded but no operand followed it.
///
/// A flat run of operands nests one operation per operand along `right`. Drop,
/// clone, equality, debug output and serialization walk that spine in a loop, so
/// only parenthesized groups nest calls.
pub struct BooleanOperation<'src> {
    pub info: NodeInfo,
    pub left: Value<'src>,
    pub right: Value<'src>,
    pub operator: Operator,
}

impl<'src> BooleanOperation<'src> {
    pub fn new(left: Value<'src>, right: Value<'src>, operator: Operator) -> Self {
        Self {
            info: NodeInfo::new(left.start(), right.end()),
            left,
            right,
            operator,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.right.is_absent()
    }

    /// This operation followed by every operation reachable through `right`.
    pub fn spine(&self) -> impl Iterator<Item = &BooleanOperation<'src>> {
        std::iter::successors(Some(self), |op| op.right.as_operation())
    }

    /// The first `right` along the spine that is not an operation.
    pub fn tail(&self) -> &Value<'src> {
        let mut op = self;
        while let Some(next) = op.right.as_operation() {
            op = next;
        }
        &op.right
    }

    pub(crate) fn into_left(mut self) -> Value<'src> {
        let placeholder = Value::Absent(Absent::new(self.info.start));
        std::mem::replace(&mut self.left, placeholder)
    }

    fn take_right(&mut self) -> Value<'src> {
        let placeholder = Value::Absent(Absent::new(self.info.end));
        std::mem::replace(&mut self.right, placeholder)
    }

    fn with_right(&self, right: Value<'src>) -> Self {
        Self {
            info: self.info.clone(),
            left: self.left.clone(),
            right,
            operator: self.operator,
        }
    }

    fn links(&self) -> impl Iterator<Item = Link<'_, 'src>> {
        self.spine().map(|op| Link {
            info: &op.info,
            left: &op.left,
            operator: op.operator,
        })
    }
}

/// One step of the right spine, without its `right`.
#[derive(Debug, Serialize)]
struct Link<'a, 'src> {
    info: &'a NodeInfo,
    left: &'a Value<'src>,
    operator: Operator,
}

impl Drop for BooleanOperation<'_> {
    fn drop(&mut self) {
        let mut next = self.take_right();
        while let Value::Operation(mut op) = next {
            next = op.take_right();
        }
    }
}

impl Clone for BooleanOperation<'_> {
    fn clone(&self) -> Self {
        let rest: Vec<_> = self.spine().skip(1).collect();
        let mut right = self.tail().clone();
        for op in rest.into_iter().rev() {
            right = Value::Operation(Box::new(op.with_right(right)));
        }
        self.with_right(right)
    }
}

impl PartialEq for BooleanOperation<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut ours = self.spine();
        let mut theirs = other.spine();
        loop {
            match (ours.next(), theirs.next()) {
                (Some(a), Some(b)) => {
                    if a.info != b.info || a.operator != b.operator || a.left != b.left {
                        return false;
                    }
                }
                (None, None) => break,
                _ => return false,
            }
        }
        self.tail() == other.tail()
    }
}

impl Eq for BooleanOperation<'_> {}

impl fmt::Debug for BooleanOperation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanOperation")
            .field("chain", &self.links().collect::<Vec<_>>())
            .field("right", self.tail())
            .finish()
    }
}

/// Serialized as `{"chain": [{info, left, operator}, ..], "right": tail}`, one
/// chain entry per operation on the right spine.
impl Serialize for BooleanOperation<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BooleanOperation", 2)?;
        state.serialize_field("chain", &Chain(self))?;
        state.serialize_field("right", self.tail())?;
        state.end()
    }
}

struct Chain<'a, 'src>(&'a BooleanOperation<'src>);

impl Serialize for Chain<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.links())
    }
}

/// `field:value`. `left` is [`Value::Absent`] when no qualifier was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPhrase<'src> {
    pub info: NodeInfo,
    pub left: Value<'src>,
    pub right: Value<'src>,
}

impl<'src> FieldPhrase<'src> {
    pub fn new(left: Value<'src>, right: Value<'src>) -> Self {
        // An absent qualifier sits after the value it would have qualified.
        let start = if left.is_absent() {
            right.start()
        } else {
            left.start()
        };
        Self {
            info: NodeInfo::new(start, right.end()),
            left,
            right,
        }
    }

    pub fn field(&self) -> Option<&Value<'src>> {
        (!self.left.is_absent()).then_some(&self.left)
    }
}

/// Terms written back to back with no whitespace between them, e.g. `ab*cd`.
/// Always holds at least two values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundValue<'src> {
    pub info: NodeInfo,
    pub values: Vec<Value<'src>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wildcard {
    pub info: NodeInfo,
}

impl Wildcard {
    pub fn new(token: Token) -> Self {
        Self {
            info: NodeInfo::new(token, token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal<'src> {
    pub info: NodeInfo,
    pub text: &'src str,
}

impl<'src> Literal<'src> {
    pub fn new(start: Token, end: Token, text: &'src str) -> Self {
        Self {
            info: NodeInfo::new(start, end),
            text,
        }
    }

    /// Recovered literal: empty text plus the reason.
    pub fn error(start: Token, end: Token, kind: DiagnosticKind) -> Self {
        Self {
            info: NodeInfo::new(start, end).with_diagnostic(kind),
            text: "",
        }
    }
}

/// Explicit "nothing here" placeholder, positioned at the token where an
/// operand was looked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Absent {
    pub info: NodeInfo,
}

impl Absent {
    pub fn new(token: Token) -> Self {
        Self {
            info: NodeInfo::new(token, token),
        }
    }
}

/// Anything that can stand where a single operand is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Value<'src> {
    Operation(Box<BooleanOperation<'src>>),
    Compound(CompoundValue<'src>),
    Wildcard(Wildcard),
    Literal(Literal<'src>),
    Absent(Absent),
}

impl<'src> Value<'src> {
    pub fn info(&self) -> &NodeInfo {
        match self {
            Value::Operation(op) => &op.info,
            Value::Compound(compound) => &compound.info,
            Value::Wildcard(wildcard) => &wildcard.info,
            Value::Literal(literal) => &literal.info,
            Value::Absent(absent) => &absent.info,
        }
    }

    pub fn start(&self) -> Token {
        self.info().start
    }

    pub fn end(&self) -> Token {
        self.info().end
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent(_))
    }

    pub fn as_literal(&self) -> Option<&Literal<'src>> {
        match self {
            Value::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&BooleanOperation<'src>> {
        match self {
            Value::Operation(op) => Some(&**op),
            _ => None,
        }
    }
}

/// Borrowed view over any node kind, used for traversal.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a, 'src> {
    Query(&'a Query<'src>),
    Operation(&'a BooleanOperation<'src>),
    Phrase(&'a FieldPhrase<'src>),
    Compound(&'a CompoundValue<'src>),
    Wildcard(&'a Wildcard),
    Literal(&'a Literal<'src>),
    Absent(&'a Absent),
}

impl<'a, 'src> NodeRef<'a, 'src> {
    pub fn info(self) -> &'a NodeInfo {
        match self {
            NodeRef::Query(query) => &query.info,
            NodeRef::Operation(op) => &op.info,
            NodeRef::Phrase(phrase) => &phrase.info,
            NodeRef::Compound(compound) => &compound.info,
            NodeRef::Wildcard(wildcard) => &wildcard.info,
            NodeRef::Literal(literal) => &literal.info,
            NodeRef::Absent(absent) => &absent.info,
        }
    }

    /// Direct children in construction order.
    pub fn children(self) -> Vec<NodeRef<'a, 'src>> {
        match self {
            NodeRef::Query(query) => vec![NodeRef::Operation(&query.root)],
            NodeRef::Operation(op) => vec![(&op.left).into(), (&op.right).into()],
            NodeRef::Phrase(phrase) => vec![(&phrase.left).into(), (&phrase.right).into()],
            NodeRef::Compound(compound) => compound.values.iter().map(NodeRef::from).collect(),
            NodeRef::Wildcard(_) | NodeRef::Literal(_) | NodeRef::Absent(_) => Vec::new(),
        }
    }
}

impl<'a, 'src> From<&'a Value<'src>> for NodeRef<'a, 'src> {
    fn from(value: &'a Value<'src>) -> Self {
        match value {
            Value::Operation(op) => NodeRef::Operation(op),
            Value::Compound(compound) => NodeRef::Compound(compound),
            Value::Wildcard(wildcard) => NodeRef::Wildcard(wildcard),
            Value::Literal(literal) => NodeRef::Literal(literal),
            Value::Absent(absent) => NodeRef::Absent(absent),
        }
    }
}

macro_rules! node_ref_from {
    ($ty:ty, $variant:ident) => {
        impl<'a, 'src> From<&'a $ty> for NodeRef<'a, 'src> {
            fn from(node: &'a $ty) -> Self {
                NodeRef::$variant(node)
            }
        }
    };
}

node_ref_from!(Query<'src>, Query);
node_ref_from!(BooleanOperation<'src>, Operation);
node_ref_from!(FieldPhrase<'src>, Phrase);
node_ref_from!(CompoundValue<'src>, Compound);
node_ref_from!(Literal<'src>, Literal);
node_ref_from!(Wildcard, Wildcard);
node_ref_from!(Absent, Absent);
