//! Debug rendering of AST nodes.
//!
//! Output is a canonical parenthesized form, e.g. `op (lit (foo) AND lit (bar))`,
//! used for test fixtures and the `ast` command.

use std::fmt::Write;

use crate::parser::{NodeInfo, NodeRef};

/// Renders any node in the canonical form.
pub fn render<'a, 'src: 'a>(node: impl Into<NodeRef<'a, 'src>>) -> String {
    QueryPrinter::new(node).dump()
}

pub struct QueryPrinter<'a, 'src> {
    node: NodeRef<'a, 'src>,
    spans: bool,
}

impl<'a, 'src> QueryPrinter<'a, 'src> {
    pub fn new(node: impl Into<NodeRef<'a, 'src>>) -> Self {
        Self {
            node: node.into(),
            spans: false,
        }
    }

    /// Suffix each node keyword with its byte range, e.g. `lit@0..3 (foo)`.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.node, w)
    }

    fn format_node(&self, node: NodeRef<'a, 'src>, w: &mut impl Write) -> std::fmt::Result {
        match node {
            NodeRef::Query(query) => self.format_node(NodeRef::Operation(&query.root), w),
            NodeRef::Operation(op) => {
                // The right spine is written in a loop; its parens close at the end.
                let mut open = 0;
                for link in op.spine() {
                    self.keyword("op", &link.info, w)?;
                    w.write_str(" (")?;
                    self.format_node((&link.left).into(), w)?;
                    if !link.is_unary() {
                        write!(w, " {} ", link.operator)?;
                    }
                    open += 1;
                }
                let tail = op.tail();
                if !tail.is_absent() {
                    self.format_node(tail.into(), w)?;
                }
                for _ in 0..open {
                    w.write_char(')')?;
                }
                Ok(())
            }
            NodeRef::Phrase(phrase) => {
                self.keyword("phrase", &phrase.info, w)?;
                w.write_str(" (")?;
                self.format_node((&phrase.left).into(), w)?;
                w.write_str(" : ")?;
                self.format_node((&phrase.right).into(), w)?;
                w.write_char(')')
            }
            NodeRef::Compound(compound) => {
                self.keyword("comp", &compound.info, w)?;
                w.write_str(" (")?;
                for (i, value) in compound.values.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    self.format_node(value.into(), w)?;
                }
                w.write_char(')')
            }
            NodeRef::Wildcard(wildcard) => self.keyword("wild", &wildcard.info, w),
            NodeRef::Literal(literal) => {
                self.keyword("lit", &literal.info, w)?;
                write!(w, " ({})", literal.text)
            }
            NodeRef::Absent(absent) => self.keyword("noop", &absent.info, w),
        }
    }

    fn keyword(&self, name: &str, info: &NodeInfo, w: &mut impl Write) -> std::fmt::Result {
        w.write_str(name)?;
        if self.spans {
            write!(w, "@{}..{}", info.start.start(), info.end.end())?;
        }
        Ok(())
    }
}
