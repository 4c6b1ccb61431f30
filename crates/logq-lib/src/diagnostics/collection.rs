use std::collections::VecDeque;

use super::{Diagnostic, Diagnostics};
use crate::parser::NodeRef;

/// Flattens every node's local diagnostics into one list.
///
/// Breadth-first over [`NodeRef::children`], so the order is stable for a given
/// tree: outer nodes before inner ones, left children before right ones.
pub fn collect_diagnostics<'a, 'src: 'a>(node: impl Into<NodeRef<'a, 'src>>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut queue = VecDeque::from([node.into()]);

    while let Some(current) = queue.pop_front() {
        let info = current.info();
        if !info.diagnostics.is_empty() {
            diagnostics.push(Diagnostic::new(
                info.diagnostics.clone(),
                info.start,
                info.end,
            ));
        }
        queue.extend(current.children());
    }

    diagnostics
}
