//! Diagnostics: node-local parse problems, flattened into one ordered list.
//!
//! The parser never reports through a side channel. Each node records its own
//! [`DiagnosticKind`]s while it is built, and [`collect_diagnostics`] walks the
//! finished tree to project them into [`Diagnostics`].

mod collection;
mod message;
mod printer;


pub use collection::collect_diagnostics;
pub use message::{Diagnostic, DiagnosticKind};
pub use printer::DiagnosticsPrinter;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Every diagnostic kind is an error; a non-empty list means the query is malformed.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Total number of messages across all nodes.
    pub fn error_count(&self) -> usize {
        self.messages.iter().map(|d| d.kinds.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.messages.iter()
    }

    pub fn printer<'d, 's>(&'d self, source: &'s str) -> DiagnosticsPrinter<'d, 's> {
        DiagnosticsPrinter::new(self).source(source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}

impl<'d> IntoIterator for &'d Diagnostics {
    type Item = &'d Diagnostic;
    type IntoIter = std::slice::Iter<'d, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diag)?;
        }
        Ok(())
    }
}
