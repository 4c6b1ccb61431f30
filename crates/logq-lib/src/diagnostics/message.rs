use rowan::TextRange;
use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::parser::Token;

/// Problems the parser records on the node where they are detected.
///
/// Parsing never stops on any of these: the offending node is still built,
/// possibly with empty or placeholder content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A value was required but the current token cannot start one.
    ExpectedValue,
    /// A quoted literal ran off the end of input.
    UnclosedQuote,
    /// A backslash inside a quoted literal was not followed by a quote.
    InvalidEscape,
    /// A parenthesized group was not closed.
    UnclosedParen,
    /// Parenthesized groups nest deeper than the configured limit.
    NestingTooDeep,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExpectedValue => "expected to find a value",
            Self::UnclosedQuote => "expected to find a closing double-quote",
            Self::InvalidEscape => "invalid escape sequence",
            Self::UnclosedParen => "expected a closing paren",
            Self::NestingTooDeep => "maximum nesting depth exceeded",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fallback_message())
    }
}

/// One node's diagnostics, anchored to the node's token range.
///
/// A read-only projection of the tree built by
/// [`collect_diagnostics`](super::collect_diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kinds: Vec<DiagnosticKind>,
    pub(crate) start: Token,
    pub(crate) end: Token,
}

impl Diagnostic {
    pub fn new(kinds: Vec<DiagnosticKind>, start: Token, end: Token) -> Self {
        Self { kinds, start, end }
    }

    pub fn kinds(&self) -> &[DiagnosticKind] {
        &self.kinds
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(DiagnosticKind::fallback_message)
    }

    /// Joined form used as the report title.
    pub fn message(&self) -> String {
        self.messages().collect::<Vec<_>>().join(", ")
    }

    pub fn start(&self) -> Token {
        self.start
    }

    pub fn end(&self) -> Token {
        self.end
    }

    /// From the start of the first token to the end of the last one.
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start.span.start(), self.end.span.end().max(self.start.span.start()))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = self.range();
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(range.start()),
            u32::from(range.end()),
            self.message()
        )
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let range = self.range();
        let mut state = serializer.serialize_struct("Diagnostic", 3)?;
        state.serialize_field("severity", "error")?;
        state.serialize_field(
            "range",
            &SerializedRange {
                start: range.start().into(),
                end: range.end().into(),
            },
        )?;
        state.serialize_field("messages", &self.messages().collect::<Vec<_>>())?;
        state.end()
    }
}

#[derive(Serialize)]
struct SerializedRange {
    start: u32,
    end: u32,
}
