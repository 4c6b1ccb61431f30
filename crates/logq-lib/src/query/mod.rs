//! Query facade: lex, parse and collect diagnostics in one call.
//!
//! Parsing always succeeds. Whether a query with diagnostics is acceptable is
//! the caller's decision; [`ParsedQuery::into_valid`] implements the strict policy.

mod printer;
pub use printer::{QueryPrinter, render};


use crate::diagnostics::{Diagnostics, collect_diagnostics};
use crate::parser::{DEFAULT_RECURSION_LIMIT, Parser, Query, tokenize};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct QueryConfig {
    pub recursion_limit: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

pub struct QueryBuilder<'src> {
    src: &'src str,
    config: QueryConfig,
}

impl<'src> QueryBuilder<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            config: QueryConfig::default(),
        }
    }

    /// Maximum depth of nested parenthesized groups.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn parse(self) -> ParsedQuery<'src> {
        let stream = tokenize(self.src);
        let token_count = stream.len();
        let query = Parser::new(self.src, stream)
            .with_recursion_limit(self.config.recursion_limit)
            .parse();
        let diagnostics = collect_diagnostics(&query);

        tracing::debug!(
            tokens = token_count,
            diagnostics = diagnostics.len(),
            "query parsed"
        );

        ParsedQuery {
            src: self.src,
            query,
            diagnostics,
            token_count,
        }
    }
}

/// A parsed query together with its collected diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedQuery<'src> {
    src: &'src str,
    query: Query<'src>,
    diagnostics: Diagnostics,
    token_count: usize,
}

impl<'src> ParsedQuery<'src> {
    pub fn source(&self) -> &'src str {
        self.src
    }

    pub fn query(&self) -> &Query<'src> {
        &self.query
    }

    pub fn into_query(self) -> Query<'src> {
        self.query
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'src> {
        QueryPrinter::new(&self.query)
    }

    /// Rejects queries that carry any diagnostic.
    pub fn into_valid(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidQuery(self.diagnostics))
        }
    }
}
