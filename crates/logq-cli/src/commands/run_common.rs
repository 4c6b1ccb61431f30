//! Plumbing shared by the commands: loading input and reporting diagnostics.

use std::path::Path;

use logq_lib::{Diagnostics, QueryBuilder};

use super::query_loader::{LoadedQuery, load_query};

/// Loads the query or exits with the loader's message.
pub fn load_or_exit(query_path: Option<&Path>, query_text: Option<&str>) -> LoadedQuery {
    load_query(query_path, query_text).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

pub fn builder(loaded: &LoadedQuery, max_depth: Option<u32>) -> QueryBuilder<'_> {
    let builder = QueryBuilder::new(&loaded.text);
    match max_depth {
        Some(limit) => builder.with_recursion_limit(limit),
        None => builder,
    }
}

/// Writes annotated diagnostics to stderr.
pub fn report(diagnostics: &Diagnostics, loaded: &LoadedQuery, color: bool) {
    if diagnostics.is_empty() {
        return;
    }

    let mut printer = diagnostics.printer(&loaded.text).colored(color);
    if let Some(origin) = &loaded.origin {
        printer = printer.path(origin);
    }
    eprintln!("{}", printer.render());
}
