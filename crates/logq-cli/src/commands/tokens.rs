//! Print the token stream of a query.

use std::fmt::Write;
use std::path::PathBuf;

use logq_lib::parser::lex;

use super::run_common;

pub struct TokensArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
}

pub fn run(args: TokensArgs) {
    let loaded = run_common::load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());
    print!("{}", format_tokens(&loaded.text));
}

/// One line per token: `Kind "text" start..end`.
pub fn format_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in lex(source) {
        let _ = writeln!(
            out,
            "{:?} {:?} {}..{}",
            token.kind,
            token.text(source),
            token.start(),
            token.end()
        );
    }
    out
}
