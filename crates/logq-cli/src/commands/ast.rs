//! Print the AST of a query.

use std::path::PathBuf;

use super::run_common;

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub max_depth: Option<u32>,
    pub spans: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let loaded = run_common::load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());
    let parsed = run_common::builder(&loaded, args.max_depth).parse();

    // The tree is printed either way; diagnostics only explain its recovered parts.
    run_common::report(parsed.diagnostics(), &loaded, args.color);

    if args.json {
        match serde_json::to_string_pretty(parsed.query()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize AST: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", parsed.printer().with_spans(args.spans).dump());
}
