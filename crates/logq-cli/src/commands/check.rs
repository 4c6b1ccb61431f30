use std::path::PathBuf;

use super::run_common;

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = run_common::load_or_exit(args.query_path.as_deref(), args.query_text.as_deref());
    let parsed = run_common::builder(&loaded, args.max_depth).parse();

    if let Err(logq_lib::Error::InvalidQuery(diagnostics)) = parsed.into_valid() {
        run_common::report(&diagnostics, &loaded, args.color);
        eprintln!("error: {} problem(s) found", diagnostics.error_count());
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
