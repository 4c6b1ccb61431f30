//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be attached
//! to several commands, visible on some and hidden (via `.hide(true)`) on others.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Query file (positional). `-` reads stdin.
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Query file (use \"-\" for stdin)")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("query_path")
        .help("Inline query text")
}

/// Nesting limit for parenthesized groups (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth of parenthesized groups")
}

/// Show byte ranges (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte ranges next to each node")
}

/// Serialized output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with("spans")
        .help("Print the AST as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
