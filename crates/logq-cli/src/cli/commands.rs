//! Command builders for the CLI.
//!
//! All commands accept the same flags so a command line can be re-run under a
//! different subcommand; flags a command ignores are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add hidden parse flags (for commands that never build an AST).
fn with_hidden_parse_args(cmd: Command) -> Command {
    cmd.arg(max_depth_arg().hide(true))
        .arg(color_arg().hide(true))
}

/// Add hidden AST output flags (for commands that don't print an AST).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true)).arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("logq")
        .about("Inspect and validate log search queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
}

/// Print the token stream of a query.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of a query")
        .override_usage(
            "\
  logq tokens <FILE>
  logq tokens -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  logq tokens -q 'level AND "disk full"'
  logq tokens queries.txt
  echo 'a OR b' | logq tokens -"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg());

    with_hidden_output_args(with_hidden_parse_args(cmd))
}

/// Print the parsed AST of a query.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Print the AST of a query")
        .override_usage(
            "\
  logq ast <FILE> [--spans | --json]
  logq ast -q <TEXT> [--spans | --json]",
        )
        .after_help(
            r#"EXAMPLES:
  logq ast -q '(error OR warn) db*'
  logq ast -q 'a b' --spans          # byte ranges per node
  logq ast -q 'a b' --json           # serialized tree
  logq ast deep.txt --max-depth 16"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(max_depth_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  logq check <FILE>
  logq check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  logq check -q 'status:(500 OR 503'
  logq check queries.txt --color never"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(max_depth_arg())
        .arg(color_arg());

    with_hidden_output_args(cmd)
}
