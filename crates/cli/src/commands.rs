//! Clap command tree definition.

use clap::{Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("probdex")
        .about("Search a coding-problem catalog from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Catalog JSON path (default: problems.json)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("search")
                .about("Ranked search over titles, topics, difficulty, and id")
                .arg(
                    Arg::new("query")
                        .help("Query words")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('k')
                        .help("Maximum results")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                ),
        )
        .subcommand(
            Command::new("suggest")
                .about("Autocomplete suggestions from titles and topics")
                .arg(
                    Arg::new("query")
                        .help("Substring to complete")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('k')
                        .help("Maximum suggestions")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                ),
        )
        .subcommand(Command::new("stats").about("Catalog and index counts"))
}
