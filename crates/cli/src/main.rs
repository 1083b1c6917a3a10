//! probdex CLI — thin consumer around the search engine.
//!
//! Loads a JSON catalog, builds the engine once, runs one query, prints the
//! result. The engine itself lives in `probdex-search`; everything here is
//! presentation.

mod commands;
mod format;

use std::process;

use clap::ArgMatches;
use probdex_core::{catalog, Result};
use probdex_search::SearchEngine;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_hits, format_stats, format_suggestions, OutputMode};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let path = matches
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or("problems.json");
    let problems = catalog::load_catalog(path)?;
    let engine = SearchEngine::new(problems);

    let output = match matches.subcommand() {
        Some(("search", sub)) => {
            let query = joined_query(sub);
            let limit = *sub.get_one::<usize>("limit").unwrap_or(&10);
            let hits = engine.search(&query, limit)?;
            format_hits(&hits, mode)?
        }
        Some(("suggest", sub)) => {
            let query = joined_query(sub);
            let limit = *sub.get_one::<usize>("limit").unwrap_or(&10);
            let suggestions = engine.autocomplete(&query, limit)?;
            format_suggestions(&suggestions, mode)?
        }
        Some(("stats", _)) => format_stats(&engine.stats(), mode)?,
        // subcommand_required(true) makes anything else unreachable
        _ => String::new(),
    };

    println!("{output}");
    Ok(())
}

fn joined_query(sub: &ArgMatches) -> String {
    sub.get_many::<String>("query")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
