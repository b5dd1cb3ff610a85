// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use fuzzrank::{damerau_levenshtein, init_logger, Match, MatchScorer, SearchEngine, TokenMatch};

mod cli;
use cli::{display, Cli, Commands};

/// One result as printed by `search --json`.
#[derive(Serialize)]
struct JsonMatch<'a> {
    index: usize,
    score: f64,
    completeness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_matches: Option<&'a [TokenMatch]>,
    item: &'a serde_json::Value,
}

impl<'a> From<&'a Match<serde_json::Value>> for JsonMatch<'a> {
    fn from(m: &'a Match<serde_json::Value>) -> Self {
        Self {
            index: m.index,
            score: m.score,
            completeness: m.completeness,
            token_score: m.token_score,
            token_matches: m.token_matches.as_deref(),
            item: &*m.item,
        }
    }
}

fn main() {
    init_logger();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            config,
            threads,
            options,
        } => run_search(&file, &query, limit, json, config.as_deref(), threads, options),
        Commands::Distance {
            a,
            b,
            score,
            exhaustive,
        } => run_distance(&a, &b, score, exhaustive),
    };

    if let Err(e) = outcome {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_search(
    file: &std::path::Path,
    query: &str,
    limit: usize,
    json: bool,
    config: Option<&std::path::Path>,
    threads: Option<usize>,
    args: cli::OptionArgs,
) -> Result<()> {
    let options = cli::load_options(config, args)?;
    let elements = cli::load_elements(file)?;

    let mut engine = SearchEngine::new(elements, options).context("building search engine")?;
    if let Some(threads) = threads {
        engine = engine.with_threads(threads)?;
    }

    let start = Instant::now();
    let mut results = engine.search(query);
    let elapsed = start.elapsed();
    results.truncate(limit);

    if json {
        let out: Vec<JsonMatch<'_>> = results.iter().map(JsonMatch::from).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display::print_results(query, &results, engine.len(), elapsed, cli::element_label);
    }
    Ok(())
}

fn run_distance(a: &str, b: &str, score: bool, exhaustive: bool) -> Result<()> {
    let distance = damerau_levenshtein(a, b)?;
    println!("{distance}");

    if score {
        let result = MatchScorer::new(exhaustive).score(a, &[b])?;
        println!("score {:.2}", result.score);
    }
    Ok(())
}
