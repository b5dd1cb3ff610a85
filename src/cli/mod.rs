// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzrank command-line interface.
//!
//! Two subcommands: `search` runs one query over a file of elements and
//! `distance` prints the raw edit distance between two strings. Search
//! options come from an optional JSON config file, then flags on top.

pub mod display;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use fuzzrank::Options;

#[derive(Parser)]
#[command(
    name = "fuzzrank",
    about = "Damerau-Levenshtein fuzzy search over JSON or line-delimited collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a collection and print ranked matches
    Search {
        /// JSON array of strings/objects, or a text file with one element per line
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON file with search options; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Worker threads for scoring (default: one per core)
        #[arg(long)]
        threads: Option<usize>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the Damerau-Levenshtein distance between two strings
    Distance {
        a: String,
        b: String,

        /// Also print the score of A searched in B
        #[arg(long)]
        score: bool,

        /// Search every substring of B (with --score)
        #[arg(long)]
        exhaustive: bool,
    },
}

/// Flags mirroring [`Options`]. Unset flags keep the config/default value.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Object fields to search, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Minimum whole-value score, 0-100
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Minimum token score, 0-100 (defaults to --threshold)
    #[arg(long)]
    pub token_threshold: Option<f64>,

    /// Score whole values only
    #[arg(long)]
    pub no_tokenize: bool,

    #[arg(long)]
    pub case_sensitive: bool,

    #[arg(long)]
    pub accent_sensitive: bool,

    /// Search every substring of longer values
    #[arg(long)]
    pub exhaustive: bool,

    /// Keep element order instead of ranking
    #[arg(long)]
    pub unsorted: bool,
}

impl OptionArgs {
    pub fn apply(self, mut options: Options) -> Options {
        if !self.keys.is_empty() {
            options.keys = self.keys;
        }
        if let Some(threshold) = self.threshold {
            options.threshold = threshold;
        }
        if self.token_threshold.is_some() {
            options.token_threshold = self.token_threshold;
        }
        options.tokenize &= !self.no_tokenize;
        options.case_sensitive |= self.case_sensitive;
        options.accent_sensitive |= self.accent_sensitive;
        options.exhaustive |= self.exhaustive;
        options.sorted &= !self.unsorted;
        options
    }
}

/// Options from `config` (or defaults) with `args` applied on top.
pub fn load_options(config: Option<&Path>, args: OptionArgs) -> Result<Options> {
    let base = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<Options>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Options::default(),
    };
    Ok(args.apply(base))
}

/// Read elements: a JSON array if the file starts with `[`, else one per line.
pub fn load_elements(path: &Path) -> Result<Vec<Value>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    if text.trim_start().starts_with('[') {
        let elements: Vec<Value> = serde_json::from_str(&text)
            .with_context(|| format!("parsing {} as a JSON array", path.display()))?;
        return Ok(elements);
    }

    let elements: Vec<Value> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect();
    if elements.is_empty() {
        bail!("{} has no elements", path.display());
    }
    Ok(elements)
}

/// How an element is shown in the table: strings bare, records as compact JSON.
pub fn element_label(element: &Value) -> String {
    match element {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
