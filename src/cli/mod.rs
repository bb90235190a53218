// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the reducible command-line interface.
//!
//! With no subcommand the program reads a word list and prints the reducible
//! 9-letter words. The subcommands ask narrower questions of the same
//! computed set: other lengths, single words, chains, per-length counts.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "reducible",
    about = "Find words that shrink to \"a\" or \"i\" one deleted letter at a time",
    version
)]
pub struct Cli {
    /// Word list, one word per line: a path, an http(s) URL, or "-" for stdin
    #[arg(short, long, global = true, default_value = "-")]
    pub input: String,

    /// Evaluate each length class on a single thread
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print loader statistics and per-length counts to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report reducible dictionary words of one length (the default command)
    Report {
        /// Word length to report
        #[arg(short, long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(1..=9))]
        length: u8,
    },

    /// Report whether each word is reducible
    Check {
        /// Words to look up (case-insensitive)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print one reduction chain down to "a" or "i" for each word
    Chain {
        /// Words to reduce (case-insensitive)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Dictionary and reducible word counts for every length
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
