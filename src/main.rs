// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

#[cfg(feature = "parallel")]
use reducible::compute_reducible_set_with_progress;
#[cfg(not(feature = "parallel"))]
use reducible::compute_reducible_set_with;
use reducible::{
    build_report_for_length, is_reducible, load_dictionary_file_with_stats,
    load_dictionary_with_stats, reduction_chain, summarize_lengths, Dictionary, EngineOptions,
    LoadStats, ReducibleSet, Word, MAX_WORD_LEN,
};

mod cli;
use cli::display::{self, Stream};
use cli::{Cli, Commands, OutputFormat};

#[derive(Serialize)]
struct Verdict<'a> {
    word: &'a str,
    reducible: bool,
}

#[derive(Serialize)]
struct Chain<'a> {
    word: &'a str,
    chain: Option<Vec<Word>>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Nothing is computed or printed unless the whole source was read.
    let (dictionary, load_stats) = load(&cli.input).context("error loading dictionary")?;

    if cli.verbose {
        display::print_load_stats(&load_stats);
    }
    if dictionary.is_empty() {
        display::warn("no valid words in the input; only \"a\" and \"i\" are reducible");
    }

    let options = if cli.sequential {
        EngineOptions::sequential()
    } else {
        EngineOptions::default()
    };
    let set = compute(&dictionary, &options, cli.quiet);

    if cli.verbose {
        display::print_length_summary(&summarize_lengths(&dictionary, &set));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        None => report(&mut out, cli.format, &dictionary, &set, MAX_WORD_LEN)?,
        Some(Commands::Report { length }) => {
            report(&mut out, cli.format, &dictionary, &set, usize::from(*length))?
        }
        Some(Commands::Check { words }) => check(&mut out, cli.format, words, &set)?,
        Some(Commands::Chain { words }) => chain(&mut out, cli.format, words, &set)?,
        Some(Commands::Stats) => stats(&mut out, cli.format, &dictionary, &set)?,
    }
    out.flush().context("error writing output")?;
    Ok(())
}

/// `-` is stdin, `http(s)://` is fetched, anything else is a path.
fn load(input: &str) -> Result<(Dictionary, LoadStats), reducible::LoadError> {
    if input == "-" {
        return load_dictionary_with_stats(io::stdin().lock());
    }
    #[cfg(feature = "http")]
    if reducible::is_url(input) {
        return reducible::load_dictionary_url_with_stats(input);
    }
    load_dictionary_file_with_stats(Path::new(input))
}

#[cfg(feature = "parallel")]
fn compute(dictionary: &Dictionary, options: &EngineOptions, quiet: bool) -> ReducibleSet {
    let progress = display::engine_progress(quiet);
    let set = compute_reducible_set_with_progress(dictionary, options, &progress);
    progress.finish_and_clear();
    set
}

#[cfg(not(feature = "parallel"))]
fn compute(dictionary: &Dictionary, options: &EngineOptions, _quiet: bool) -> ReducibleSet {
    compute_reducible_set_with(dictionary, options)
}

fn report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    dictionary: &Dictionary,
    set: &ReducibleSet,
    length: usize,
) -> Result<()> {
    let report = build_report_for_length(dictionary, set, length);
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    Ok(())
}

fn check<W: Write>(
    out: &mut W,
    format: OutputFormat,
    words: &[String],
    set: &ReducibleSet,
) -> Result<()> {
    let verdicts: Vec<Verdict> = words
        .iter()
        .map(|word| Verdict {
            word,
            reducible: is_reducible(word, set),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for verdict in &verdicts {
                writeln!(
                    out,
                    "{}",
                    display::format_verdict(Stream::Stdout, verdict.word, verdict.reducible)
                )?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&verdicts)?)?,
    }
    Ok(())
}

fn chain<W: Write>(
    out: &mut W,
    format: OutputFormat,
    words: &[String],
    set: &ReducibleSet,
) -> Result<()> {
    let chains: Vec<Chain> = words
        .iter()
        .map(|word| Chain {
            word,
            chain: reduction_chain(word, set),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for entry in &chains {
                let line = match &entry.chain {
                    Some(links) => display::format_chain(Stream::Stdout, links),
                    None => display::format_verdict(Stream::Stdout, entry.word, false),
                };
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&chains)?)?,
    }
    Ok(())
}

fn stats<W: Write>(
    out: &mut W,
    format: OutputFormat,
    dictionary: &Dictionary,
    set: &ReducibleSet,
) -> Result<()> {
    let rows = summarize_lengths(dictionary, set);
    match format {
        OutputFormat::Text => {
            for line in display::format_length_table(Stream::Stdout, &rows) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
    }
    Ok(())
}
