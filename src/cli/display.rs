// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the reducible CLI.
//!
//! Color only when the stream is a TTY and `NO_COLOR` is unset, so piped
//! output is byte-for-byte plain. Status lines and the progress bar go to
//! stderr; stdout carries only results.

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use reducible::{LengthSummary, LoadStats, Word};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

pub use colors::*;

/// Which stream a piece of text is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used for `stream` (TTY detection)
pub fn use_colors(stream: Stream) -> bool {
    // Respect NO_COLOR standard
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

/// Apply styles if `stream` is a TTY, otherwise return plain text
pub fn styled(stream: Stream, styles: &[&str], text: &str) -> String {
    if use_colors(stream) {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let len = visible_len(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `sciat → scat → cat → at → a`, root highlighted
pub fn format_chain(stream: Stream, chain: &[Word]) -> String {
    let arrow = styled(stream, &[DIM], "→");
    let last = chain.len().saturating_sub(1);
    chain
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == last {
                styled(stream, &[BOLD, GREEN], word.as_str())
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&format!(" {} ", arrow))
}

/// `cat: reducible` / `dog: not reducible`
pub fn format_verdict(stream: Stream, word: &str, reducible: bool) -> String {
    let verdict = if reducible {
        styled(stream, &[GREEN], "reducible")
    } else {
        styled(stream, &[RED], "not reducible")
    };
    format!("{}: {}", word, verdict)
}

/// Stats table: one row per length, right-aligned counts
pub fn format_length_table(stream: Stream, rows: &[LengthSummary]) -> Vec<String> {
    let mut lines = vec![styled(
        stream,
        &[BOLD],
        &format!("{:>6}  {:>9}  {:>9}", "length", "words", "reducible"),
    )];
    for row in rows {
        let reducible = if row.reducible > 0 {
            styled(stream, &[GREEN], &row.reducible.to_string())
        } else {
            styled(stream, &[DIM], "0")
        };
        lines.push(format!(
            "{:>6}  {:>9}  {}",
            row.length,
            row.words,
            pad_left(&reducible, 9)
        ));
    }
    lines
}

/// Print loader statistics to stderr
pub fn print_load_stats(stats: &LoadStats) {
    let check = styled(Stream::Stderr, &[GREEN], "✓");
    eprintln!(
        "  {} {} lines │ {} words │ {} duplicates │ {} rejected",
        check,
        stats.lines,
        stats.accepted,
        stats.duplicates,
        stats.rejected()
    );
    if stats.rejected() > 0 {
        eprintln!(
            "    {}",
            styled(
                Stream::Stderr,
                &[DIM],
                &format!(
                    "{} empty, {} too long, {} non-alphabetic",
                    stats.empty, stats.too_long, stats.non_alphabetic
                )
            )
        );
    }
}

/// Print per-length counts to stderr
pub fn print_length_summary(rows: &[LengthSummary]) {
    for line in format_length_table(Stream::Stderr, rows) {
        eprintln!("  {}", line);
    }
}

/// Warn on stderr
pub fn warn(message: &str) {
    eprintln!("{}  {}", styled(Stream::Stderr, &[YELLOW], "⚠️"), message);
}

// ═══════════════════════════════════════════════════════════════════════════
// PROGRESS
// ═══════════════════════════════════════════════════════════════════════════

/// Create a progress style for the engine bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Progress bar for the engine, one tick per length class.
///
/// Hidden when `quiet`; indicatif also hides it when stderr is not a terminal.
#[cfg(feature = "parallel")]
pub fn engine_progress(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    progress.set_style(create_progress_style());
    progress.set_prefix("Reducing");
    progress
}
