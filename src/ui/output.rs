//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.

use std::fmt::Display;

use serde::Serialize;

use crate::source::{Commit, Repository};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a value as pretty JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format one repository as `id  name`.
pub fn format_repository(repo: &Repository) -> String {
    format!("{}  {}", repo.id, repo.name)
}

/// Format a repository list with ids aligned.
pub fn format_repositories(repos: &[Repository]) -> String {
    let width = repos.iter().map(|r| r.id.len()).max().unwrap_or(0);
    repos
        .iter()
        .map(|r| format!("{:<width$}  {}", r.id, r.name, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one churn sample as `YYYY-MM-DD  +added  -deleted`.
pub fn format_commit(commit: &Commit) -> String {
    format!(
        "{}  {:>6}  {:>6}",
        commit.created_date.format("%Y-%m-%d"),
        format!("+{}", commit.lines_added),
        format!("-{}", commit.lines_deleted)
    )
}

/// Format a commit listing followed by a totals line.
pub fn format_commits(commits: &[Commit]) -> String {
    let added: u64 = commits.iter().map(|c| u64::from(c.lines_added)).sum();
    let deleted: u64 = commits.iter().map(|c| u64::from(c.lines_deleted)).sum();

    let mut lines: Vec<String> = commits.iter().map(format_commit).collect();
    lines.push(format!(
        "total       {:>6}  {:>6}",
        format!("+{}", added),
        format!("-{}", deleted)
    ));
    lines.join("\n")
}
