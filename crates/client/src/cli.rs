// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for `list` and `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Sort direction on the last-updated time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl From<SortArg> for jt_core::SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => jt_core::SortOrder::Asc,
            SortArg::Desc => jt_core::SortOrder::Desc,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Browse a notes collection the way the dashboard shows it")]
#[command(
    long_about = "Browse a notes collection the way the dashboard shows it.\n\n\
    Notes are loaded from a JSONL seed file into an in-memory store, one\n\
    {\"id\": ..., \"fields\": {...}} document per line."
)]
pub struct Cli {
    /// JSONL file with the documents to load
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Act as this user
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Config file (default: <config dir>/jotter/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List your notes
    List {
        /// Only notes whose title or content contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only notes in this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort order (default from config)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Show at most this many notes
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show one note; other users' notes only if they are public
    Show {
        id: String,

        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print the share link of a public note
    Share { id: String },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
