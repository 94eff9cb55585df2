// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the coursedex command-line interface.
//!
//! Three subcommands: `search` ranks a dataset file against a query, `inspect`
//! summarizes a dataset, and `serve` exposes the pipeline over HTTP.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "coursedex",
    about = "Relevance ranking for course-catalog queries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Ranking knobs shared by every subcommand. Flags beat env vars beat the file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON config file (titleWeight, descriptionWeight, seasons)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Score added per title hit
    #[arg(long)]
    pub title_weight: Option<u32>,

    /// Score added per description hit
    #[arg(long)]
    pub description_weight: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a dataset against a query and print the results
    Search {
        /// Path to the dataset JSON file
        dataset: PathBuf,

        /// Search query (lowercased before ranking)
        query: String,

        /// Print results as a JSON array instead of a table
        #[arg(long)]
        json: bool,

        /// Show relevance scores next to each result
        #[arg(long)]
        scores: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Summarize a dataset: record count, fingerprint, season coverage
    Inspect {
        /// Path to the dataset JSON file
        dataset: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Serve the pipeline over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Path to the dataset JSON file, re-read when it changes
        dataset: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        config: ConfigArgs,
    },
}
