// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! The `Commands` enum is the full command registry.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line application shell
#[derive(Parser, Debug)]
#[command(name = "app-console")]
#[command(version, about = "Greets users and generates timestamped reports")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report directory (overrides APP_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a greeting for the given user
    Hello(HelloArgs),

    /// Write report.txt into the data directory
    GenerateReport,
}

impl Commands {
    /// Name the command is invoked by
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Hello(_) => "hello",
            Commands::GenerateReport => "generate-report",
        }
    }
}

/// Arguments for the hello subcommand
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct HelloArgs {
    /// Name to greet. Names that look like a global flag (`-v`, `--help`)
    /// must follow `--`
    #[arg(allow_hyphen_values = true)]
    pub username: String,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
