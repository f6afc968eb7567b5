// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command handlers
//!
//! Each handler receives an [`Invocation`] and performs exactly one side
//! effect. Output goes to the invocation's sink, never straight to stdout.

use std::io::Write;

use crate::cli::args::{Commands, OutputFormat};
use crate::config::Settings;
use crate::error::Result;

pub mod generate_report;
pub mod hello;

/// Everything a handler needs for one run
pub struct Invocation<'a> {
    pub settings: &'a Settings,
    pub format: OutputFormat,
    pub out: &'a mut dyn Write,
}

impl<'a> Invocation<'a> {
    pub fn new(settings: &'a Settings, format: OutputFormat, out: &'a mut dyn Write) -> Self {
        Self {
            settings,
            format,
            out,
        }
    }
}

/// Execute a parsed command
pub fn execute(command: &Commands, ctx: &mut Invocation<'_>) -> Result<()> {
    tracing::debug!(command = command.name(), "dispatching");
    match command {
        Commands::Hello(args) => hello::execute(args, ctx),
        Commands::GenerateReport => generate_report::execute(ctx),
    }
}
