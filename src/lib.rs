// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command-line application shell with two commands.
//!
//! - `hello <username>` prints a greeting
//! - `generate-report` writes a timestamped `report.txt` into `APP_DATA_DIR`
//!
//! Module layout:
//! - `cli`: argument definitions and dispatch to an exit code
//! - `commands`: one handler per command
//! - `config`: settings resolved from the environment
//! - `report`: report rendering and atomic file replacement

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use error::{AppError, Result};
