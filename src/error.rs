// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the application shell
//!
//! Usage errors (unknown command, missing argument) are reported by clap
//! before any handler runs. Everything defined here is raised while a
//! handler executes.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for generic failures
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for command-line usage errors (matches clap)
pub const EXIT_USAGE: i32 = 2;

/// Exit code for I/O failures (sysexits `EX_IOERR`)
pub const EXIT_IO: i32 = 74;

/// Exit code for configuration failures (sysexits `EX_CONFIG`)
pub const EXIT_CONFIG: i32 = 78;

/// Main error type for command execution
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem errors tied to a specific path
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors on the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The report directory variable is unset or empty
    #[error("{0} is not set; point it at a writable directory")]
    MissingDataDir(&'static str),

    /// The report directory does not exist or is not a directory
    #[error("data directory {} does not exist or is not a directory", .0.display())]
    DataDirNotFound(PathBuf),
}

impl AppError {
    /// Process exit code for this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => EXIT_CONFIG,
            AppError::Write { .. } | AppError::Io(_) => EXIT_IO,
            AppError::Json(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias for command execution
pub type Result<T> = std::result::Result<T, AppError>;
