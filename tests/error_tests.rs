// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;
use std::path::PathBuf;

use app_console::error::{AppError, ConfigError, EXIT_CONFIG, EXIT_IO, EXIT_USAGE};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let err: AppError = io_error.into();

    match err {
        AppError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_missing_data_dir_display() {
    let err = AppError::from(ConfigError::MissingDataDir("APP_DATA_DIR"));
    assert_eq!(
        err.to_string(),
        "Configuration error: APP_DATA_DIR is not set; point it at a writable directory"
    );
}

#[test]
fn test_data_dir_not_found_display() {
    let err = ConfigError::DataDirNotFound(PathBuf::from("/no/such/dir"));
    assert_eq!(
        err.to_string(),
        "data directory /no/such/dir does not exist or is not a directory"
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        AppError::from(ConfigError::MissingDataDir("APP_DATA_DIR")).exit_code(),
        EXIT_CONFIG
    );
    assert_eq!(
        AppError::from(io::Error::other("disk full")).exit_code(),
        EXIT_IO
    );
    assert_ne!(EXIT_USAGE, 0);
}

#[test]
fn test_write_error_keeps_source() {
    use std::error::Error;

    let err = AppError::Write {
        path: PathBuf::from("/data/report.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
    };
    assert!(err.source().is_some());
    assert_eq!(
        err.to_string(),
        "Failed to write /data/report.txt: read-only"
    );
}
