// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management
//!
//! Settings are resolved once at process start from the environment and
//! then passed explicitly to every command handler.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Environment variable naming the report directory
pub const DATA_DIR_ENV: &str = "APP_DATA_DIR";

/// File name of the generated report inside the data directory
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Resolved application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory that receives `report.txt`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let data_dir = lookup(DATA_DIR_ENV).filter(|p| !p.as_os_str().is_empty());
        Self { data_dir }
    }

    /// Override the data directory (e.g. from `--data-dir`)
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|p| !p.as_os_str().is_empty()) {
            self.data_dir = Some(dir);
        }
        self
    }

    /// The validated report directory.
    ///
    /// Fails with a named configuration error when the directory is unset
    /// or does not exist. Writability is only discovered on write.
    pub fn report_dir(&self) -> Result<&Path> {
        let dir = self
            .data_dir
            .as_deref()
            .ok_or(ConfigError::MissingDataDir(DATA_DIR_ENV))?;
        if !dir.is_dir() {
            return Err(ConfigError::DataDirNotFound(dir.to_path_buf()).into());
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_from_lookup_reads_data_dir() {
        let settings = Settings::from_lookup(|key| {
            (key == DATA_DIR_ENV).then(|| PathBuf::from("/srv/data"))
        });
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/data")));
    }

    #[test]
    fn test_from_lookup_empty_is_unset() {
        let settings = Settings::from_lookup(|_| Some(PathBuf::new()));
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_override_wins() {
        let settings = Settings::from_lookup(|_| Some(PathBuf::from("/env")))
            .with_data_dir(Some(PathBuf::from("/flag")));
        assert_eq!(settings.data_dir, Some(PathBuf::from("/flag")));
    }

    #[test]
    fn test_absent_override_keeps_env() {
        let settings =
            Settings::from_lookup(|_| Some(PathBuf::from("/env"))).with_data_dir(None);
        assert_eq!(settings.data_dir, Some(PathBuf::from("/env")));
    }

    #[test]
    fn test_report_dir_missing() {
        let err = Settings::default().report_dir().unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingDataDir(DATA_DIR_ENV))
        ));
    }

    #[test]
    fn test_report_dir_nonexistent() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        let settings = Settings::default().with_data_dir(Some(gone.clone()));
        match settings.report_dir() {
            Err(AppError::Config(ConfigError::DataDirNotFound(p))) => assert_eq!(p, gone),
            other => panic!("expected DataDirNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_report_dir_existing() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default().with_data_dir(Some(dir.path().to_path_buf()));
        assert_eq!(settings.report_dir().unwrap(), dir.path());
    }
}
