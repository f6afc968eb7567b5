// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Timestamped text report
//!
//! A report is rendered from a single timestamp snapshot and written with
//! an atomic replace, so readers only ever see a complete body.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;
use tempfile::Builder;

use crate::config::REPORT_FILE_NAME;
use crate::error::{AppError, Result};

/// Header line of every report
pub const REPORT_HEADER: &str = "======= REPORT =======";

/// Format of the DATE line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the TIME line
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A report captured at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    generated_at: NaiveDateTime,
}

/// Summary of a written report, used for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub date: String,
    pub time: String,
}

impl Report {
    /// Capture a report for the current local time
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Capture a report for a given instant
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            generated_at: instant.naive_local(),
        }
    }

    pub fn date(&self) -> String {
        self.generated_at.format(DATE_FORMAT).to_string()
    }

    pub fn time(&self) -> String {
        self.generated_at.format(TIME_FORMAT).to_string()
    }

    /// Render the report body
    pub fn render(&self) -> String {
        format!(
            "{}\nDATE: {}\nTIME: {}\n...\n",
            REPORT_HEADER,
            self.date(),
            self.time()
        )
    }

    /// Write `report.txt` into `dir`, replacing any previous report.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(REPORT_FILE_NAME);
        let wrap = |source: std::io::Error| AppError::Write {
            path: path.clone(),
            source,
        };

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Same mode as a plain create; the umask still applies
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut tmp = builder.tempfile_in(dir).map_err(wrap)?;
        tmp.write_all(self.render().as_bytes()).map_err(wrap)?;
        tmp.as_file().sync_all().map_err(wrap)?;
        tmp.persist(&path).map_err(|e| wrap(e.error))?;

        tracing::debug!(path = %path.display(), "report persisted");
        Ok(path)
    }

    pub fn summary(&self, path: PathBuf) -> ReportSummary {
        ReportSummary {
            path,
            date: self.date(),
            time: self.time(),
        }
    }
}
