// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Report generation command

use super::Invocation;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::report::Report;

/// Line printed after a successful write
pub const SUCCESS_MESSAGE: &str = "Report generated!";

/// Execute the generate-report command
pub fn execute(ctx: &mut Invocation<'_>) -> Result<()> {
    let dir = ctx.settings.report_dir()?;
    let report = Report::now();
    let path = report.write_to(dir)?;

    tracing::info!(
        path = %path.display(),
        date = %report.date(),
        time = %report.time(),
        "report generated"
    );

    if matches!(ctx.format, OutputFormat::Json) {
        serde_json::to_writer(&mut *ctx.out, &report.summary(path))?;
        writeln!(ctx.out)?;
        return Ok(());
    }

    writeln!(ctx.out, "{}", SUCCESS_MESSAGE)?;
    Ok(())
}
