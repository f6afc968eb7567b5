// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command dispatch
//!
//! Turns an argument vector into exactly one handler call and an exit code.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use super::args::Cli;
use crate::commands::{self, Invocation};
use crate::config::Settings;
use crate::error::EXIT_IO;

/// Parse `argv`, run the selected command and return the exit code.
///
/// `settings` carries the environment-derived configuration; the
/// `--data-dir` flag is layered on top of it here.
pub fn run<I, T>(argv: I, settings: Settings, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse(argv, out, err) {
        Ok(cli) => execute(cli, settings, out, err),
        Err(code) => code,
    }
}

/// Parse `argv`.
///
/// Usage errors, `--help` and `--version` are rendered immediately and
/// come back as the exit code to use.
pub fn parse<I, T>(argv: I, out: &mut dyn Write, err: &mut dyn Write) -> Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map_err(|e| report_usage_error(&e, out, err))
}

/// Run an already parsed command line and return the exit code
pub fn execute(cli: Cli, settings: Settings, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let Some(command) = cli.command else {
        return write_or_fail(out, err, &Cli::command().render_help().to_string(), 0);
    };

    let settings = settings.with_data_dir(cli.data_dir);
    let mut ctx = Invocation::new(&settings, cli.format, out);

    match commands::execute(&command, &mut ctx) {
        Ok(()) => 0,
        Err(e) => {
            tracing::warn!(command = command.name(), error = %e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}

fn report_usage_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let code = e.exit_code();
    let rendered = e.render().to_string();

    if !e.use_stderr() {
        // --help / --version
        return write_or_fail(out, err, &rendered, code);
    }

    let _ = write!(err, "{}", rendered);
    if matches!(e.kind(), ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument) {
        let _ = write!(err, "\n{}", Cli::command().render_help());
    }
    code
}

/// Write `text` to stdout and return `code`, or `EXIT_IO` if stdout is unusable
fn write_or_fail(out: &mut dyn Write, err: &mut dyn Write, text: &str, code: i32) -> i32 {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => code,
        Err(e) => {
            tracing::warn!(error = %e, "failed to write to stdout");
            let _ = writeln!(err, "Error: failed to write output: {}", e);
            EXIT_IO
        }
    }
}
