// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Greeting command

use serde::Serialize;

use super::Invocation;
use crate::cli::args::{HelloArgs, OutputFormat};
use crate::error::Result;

#[derive(Serialize)]
struct Greeting<'a> {
    greeting: &'a str,
}

/// The greeting line, without a trailing newline. No escaping is applied.
pub fn greeting(username: &str) -> String {
    format!("Hello {}!", username)
}

/// Execute the hello command
pub fn execute(args: &HelloArgs, ctx: &mut Invocation<'_>) -> Result<()> {
    let line = greeting(&args.username);

    if matches!(ctx.format, OutputFormat::Json) {
        serde_json::to_writer(&mut *ctx.out, &Greeting { greeting: &line })?;
        writeln!(ctx.out)?;
        return Ok(());
    }

    writeln!(ctx.out, "{}", line)?;
    Ok(())
}
