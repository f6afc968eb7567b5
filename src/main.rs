// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Entry point for the `app-console` binary.

use std::io::{self, Write};

use app_console::cli;
use app_console::config::Settings;

fn main() {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let code = match cli::parse(std::env::args_os(), &mut stdout, &mut stderr) {
        Ok(parsed) => {
            init_tracing(parsed.verbose);
            let settings = Settings::from_env();
            cli::execute(parsed, settings, &mut stdout, &mut stderr)
        }
        Err(code) => code,
    };

    // process::exit skips destructors
    let _ = stdout.flush();
    std::process::exit(code);
}

/// Initialize tracing on stderr so stdout carries only command output.
///
/// `-v` enables debug and `-vv` trace for this crate. `RUST_LOG` directives
/// are applied on top.
fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("app_console=debug"),
        _ => Some("app_console=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
