// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module
//!
//! Resolves the settings every command handler receives.

pub mod settings;

pub use settings::*;
