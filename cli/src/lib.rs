// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for Evently.

mod cli;
mod cmd_generate_completion;
mod cmd_geocode;
mod cmd_new;
mod cmd_themes;
mod config;
mod suggestion_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, Context, run};
pub use crate::config::parse_config;
