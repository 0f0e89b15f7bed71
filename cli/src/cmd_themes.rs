// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use evently_core::Theme;
use strum::IntoEnumIterator;

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdThemes {
    pub output_format: ArgOutputFormat,
}

impl CmdThemes {
    pub const NAME: &str = "themes";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the themes an event page can use")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing themes...");
        print!("{}", self.render());
        Ok(())
    }

    fn render(self) -> String {
        match self.output_format {
            ArgOutputFormat::Json => {
                let names: Vec<&'static str> = Theme::iter().map(Into::into).collect();
                format!("{}\n", serde_json::Value::from(names))
            }
            ArgOutputFormat::Table => Theme::iter()
                .map(|theme| format!("{:<10} {}\n", theme.to_string(), swatch(theme)))
                .collect(),
        }
    }
}

fn swatch(theme: Theme) -> String {
    theme
        .gradient()
        .iter()
        .map(|&(r, g, b)| "███".truecolor(r, g, b).to_string())
        .collect()
}
