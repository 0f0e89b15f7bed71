// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evently_core::{
    AutocompleteController, Banner, EventDraft, EventPayload, Theme, ThemeStore,
};
use jiff::civil::DateTime;

use crate::Context;
use crate::tui::{self, EventStore};

/// Opens the create-event editor and exports the submitted event.
#[derive(Debug, Clone, Default)]
pub struct CmdNew {
    pub output_dir: Option<PathBuf>,
    pub theme: Option<Theme>,
    pub banner: Option<PathBuf>,
    pub demo: bool,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("create")
            .about("Create an event in the terminal editor")
            .arg(
                arg!(--"output-dir" <DIR> "Directory to write event-payload.json to")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
            .arg(arg!(--theme <THEME> "Preselect a theme").value_parser(value_parser!(Theme)))
            .arg(
                arg!(--banner <IMAGE> "Attach a banner image")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--demo "Start with the demo values filled in"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_dir: matches.get_one("output-dir").cloned(),
            theme: matches.get_one("theme").copied(),
            banner: matches.get_one("banner").cloned(),
            demo: matches.get_flag("demo"),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening event editor...");
        let banner = match &self.banner {
            Some(path) => Some(load_banner(path).await?),
            None => None,
        };
        let now = jiff::Zoned::now().datetime();
        let store = self.store(ctx, now, banner);

        // the editor blocks on terminal input while lookups keep running on the runtime
        let store = tokio::task::block_in_place(|| tui::edit_event(store))?;
        match store.into_payload() {
            Some(payload) => {
                let dir = self.output_dir.as_ref().unwrap_or(&ctx.config.export.dir);
                let path = export(&payload, dir).await?;
                print!("{}", payload.preview());
                println!();
                println!("{} {}", "Saved to".green(), path.display());
            }
            None => {
                tracing::info!("user cancelled the event creation");
                println!("{}", "Event creation cancelled".italic());
            }
        }
        Ok(())
    }

    fn store(&self, ctx: &Context, now: DateTime, banner: Option<Banner>) -> EventStore {
        let mut draft = match self.demo {
            true => EventDraft::demo(now),
            false => EventDraft::new(),
        };
        draft.banner = banner;

        let mut themes = ThemeStore::new();
        if let Some(theme) = self.theme {
            themes.set_theme(theme);
        }

        let autocomplete =
            AutocompleteController::new(ctx.client.clone(), ctx.config.autocomplete_options());
        EventStore::new(draft, themes, autocomplete)
    }
}

async fn load_banner(path: &std::path::Path) -> Result<Banner, Box<dyn Error>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read banner {}: {e}", path.display()))?;
    Ok(Banner::from_bytes(path, &bytes)?)
}

async fn export(payload: &EventPayload, dir: &std::path::Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = payload
        .export(dir)
        .await
        .map_err(|e| format!("Failed to export event to {}: {e}", dir.display()))?;
    tracing::info!(path = %path.display(), "event exported");
    Ok(path)
}
