// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use evently_core::{AutocompleteRequest, MapView, SelectedLocation, Suggestion, TileCoord};
use serde::Serialize;

use crate::Context;
use crate::suggestion_formatter::{NumberedSuggestion, SuggestionFormatter};
use crate::util::{ArgOutputFormat, parse_suggestion_number};

/// Looks up an address once, without debouncing.
#[derive(Debug, Clone)]
pub struct CmdGeocode {
    pub text: String,
    pub country: Option<String>,
    pub limit: Option<usize>,
    pub select: Option<usize>,
    pub output_format: ArgOutputFormat,
}

impl CmdGeocode {
    pub const NAME: &str = "geocode";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("lookup")
            .about("Look up address suggestions")
            .arg(arg!(text: <TEXT> "The address text to look up"))
            .arg(arg!(--country <CODE> "Restrict results to a country, e.g. `in`"))
            .arg(
                arg!(--limit <N> "Maximum number of suggestions (1-20)")
                    .value_parser(parse_suggestion_number),
            )
            .arg(
                arg!(--select <N> "Pick the N-th suggestion and show its map view")
                    .value_parser(parse_suggestion_number),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let text = matches
            .get_one::<String>("text")
            .ok_or("address text is required")?
            .clone();

        Ok(Self {
            text,
            country: matches.get_one("country").cloned(),
            limit: matches.get_one("limit").copied(),
            select: matches.get_one("select").copied(),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "looking up address...");
        let request = self.request(ctx);
        let suggestions = ctx.client.autocomplete(&request).await?;

        match self.select {
            None => {
                if suggestions.is_empty() && self.output_format == ArgOutputFormat::Table {
                    println!("{}", "No matching places".italic());
                    return Ok(());
                }
                let list = NumberedSuggestion::from_list(suggestions);
                let formatter = SuggestionFormatter::new().with_output_format(self.output_format);
                print!("{}", formatter.format(&list));
            }
            Some(n) => {
                let suggestion = suggestions
                    .get(n - 1)
                    .ok_or_else(|| format!("No suggestion #{n}, got {}", suggestions.len()))?;
                let report = SelectionReport::new(suggestion, |tile| ctx.client.tile_url(tile).ok());
                match self.output_format {
                    ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                    ArgOutputFormat::Table => print!("{report}"),
                }
            }
        }
        Ok(())
    }

    fn request(&self, ctx: &Context) -> AutocompleteRequest {
        let country = self
            .country
            .as_deref()
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty())
            .or_else(|| ctx.config.geocode.country.clone());

        AutocompleteRequest::new(self.text.clone())
            .with_limit(self.limit.unwrap_or(ctx.config.autocomplete.limit))
            .with_country(country)
    }
}

/// The location picked by `--select`, with the map it would show.
#[derive(Debug, Serialize)]
struct SelectionReport {
    selection: SelectedLocation,
    map: MapView,
    tile: TileCoord,
    tile_url: Option<String>,
}

impl SelectionReport {
    fn new(suggestion: &Suggestion, tile_url: impl FnOnce(TileCoord) -> Option<String>) -> Self {
        let selection = SelectedLocation::from(suggestion);
        let map = MapView::for_selection(Some(&selection));
        let tile = map.center_tile();
        Self {
            tile_url: tile_url(tile),
            selection,
            map,
            tile,
        }
    }
}

impl std::fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", "Selected:".bold(), self.selection.formatted)?;
        match self.map.marker {
            Some(p) => writeln!(f, "{} {p}", "Marker:  ".bold())?,
            None => writeln!(f, "{} {}", "Marker:  ".bold(), "no coordinates".yellow())?,
        }
        writeln!(
            f,
            "{} center {}, zoom {}",
            "Map:     ".bold(),
            self.map.center,
            self.map.zoom
        )?;
        writeln!(f, "{} {}", "Tile:    ".bold(), self.tile)?;
        if let Some(url) = &self.tile_url {
            writeln!(f, "{} {url}", "Tile URL:".bold())?;
        }
        Ok(())
    }
}
