// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core library for Evently: the address autocomplete controller, the map
//! selection view, and the event draft behind the create-event form.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

mod autocomplete;
mod banner;
mod config;
mod datetime;
mod event;
mod map;
mod selection;
mod theme;

pub use crate::autocomplete::{AutocompleteController, AutocompleteOptions, QueryState, Update};
pub use crate::banner::{Banner, BannerError};
pub use crate::config::{APP_NAME, AutocompleteConfig, Config, ExportConfig, GeocodeConfig};
pub use crate::datetime::{format_datetime, parse_datetime};
pub use crate::event::{
    DraftError, EventDraft, EventPayload, EventPreview, ExportError, PAYLOAD_FILE_NAME,
};
pub use crate::map::{Bounds, CLOSE_ZOOM, DEFAULT_CENTER, MapView, WIDE_ZOOM};
pub use crate::selection::SelectedLocation;
pub use crate::theme::{Theme, ThemeStore};

pub use evently_geocode::{
    AutocompleteRequest, GeoapifyClient, GeoapifyConfig, GeocodeError, Geocoder, LatLng,
    Suggestion, SuggestionId, TileCoord,
};
