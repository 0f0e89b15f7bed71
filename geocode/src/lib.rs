// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Geoapify client for address autocomplete and map tiles.

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
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod client;
mod config;
mod error;
mod geocoder;
mod http;
mod request;
mod response;
mod tile;
mod types;

pub use crate::client::GeoapifyClient;
pub use crate::config::GeoapifyConfig;
pub use crate::error::GeocodeError;
pub use crate::geocoder::Geocoder;
pub use crate::request::{AutocompleteRequest, DEFAULT_LIMIT};
pub use crate::response::parse_suggestions;
pub use crate::tile::{MAX_ZOOM, TileCoord};
pub use crate::types::{LatLng, Suggestion, SuggestionId};
