// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsing of autocomplete responses.
//!
//! The service returns a GeoJSON feature collection. Fields are read
//! leniently: identifiers may be strings or numbers, coordinates may be
//! numbers or numeric strings, and a missing `features` array is an empty
//! result.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GeocodeError;
use crate::types::{Suggestion, SuggestionId};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    place_id: Option<Value>,
    #[serde(default)]
    osm_id: Option<Value>,
    #[serde(default)]
    formatted: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lon: Option<Value>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    coordinates: Option<Value>,
}

/// Parses an autocomplete response body into suggestions, in service order.
///
/// # Errors
///
/// Returns [`GeocodeError::InvalidResponse`] if the body is not a JSON object
/// of the expected shape.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, GeocodeError> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    Ok(collection
        .features
        .unwrap_or_default()
        .into_iter()
        .map(Feature::into_suggestion)
        .collect())
}

impl Feature {
    fn into_suggestion(self) -> Suggestion {
        let props = self.properties.unwrap_or_default();

        // [lon, lat] in GeoJSON order
        let point = self
            .geometry
            .and_then(|g| g.coordinates)
            .and_then(|c| match c {
                Value::Array(a) => Some(a),
                _ => None,
            });
        let point_at = |i: usize| point.as_ref().and_then(|a| a.get(i)).and_then(number);

        let lat = props.lat.as_ref().and_then(number).or_else(|| point_at(1));
        let lon = props.lon.as_ref().and_then(number).or_else(|| point_at(0));

        let formatted = props
            .formatted
            .or(props.label)
            .or(self.text)
            .unwrap_or_default();

        let id = if let Some(id) = props.place_id.as_ref().and_then(identifier) {
            SuggestionId::PlaceId(id)
        } else if let Some(id) = props.osm_id.as_ref().and_then(identifier) {
            SuggestionId::OsmId(id)
        } else {
            SuggestionId::derive(&formatted, lat, lon)
        };

        let region = [props.state, props.city, props.country]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty());

        Suggestion {
            id,
            formatted,
            lat,
            lon,
            region,
        }
    }
}

fn number(v: &Value) -> Option<f64> {
    let n: Option<f64> = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

fn identifier(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
