// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use jiff::ToSpan;
use jiff::civil::DateTime;
use serde::Serialize;

use crate::banner::{Banner, BannerError, data_url_mime};
use crate::datetime::{format_datetime, parse_datetime};
use crate::selection::SelectedLocation;
use crate::theme::Theme;

/// File name of the exported payload.
pub const PAYLOAD_FILE_NAME: &str = "event-payload.json";

/// Validation failures of the event form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The title is empty.
    #[error("Please add an event title.")]
    MissingTitle,

    /// Start or end is empty.
    #[error("Please choose start and end date/time.")]
    MissingSchedule,

    /// The end lies before the start.
    #[error("End time must be after start time.")]
    EndBeforeStart,

    /// A schedule field could not be parsed.
    #[error("Invalid date/time: {0:?} (expected YYYY-MM-DDTHH:MM)")]
    InvalidDateTime(String),

    /// A numeric field could not be parsed.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The banner image could not be attached.
    #[error("{0}")]
    InvalidBanner(String),
}

impl From<BannerError> for DraftError {
    fn from(err: BannerError) -> Self {
        Self::InvalidBanner(err.to_string())
    }
}

/// Failures while writing the payload file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The file or its directory could not be written.
    #[error("Failed to write event payload: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be serialized.
    #[error("Failed to serialize event payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// The state of the create-event form.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    /// The title of the event.
    pub title: String,

    /// The start, as typed.
    pub start: String,

    /// The end, as typed.
    pub end: String,

    /// The address text of the location field.
    pub location: String,

    /// The location picked from the suggestions, if any.
    pub location_point: Option<SelectedLocation>,

    /// Free-form description.
    pub description: String,

    /// Whether guests need approval to attend.
    pub require_approval: bool,

    /// Whether tickets are free.
    pub tickets_free: bool,

    /// Price of a ticket, used only for paid events.
    pub ticket_price: Option<f64>,

    /// Maximum number of guests, unlimited if `None`.
    pub capacity: Option<u32>,

    /// The theme of the event page.
    pub theme: Option<Theme>,

    /// The banner image, if one is attached.
    pub banner: Option<Banner>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            start: String::new(),
            end: String::new(),
            location: String::new(),
            location_point: None,
            description: String::new(),
            require_approval: false,
            tickets_free: true,
            ticket_price: None,
            capacity: None,
            theme: None,
            banner: None,
        }
    }
}

impl EventDraft {
    /// Creates an empty draft with free tickets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft filled with demo values, scheduled relative to `now`.
    #[must_use]
    pub fn demo(now: DateTime) -> Self {
        let mut draft = Self::new();
        draft.fill_demo(now);
        draft
    }

    /// Fills title, schedule and location with demo values. The party starts
    /// in an hour and lasts an hour.
    pub fn fill_demo(&mut self, now: DateTime) {
        self.title = "My Demo Party".to_string();
        self.start = format_datetime(now.saturating_add(1.hour()));
        self.end = format_datetime(now.saturating_add(2.hours()));
        self.location = "Virtual / Zoom link".to_string();
        self.location_point = None;
    }

    /// Checks that the end is not before the start.
    ///
    /// Only applies once both fields parse; incomplete input is not an error
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EndBeforeStart`] if the schedule is inverted.
    pub fn validate_schedule(&self) -> Result<(), DraftError> {
        match (parse_datetime(&self.start), parse_datetime(&self.end)) {
            (Some(start), Some(end)) if end < start => Err(DraftError::EndBeforeStart),
            _ => Ok(()),
        }
    }

    /// Validates the form and builds the payload.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: missing title, missing
    /// schedule, unparsable schedule, then inverted schedule.
    pub fn submit(&self) -> Result<EventPayload, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let (start, end) = (self.start.trim(), self.end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(DraftError::MissingSchedule);
        }
        let parse = |s: &str| parse_datetime(s).ok_or_else(|| DraftError::InvalidDateTime(s.to_string()));
        let (start, end) = (parse(start)?, parse(end)?);
        if end < start {
            return Err(DraftError::EndBeforeStart);
        }

        let point = self.location_point.as_ref().and_then(SelectedLocation::position);
        Ok(EventPayload {
            title: title.to_string(),
            start: format_datetime(start),
            end: format_datetime(end),
            location: self.location.trim().to_string(),
            latitude: point.map(|p| p.lat),
            longitude: point.map(|p| p.lng),
            description: self.description.trim().to_string(),
            require_approval: self.require_approval,
            tickets_free: self.tickets_free,
            ticket_price: if self.tickets_free {
                Some(0.0)
            } else {
                self.ticket_price
            },
            capacity: self.capacity,
            theme: self.theme,
            banner_data_url: self.banner.as_ref().map(|b| b.data_url().to_string()),
        })
    }

    /// Parses the ticket price field. Blank means no price.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidNumber`] for anything that is not a
    /// finite, non-negative number.
    pub fn parse_ticket_price(s: &str) -> Result<Option<f64>, DraftError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
            _ => Err(DraftError::InvalidNumber(s.to_string())),
        }
    }

    /// Parses the capacity field. Blank means unlimited.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidNumber`] for anything that is not a
    /// positive integer.
    pub fn parse_capacity(s: &str) -> Result<Option<u32>, DraftError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<u32>() {
            Ok(v) if v >= 1 => Ok(Some(v)),
            _ => Err(DraftError::InvalidNumber(s.to_string())),
        }
    }
}

/// The event as submitted, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Trimmed title.
    pub title: String,
    /// Start in `YYYY-MM-DDTHH:MM`.
    pub start: String,
    /// End in `YYYY-MM-DDTHH:MM`.
    pub end: String,
    /// Trimmed address text.
    pub location: String,
    /// Latitude of the picked location.
    pub latitude: Option<f64>,
    /// Longitude of the picked location.
    pub longitude: Option<f64>,
    /// Trimmed description.
    pub description: String,
    /// Whether guests need approval.
    pub require_approval: bool,
    /// Whether tickets are free.
    pub tickets_free: bool,
    /// Ticket price, zero for free events.
    pub ticket_price: Option<f64>,
    /// Capacity, `null` for unlimited.
    pub capacity: Option<u32>,
    /// Theme name.
    pub theme: Option<Theme>,
    /// Banner image as a `data:` URL, `null` without a banner.
    pub banner_data_url: Option<String>,
}

impl EventPayload {
    /// Serializes the payload as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the payload to `event-payload.json` in `dir`, creating the
    /// directory if needed, and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    #[tracing::instrument(skip(self))]
    pub async fn export(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let json = self.to_json_pretty()?;
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(PAYLOAD_FILE_NAME);
        tokio::fs::write(&path, json).await?;
        tracing::debug!(path = %path.display(), "event payload written");
        Ok(path)
    }

    /// Returns the human readable preview.
    #[must_use]
    pub const fn preview(&self) -> EventPreview<'_> {
        EventPreview(self)
    }
}

/// Preview of a submitted event, one field per line.
#[derive(Debug, Clone, Copy)]
pub struct EventPreview<'a>(&'a EventPayload);

impl fmt::Display for EventPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or<'s>(s: &'s str, fallback: &'s str) -> &'s str {
            if s.is_empty() { fallback } else { s }
        }

        let p = self.0;

        writeln!(f, "{}", or(&p.title, "(no title)"))?;
        writeln!(f, "{}", or(&p.description, "(no description)"))?;
        writeln!(f)?;
        writeln!(f, "Start: {}", or(&p.start, "-"))?;
        writeln!(f, "End: {}", or(&p.end, "-"))?;
        match (p.latitude, p.longitude) {
            (Some(lat), Some(lng)) => {
                writeln!(f, "Location: {} ({lat:.5}, {lng:.5})", or(&p.location, "-"))?;
            }
            _ => writeln!(f, "Location: {}", or(&p.location, "-"))?,
        }
        match p.theme {
            Some(theme) => writeln!(f, "Theme: {theme}")?,
            None => writeln!(f, "Theme: None")?,
        }
        match p.banner_data_url.as_deref() {
            Some(url) => writeln!(f, "Banner: {}", data_url_mime(url).unwrap_or("image"))?,
            None => writeln!(f, "Banner: No banner")?,
        }
        writeln!(
            f,
            "Require Approval: {}",
            if p.require_approval { "Yes" } else { "No" }
        )?;
        if p.tickets_free {
            writeln!(f, "Tickets: Free")?;
        } else {
            writeln!(f, "Tickets: Paid — {}", p.ticket_price.unwrap_or(0.0))?;
        }
        match p.capacity {
            Some(n) => write!(f, "Capacity: {n}"),
            None => write!(f, "Capacity: Unlimited"),
        }
    }
}
