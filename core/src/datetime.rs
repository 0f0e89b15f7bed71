// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

/// Stable format of the schedule fields, as written into the payload.
pub(crate) const STABLE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 4] = [
    STABLE_FORMAT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a local date and time such as `2025-06-01T18:30` or
/// `2025-06-01 18:30`. Seconds are accepted and kept.
#[must_use]
pub fn parse_datetime(s: &str) -> Option<DateTime> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| DateTime::strptime(fmt, s).ok())
}

/// Formats a date and time in the stable `YYYY-MM-DDTHH:MM` form.
#[must_use]
pub fn format_datetime(dt: DateTime) -> String {
    dt.strftime(STABLE_FORMAT).to_string()
}
