// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - A scripted geocoder whose lookups are answered by the test
//! - Suggestion and controller factories

mod fake_geocoder;
mod fixtures;

#[allow(unused_imports)]
pub use fake_geocoder::{FakeGeocoder, PendingLookup};
#[allow(unused_imports)]
pub use fixtures::{bengaluru, controller, fast_options, numbered, unnamed_road};
