// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the autocomplete controller.

mod debounce;
mod errors;
mod selection;
mod staleness;
