// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflows across the controller, the map view and the event
//! draft.

mod config_driven;
mod create_event;
