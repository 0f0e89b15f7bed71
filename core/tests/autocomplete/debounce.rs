// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Gating and debouncing of lookups.

use std::time::Duration;

use evently_core::{AutocompleteController, AutocompleteOptions, QueryState, Update};
use tokio::time::{Instant, advance, sleep};

use crate::common::{FakeGeocoder, bengaluru, controller};

#[tokio::test(start_paused = true)]
async fn short_text_never_queries() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("B");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert!(ctrl.suggestions().is_empty());
    assert!(lookups.try_recv().is_err());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn padded_text_is_sent_as_typed() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change(" B");
    assert_eq!(ctrl.state(), &QueryState::Debouncing);

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Dispatched {
            seq: 1,
            text: " B".to_string()
        }
    );
    let lookup = lookups.recv().await.unwrap();
    assert_eq!(lookup.request.text, " B");
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn zero_min_length_still_skips_empty_text() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let options = AutocompleteOptions {
        min_length: 0,
        ..AutocompleteOptions::default()
    };
    let mut ctrl = AutocompleteController::new(geocoder.clone(), options);

    ctrl.on_address_change("B");
    assert_eq!(ctrl.state(), &QueryState::Debouncing);
    ctrl.on_address_change("");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn empty_text_never_queries() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.on_address_change("");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn rapid_edits_issue_one_lookup_with_final_text() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    for text in ["Be", "Ben", "Beng", "Bengal", "Bengaluru"] {
        ctrl.on_address_change(text);
        assert_eq!(ctrl.state(), &QueryState::Debouncing);
        advance(Duration::from_millis(100)).await;
    }
    assert!(ctrl.pump().is_empty(), "no timer may fire within the window");

    let update = ctrl.tick().await.unwrap();
    assert_eq!(
        update,
        Update::Dispatched {
            seq: 1,
            text: "Bengaluru".to_string()
        }
    );
    assert_eq!(ctrl.state(), &QueryState::Loading);

    let lookup = lookups.recv().await.unwrap();
    assert_eq!(lookup.request.text, "Bengaluru");
    assert_eq!(lookup.request.limit, 6);
    assert_eq!(lookup.request.country, None);
    assert!(lookups.try_recv().is_err());
    assert_eq!(geocoder.calls(), 1);

    lookup.respond(Ok(vec![bengaluru()]));
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 1, count: 1 }
    );
    assert_eq!(ctrl.state(), &QueryState::Success);
    assert_eq!(ctrl.suggestions(), [bengaluru()]);
}

#[tokio::test(start_paused = true)]
async fn lookup_waits_for_quiet_period() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    let start = Instant::now();

    ctrl.on_address_change("Bengaluru");
    advance(Duration::from_millis(299)).await;
    assert!(ctrl.pump().is_empty());

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Dispatched {
            seq: 1,
            text: "Bengaluru".to_string()
        }
    );
    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(300), "{waited:?}");
    assert!(waited < Duration::from_millis(310), "{waited:?}");
}

#[tokio::test(start_paused = true)]
async fn shrinking_below_min_length_cancels_timer() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    assert_eq!(ctrl.state(), &QueryState::Debouncing);
    ctrl.on_address_change("B");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn timer_fired_before_edit_is_ignored() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    // Let the timer fire without applying its message.
    sleep(Duration::from_millis(301)).await;

    ctrl.on_address_change("Mumbai");
    assert_eq!(ctrl.pump(), [Update::Expired]);
    assert_eq!(ctrl.state(), &QueryState::Debouncing);

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Dispatched {
            seq: 1,
            text: "Mumbai".to_string()
        }
    );
    let lookup = lookups.recv().await.unwrap();
    assert_eq!(lookup.request.text, "Mumbai");
    assert_eq!(geocoder.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn same_text_does_not_rearm() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    let start = Instant::now();

    ctrl.on_address_change("Bengaluru");
    advance(Duration::from_millis(200)).await;
    ctrl.on_address_change("Bengaluru");

    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { seq: 1, .. })));
    assert!(start.elapsed() < Duration::from_millis(310));
    assert_eq!(ctrl.state(), &QueryState::Loading);
}

#[tokio::test(start_paused = true)]
async fn close_cancels_pending_timer() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.close();
    assert_eq!(ctrl.state(), &QueryState::Idle);

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn options_are_forwarded() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let options = AutocompleteOptions {
        debounce: Duration::from_millis(50),
        min_length: 3,
        limit: 3,
        country: Some("in".to_string()),
    };
    let mut ctrl = AutocompleteController::new(geocoder.clone(), options);

    ctrl.on_address_change("MG");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    ctrl.on_address_change("MG Road");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { .. })));

    let lookup = lookups.recv().await.unwrap();
    assert_eq!(lookup.request.text, "MG Road");
    assert_eq!(lookup.request.limit, 3);
    assert_eq!(lookup.request.country.as_deref(), Some("in"));
}
