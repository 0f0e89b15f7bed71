// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Completions that arrive after the input moved on.

use evently_core::{GeocodeError, QueryState, SelectedLocation, Update};

use crate::common::{FakeGeocoder, bengaluru, controller, numbered};

#[tokio::test(start_paused = true)]
async fn late_response_for_superseded_query_is_dropped() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { seq: 1, .. })));
    let first = lookups.recv().await.unwrap();

    ctrl.on_address_change("Bengaluru, Karnataka");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { seq: 2, .. })));
    let second = lookups.recv().await.unwrap();
    assert_eq!(second.request.text, "Bengaluru, Karnataka");

    second.respond(Ok(vec![bengaluru()]));
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 2, count: 1 }
    );
    let selected = ctrl.select(0).unwrap();

    // The first lookup finishes last, with different results.
    first.respond(Ok(numbered(4)));
    assert_eq!(ctrl.tick().await.unwrap(), Update::Stale { seq: 1 });

    assert!(ctrl.suggestions().is_empty());
    assert_eq!(ctrl.selection(), Some(&selected));
    assert_eq!(
        ctrl.selection(),
        Some(&SelectedLocation::new(12.97, 77.59, "Bengaluru, Karnataka, India"))
    );
    assert_eq!(ctrl.state(), &QueryState::Idle);
}

#[tokio::test(start_paused = true)]
async fn out_of_order_completion_keeps_latest_results() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("MG Road");
    ctrl.tick().await.unwrap();
    let first = lookups.recv().await.unwrap();

    ctrl.on_address_change("MG Road, Bengaluru");
    ctrl.tick().await.unwrap();
    let second = lookups.recv().await.unwrap();

    second.respond(Ok(numbered(2)));
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 2, count: 2 }
    );

    first.respond(Ok(numbered(5)));
    assert_eq!(ctrl.tick().await.unwrap(), Update::Stale { seq: 1 });

    assert_eq!(ctrl.suggestions(), numbered(2).as_slice());
    assert_eq!(ctrl.state(), &QueryState::Success);
}

#[tokio::test(start_paused = true)]
async fn response_after_edit_is_dropped() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    let lookup = lookups.recv().await.unwrap();

    // Still debouncing the new text when the old answer comes back.
    ctrl.on_address_change("Bengaluru Pa");
    lookup.respond(Ok(vec![bengaluru()]));
    assert_eq!(ctrl.tick().await.unwrap(), Update::Stale { seq: 1 });
    assert!(ctrl.suggestions().is_empty());
    assert_eq!(ctrl.state(), &QueryState::Debouncing);

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Dispatched {
            seq: 2,
            text: "Bengaluru Pa".to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn failure_of_superseded_query_is_not_reported() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    let first = lookups.recv().await.unwrap();

    ctrl.on_address_change("Mumbai");
    ctrl.tick().await.unwrap();
    let _second = lookups.recv().await.unwrap();

    first.respond(Err(GeocodeError::Status {
        status: 500,
        body: "boom".to_string(),
    }));
    assert_eq!(ctrl.tick().await.unwrap(), Update::Stale { seq: 1 });
    assert_eq!(ctrl.error(), None);
    assert_eq!(ctrl.state(), &QueryState::Loading);
}

#[tokio::test(start_paused = true)]
async fn response_after_selection_is_dropped() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    let lookup = lookups.recv().await.unwrap();

    let selected = ctrl.select_suggestion(&bengaluru());
    lookup.respond(Ok(numbered(3)));
    assert_eq!(ctrl.tick().await.unwrap(), Update::Stale { seq: 1 });

    assert!(ctrl.suggestions().is_empty());
    assert_eq!(ctrl.selection(), Some(&selected));
}
