// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Committing suggestions and invalidating them.

use std::time::Duration;

use evently_core::{
    AutocompleteController, MapView, QueryState, SelectedLocation, Suggestion, Update,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::advance;

use crate::common::{FakeGeocoder, PendingLookup, bengaluru, controller, unnamed_road};

/// Types `text` and answers the resulting lookup with `results`.
async fn type_and_answer(
    ctrl: &mut AutocompleteController,
    lookups: &mut UnboundedReceiver<PendingLookup>,
    text: &str,
    results: Vec<Suggestion>,
) {
    ctrl.on_address_change(text);
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { .. })));
    lookups.recv().await.unwrap().respond(Ok(results));
    assert!(matches!(ctrl.tick().await, Some(Update::Received { .. })));
}

#[tokio::test(start_paused = true)]
async fn select_with_coordinates() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    type_and_answer(
        &mut ctrl,
        &mut lookups,
        "Bengaluru",
        vec![bengaluru(), unnamed_road()],
    )
    .await;

    let selected = ctrl.select(0).unwrap();
    assert_eq!(
        selected,
        SelectedLocation::new(12.97, 77.59, "Bengaluru, Karnataka, India")
    );
    assert_eq!(ctrl.selection(), Some(&selected));
    assert!(ctrl.suggestions().is_empty());
    assert_eq!(ctrl.query(), "Bengaluru, Karnataka, India");
    assert_eq!(ctrl.state(), &QueryState::Idle);

    let view = MapView::for_selection(ctrl.selection());
    assert_eq!(view.zoom, 15);
    assert_eq!(view.marker, selected.position());
}

#[tokio::test(start_paused = true)]
async fn select_without_coordinates_keeps_label() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    type_and_answer(
        &mut ctrl,
        &mut lookups,
        "Unnamed",
        vec![bengaluru(), unnamed_road()],
    )
    .await;

    let selected = ctrl.select(1).unwrap();
    assert_eq!(selected, SelectedLocation::label_only("Unnamed Road"));
    assert_eq!(ctrl.query(), "Unnamed Road");
    assert!(ctrl.suggestions().is_empty());

    // Replacing the text with the label schedules nothing.
    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 1);
    assert_eq!(ctrl.selection(), Some(&selected));

    let view = MapView::for_selection(ctrl.selection());
    assert_eq!(view, MapView::default());
}

#[tokio::test(start_paused = true)]
async fn editing_after_selection_clears_it() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    type_and_answer(&mut ctrl, &mut lookups, "Bengaluru", vec![bengaluru()]).await;
    ctrl.select(0).unwrap();

    ctrl.on_address_change("Bengaluru, Karnataka, Indi");
    assert_eq!(ctrl.selection(), None);
    assert_eq!(ctrl.state(), &QueryState::Debouncing);
    assert_eq!(MapView::for_selection(ctrl.selection()).marker, None);
}

#[tokio::test(start_paused = true)]
async fn clearing_text_after_selection_clears_it() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    type_and_answer(&mut ctrl, &mut lookups, "Bengaluru", vec![bengaluru()]).await;
    ctrl.select(0).unwrap();

    ctrl.on_address_change("");
    assert_eq!(ctrl.selection(), None);
    assert_eq!(ctrl.state(), &QueryState::Idle);
}

#[tokio::test(start_paused = true)]
async fn select_out_of_range_changes_nothing() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());
    type_and_answer(&mut ctrl, &mut lookups, "Bengaluru", vec![bengaluru()]).await;

    assert_eq!(ctrl.select(3), None);
    assert_eq!(ctrl.suggestions(), [bengaluru()]);
    assert_eq!(ctrl.selection(), None);
    assert_eq!(ctrl.state(), &QueryState::Success);
}

#[tokio::test(start_paused = true)]
async fn select_cancels_pending_timer() {
    let (geocoder, _lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.select_suggestion(&bengaluru());

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert_eq!(geocoder.calls(), 0);
    assert_eq!(ctrl.state(), &QueryState::Idle);
}
