// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Filling the create-event form with a picked location.

use evently_core::{
    EventDraft, MapView, PAYLOAD_FILE_NAME, SelectedLocation, Theme, ThemeStore, TileCoord, Update,
};

use crate::common::{FakeGeocoder, bengaluru, controller, unnamed_road};

#[tokio::test(start_paused = true)]
async fn picked_location_flows_into_payload() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    let mut draft = EventDraft {
        title: "Rooftop Jam".to_string(),
        start: "2025-06-01T18:00".to_string(),
        end: "2025-06-01T22:00".to_string(),
        ..Default::default()
    };

    ctrl.on_address_change("Bengaluru");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { .. })));
    lookups
        .recv()
        .await
        .unwrap()
        .respond(Ok(vec![bengaluru(), unnamed_road()]));
    ctrl.tick().await.unwrap();

    let selected = ctrl.select(0).unwrap();
    draft.location = ctrl.query().to_string();
    draft.location_point = Some(selected);

    let view = MapView::for_selection(draft.location_point.as_ref());
    assert_eq!(view.marker.map(|p| (p.lat, p.lng)), Some((12.97, 77.59)));
    assert_eq!(view.center_tile().z, 15);

    let mut themes = ThemeStore::new();
    themes.set_theme(Theme::Ocean);
    draft.theme = themes.selected();

    let payload = draft.submit().unwrap();
    assert_eq!(payload.location, "Bengaluru, Karnataka, India");
    assert_eq!(payload.latitude, Some(12.97));
    assert_eq!(payload.longitude, Some(77.59));
    assert_eq!(payload.theme, Some(Theme::Ocean));

    let dir = tempfile::tempdir().unwrap();
    let path = payload.export(dir.path()).await.unwrap();
    assert_eq!(path.file_name().unwrap(), PAYLOAD_FILE_NAME);

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
    assert_eq!(json["location"], "Bengaluru, Karnataka, India");
    assert_eq!(json["latitude"], 12.97);
    assert_eq!(json["theme"], "Ocean");
    assert_eq!(json["ticketsFree"], true);
}

#[tokio::test(start_paused = true)]
async fn editing_location_drops_coordinates_from_payload() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    lookups.recv().await.unwrap().respond(Ok(vec![bengaluru()]));
    ctrl.tick().await.unwrap();
    ctrl.select(0).unwrap();

    ctrl.on_address_change("Bengaluru, Karnataka");
    let draft = EventDraft {
        title: "Rooftop Jam".to_string(),
        start: "2025-06-01T18:00".to_string(),
        end: "2025-06-01T22:00".to_string(),
        location: ctrl.query().to_string(),
        location_point: ctrl.selection().cloned(),
        ..Default::default()
    };

    let payload = draft.submit().unwrap();
    assert_eq!(payload.location, "Bengaluru, Karnataka");
    assert_eq!(payload.latitude, None);
    assert_eq!(
        MapView::for_selection(draft.location_point.as_ref()).center_tile(),
        TileCoord { z: 5, x: 22, y: 14 }
    );
}

#[test]
fn label_only_location_is_kept_as_text() {
    let draft = EventDraft {
        title: "Picnic".to_string(),
        start: "2025-06-01 10:00".to_string(),
        end: "2025-06-01 12:00".to_string(),
        location: "Unnamed Road".to_string(),
        location_point: Some(SelectedLocation::label_only("Unnamed Road")),
        ..Default::default()
    };

    let payload = draft.submit().unwrap();
    assert_eq!(payload.location, "Unnamed Road");
    assert_eq!(payload.latitude, None);
    assert!(payload.preview().to_string().contains("Location: Unnamed Road"));
}
