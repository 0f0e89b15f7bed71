// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Failed and rejected lookups.

use std::sync::Arc;
use std::time::Duration;

use evently_core::{
    AutocompleteController, GeoapifyClient, GeoapifyConfig, GeocodeError, QueryState, Update,
};
use tokio::time::advance;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{FakeGeocoder, controller, fast_options, numbered};

#[tokio::test(start_paused = true)]
async fn missing_api_key_is_reported_without_lookup() {
    let (geocoder, mut lookups) = FakeGeocoder::unconfigured();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Rejected(GeocodeError::MissingApiKey)
    );

    let err = ctrl.error().unwrap();
    assert!(err.is_configuration());
    assert_eq!(ctrl.state(), &QueryState::Error(GeocodeError::MissingApiKey));
    assert!(ctrl.suggestions().is_empty());

    advance(Duration::from_secs(5)).await;
    assert!(ctrl.pump().is_empty());
    assert!(lookups.try_recv().is_err());
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn lookup_failure_clears_suggestions() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    let lookup = lookups.recv().await.unwrap();
    lookup.respond(Err(GeocodeError::Http("connection reset".to_string())));

    let update = ctrl.tick().await.unwrap();
    assert_eq!(
        update,
        Update::Failed {
            seq: 1,
            error: GeocodeError::Http("connection reset".to_string())
        }
    );
    assert!(ctrl.suggestions().is_empty());
    assert!(!ctrl.error().unwrap().is_configuration());
}

#[tokio::test(start_paused = true)]
async fn editing_clears_error() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Bengaluru");
    ctrl.tick().await.unwrap();
    lookups
        .recv()
        .await
        .unwrap()
        .respond(Err(GeocodeError::InvalidResponse("eof".to_string())));
    ctrl.tick().await.unwrap();
    assert!(ctrl.error().is_some());

    ctrl.on_address_change("Bengaluru ");
    assert_eq!(ctrl.error(), None);
    assert_eq!(ctrl.state(), &QueryState::Debouncing);
}

#[tokio::test(start_paused = true)]
async fn results_are_capped_at_limit() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("MG Road");
    ctrl.tick().await.unwrap();
    lookups.recv().await.unwrap().respond(Ok(numbered(9)));

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 1, count: 6 }
    );
    assert_eq!(ctrl.suggestions(), &numbered(9)[..6]);
}

#[tokio::test(start_paused = true)]
async fn empty_result_is_success() {
    let (geocoder, mut lookups) = FakeGeocoder::new();
    let mut ctrl = controller(geocoder.clone());

    ctrl.on_address_change("Xyzzy");
    ctrl.tick().await.unwrap();
    lookups.recv().await.unwrap().respond(Ok(Vec::new()));

    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 1, count: 0 }
    );
    assert_eq!(ctrl.state(), &QueryState::Success);
}

#[tokio::test]
async fn unauthorized_response_surfaces_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/autocomplete"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid apiKey"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeoapifyClient::new(GeoapifyConfig {
        api_key: Some("wrong-key".to_string()),
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap();
    let mut ctrl = AutocompleteController::new(Arc::new(client), fast_options());

    ctrl.on_address_change("Bengaluru");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { seq: 1, .. })));

    let Some(Update::Failed { seq: 1, error }) = ctrl.tick().await else {
        panic!("expected the lookup to fail");
    };
    assert_eq!(error.status(), Some(401));
    assert!(error.to_string().contains("401"));
    assert!(ctrl.suggestions().is_empty());
    assert!(matches!(ctrl.state(), QueryState::Error(_)));
}

#[tokio::test]
async fn client_without_key_never_hits_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = GeoapifyClient::new(GeoapifyConfig {
        api_key: None,
        base_url: mock_server.uri(),
        ..Default::default()
    })
    .unwrap();
    let mut ctrl = AutocompleteController::new(Arc::new(client), fast_options());

    ctrl.on_address_change("Bengaluru");
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Rejected(GeocodeError::MissingApiKey)
    );
    assert!(ctrl.error().unwrap().is_configuration());
}
