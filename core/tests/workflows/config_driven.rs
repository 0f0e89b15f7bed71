// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Controllers built from a TOML configuration.

use std::sync::Arc;

use evently_core::{AutocompleteController, Config, GeoapifyClient, Update};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{
  "features": [
    {
      "properties": {
        "place_id": "abc",
        "formatted": "MG Road, Bengaluru, Karnataka, India",
        "lat": 12.975,
        "lon": 77.606,
        "city": "Bengaluru"
      }
    }
  ]
}"#;

#[tokio::test]
async fn configured_controller_queries_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/autocomplete"))
        .and(query_param("text", "MG Road"))
        .and(query_param("limit", "4"))
        .and(query_param("apiKey", "from-file"))
        .and(query_param("filter", "countrycode:in"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config: Config = toml::from_str(&format!(
        r#"
[geocode]
api_key = "from-file"
base_url = "{}"
country = "IN"

[autocomplete]
debounce_ms = 10
limit = 4
"#,
        mock_server.uri()
    ))
    .unwrap();
    config.normalize().unwrap();

    let client = GeoapifyClient::new(config.geocode.service.clone()).unwrap();
    let mut ctrl = AutocompleteController::new(Arc::new(client), config.autocomplete_options());

    ctrl.on_address_change("MG Road");
    assert!(matches!(ctrl.tick().await, Some(Update::Dispatched { .. })));
    assert_eq!(
        ctrl.tick().await.unwrap(),
        Update::Received { seq: 1, count: 1 }
    );

    let selected = ctrl.select(0).unwrap();
    assert_eq!(selected.formatted, "MG Road, Bengaluru, Karnataka, India");
    assert_eq!(selected.lat, Some(12.975));
    assert_eq!(selected.lng, Some(77.606));
}
