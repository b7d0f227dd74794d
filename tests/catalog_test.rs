//! Event catalog integration tests

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use eventhive_client::EventHiveError;
use helpers::*;

#[tokio::test]
async fn full_catalog_preserves_server_order() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .mount(&h.server)
        .await;

    let events = h.services.catalog_service.list_events(None).await.unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e-1", "e-2", "e-3"]);
}

#[tokio::test]
async fn search_results_are_id_subset_of_full_catalog() {
    let h = harness().await;

    // The search mock is mounted first so it takes priority for
    // requests carrying the query parameter.
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("search", "Conference"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(
            "e-1",
            "Rust Conference 2025",
            "2025-06-01",
            "Tech Hub, San Francisco",
            "A technology conference about systems programming.",
        )])))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .mount(&h.server)
        .await;

    let all = h.services.catalog_service.list_events(None).await.unwrap();
    let filtered = h
        .services
        .catalog_service
        .list_events(Some("Conference"))
        .await
        .unwrap();

    assert!(!filtered.is_empty());
    for event in &filtered {
        assert!(all.iter().any(|e| e.id == event.id));
    }
}

#[tokio::test]
async fn blank_search_fetches_full_catalog() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog()))
        .mount(&h.server)
        .await;

    let events = h
        .services
        .catalog_service
        .list_events(Some("   "))
        .await
        .unwrap();
    assert_eq!(events.len(), 3);

    // The request must not carry a search parameter at all
    let requests = h.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn get_event_maps_missing_id_to_not_found() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/events/e-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_json("Event not found")))
        .mount(&h.server)
        .await;

    let result = h.services.catalog_service.get_event("e-404").await;
    assert_matches!(result, Err(EventHiveError::NotFound(_)));
}

#[tokio::test]
async fn registration_count_reads_count_field() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/registrations/e-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 5,
            "registrations": []
        })))
        .mount(&h.server)
        .await;

    let count = h
        .services
        .catalog_service
        .registration_count("e-1")
        .await
        .unwrap();
    assert_eq!(count, 5);
}
