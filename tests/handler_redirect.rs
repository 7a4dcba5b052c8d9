mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::future::IntoFuture;
use std::sync::Arc;
use scenario_shortener::domain::entities::{ScenarioList, ShortCode, StoredEntry};
use scenario_shortener::domain::repositories::EntryStore;
use scenario_shortener::infrastructure::store::MemoryStore;

async fn seed(store: &MemoryStore, code: &str, url: &str) {
    store
        .put(
            &ShortCode::from(code),
            &StoredEntry::new(url, ScenarioList::default()),
            common::TTL,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    seed(&store, "abc123", "?term=36&servers=8").await;

    let server = TestServer::new(common::app(state)).unwrap();

    let response = server
        .get("/s/abc123")
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://calc.example.com?term=36&servers=8"
    );
}

#[tokio::test]
async fn test_redirect_legacy_aliases() {
    let (state, store) = common::create_test_state();
    seed(&store, "Legacy", "?term=1").await;

    let server = TestServer::new(common::app(state)).unwrap();

    for path in ["/redirect/Legacy", "/api/Legacy"] {
        let response = server
            .get(path)
            .add_header("Host", common::TEST_HOST)
            .await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "https://calc.example.com?term=1");
    }
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    let response = server
        .get("/s/nope00")
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found or expired");
    assert!(json["note"].as_str().unwrap().contains("7 days"));
}

#[tokio::test]
async fn test_redirect_missing_code() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    for path in ["/s", "/redirect"] {
        let response = server
            .get(path)
            .add_header("Host", common::TEST_HOST)
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"],
            "Invalid code"
        );
    }
}

#[tokio::test]
async fn test_redirect_wrong_method() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    let response = server
        .post("/s/abc123")
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::app(state)).unwrap();

    let created = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({
            "params": { "term": 24, "utilization": 0.85, "decay": 1.0 },
            "scenarios": [{ "a": 1 }]
        }))
        .await;
    created.assert_status_ok();

    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .get(&format!("/s/{code}"))
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://calc.example.com?term=24&decay=1&utilization=0.85&scenarios=%5B%7B%22a%22%3A1%7D%5D"
    );
}

#[tokio::test]
async fn test_redirect_uses_request_origin() {
    let (state, store) = common::create_test_state();
    seed(&store, "Org001", "?term=2").await;

    let server = TestServer::new(common::app(state)).unwrap();

    let response = server
        .get("/api/Org001")
        .add_header("Host", "localhost:3000")
        .add_header("X-Forwarded-Proto", "http")
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "http://localhost:3000?term=2");
}

#[tokio::test]
async fn test_redirect_served_from_fallback() {
    let secondary = Arc::new(MemoryStore::new());
    let server = TestServer::new(common::app(common::create_degraded_state(secondary.clone()))).unwrap();

    let created = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "params": { "servers": 3 } }))
        .await;
    created.assert_status_ok();

    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(secondary.len(), 1);

    let response = server
        .get(&format!("/s/{code}"))
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://calc.example.com?servers=3");
}

#[tokio::test]
async fn test_colliding_code_last_write_wins() {
    let (state, _store) = common::create_fixed_code_state("SAME01");
    let server = TestServer::new(common::app(state)).unwrap();

    for term in [1, 2] {
        server
            .post("/shorten")
            .add_header("Host", common::TEST_HOST)
            .json(&json!({ "params": { "term": term } }))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/s/SAME01")
        .add_header("Host", common::TEST_HOST)
        .await;

    assert_eq!(response.header("location"), "https://calc.example.com?term=2");
}

#[tokio::test]
async fn test_concurrent_colliding_shortens() {
    let (state, store) = common::create_fixed_code_state("RACE02");
    let server = TestServer::new(common::app(state)).unwrap();

    let first = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "params": { "term": 1 } }));
    let second = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "params": { "term": 2 } }));

    let (first, second) = tokio::join!(first.into_future(), second.into_future());
    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(store.len(), 1);

    let location = server
        .get("/s/RACE02")
        .add_header("Host", common::TEST_HOST)
        .await
        .header("location");
    let location = location.to_str().unwrap();

    assert!(
        location == "https://calc.example.com?term=1"
            || location == "https://calc.example.com?term=2"
    );
}

#[tokio::test]
async fn test_redirect_unavailable_when_all_stores_fail() {
    let server = TestServer::new(common::app(common::create_unavailable_state())).unwrap();

    let response = server
        .get("/s/abc123")
        .add_header("Host", common::TEST_HOST)
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Storage unavailable"
    );
}
