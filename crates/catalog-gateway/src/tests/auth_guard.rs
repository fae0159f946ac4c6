use super::harness::TestHarness;
use crate::{ApiRequest, GatewayError, CHECK_TOKEN_PATH, LOGIN_PATH, NOT_AUTHENTICATED};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn protected_call_without_credential_never_reaches_transport() {
    let h = TestHarness::new();

    for path in ["/api/tools", "/api/admin/all", "/api/tools/export"] {
        let result = h.gateway().execute(ApiRequest::get(path)).await;
        assert!(matches!(result, Err(GatewayError::Unauthenticated)));
    }

    assert_eq!(h.transport.call_count(), 0);
    assert_eq!(h.notifier.count(NOT_AUTHENTICATED), 3);
    assert_eq!(h.navigator.redirects(), vec![Duration::ZERO; 3]);
}

#[tokio::test]
async fn request_collapses_unauthenticated_to_none() {
    let h = TestHarness::new();
    assert!(h.gateway().request(ApiRequest::get("/api/tools")).await.is_none());
    assert_eq!(h.transport.call_count(), 0);
}

#[tokio::test]
async fn login_and_probe_paths_bypass_credential_check() {
    let h = TestHarness::new();

    h.gateway()
        .execute(ApiRequest::post(LOGIN_PATH).body(json!({ "name": "a" })))
        .await
        .unwrap();
    h.gateway()
        .execute(ApiRequest::get(CHECK_TOKEN_PATH))
        .await
        .unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.header("Authorization").is_none()));
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn bearer_and_content_type_are_attached() {
    let h = TestHarness::logged_in("secret-token");

    h.gateway()
        .execute(ApiRequest::post("/api/tools").body(json!({ "name": "Cargo" })))
        .await
        .unwrap();

    let request = h.transport.last_request().unwrap();
    assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(r#"{"name":"Cargo"}"#));
}

#[tokio::test]
async fn header_overrides_replace_defaults() {
    let h = TestHarness::logged_in("secret-token");

    h.gateway()
        .execute(ApiRequest::get("/api/tools").header("content-type", "text/plain"))
        .await
        .unwrap();

    let request = h.transport.last_request().unwrap();
    let content_types: Vec<_> = request
        .headers
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
        .collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(request.header("Content-Type"), Some("text/plain"));
    assert_eq!(request.header("Authorization"), Some("Bearer secret-token"));
}
