use super::harness::{TestHarness, REDIRECT_DELAY};
use crate::{
    ApiRequest, GatewayError, CHECK_TOKEN_PATH, LOGIN_PATH, NETWORK_ERROR, SESSION_EXPIRED,
};
use serde_json::json;

#[tokio::test]
async fn single_401_is_absorbed_by_retry() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");
    h.transport.respond(200, r#"{"tools":[]}"#);

    let value = h
        .gateway()
        .execute(ApiRequest::get("/api/tools"))
        .await
        .unwrap();

    assert_eq!(value, json!({ "tools": [] }));
    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(h.credential(), Some("token-1".to_string()));
    assert!(h.notifier.notices().is_empty());
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn retry_resends_the_same_request() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");

    h.gateway()
        .execute(ApiRequest::put("/api/tools/3").body(json!({ "name": "x" })))
        .await
        .unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn double_401_expires_session_once() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");
    h.transport.respond(401, "");

    let result = h.gateway().execute(ApiRequest::get("/api/admin/all")).await;

    assert!(matches!(result, Err(GatewayError::SessionExpired)));
    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(h.credential(), None);
    assert_eq!(h.storage.deletes(), 1);
    assert_eq!(h.notifier.count(SESSION_EXPIRED), 1);
    assert_eq!(h.notifier.notices().len(), 1);
    assert_eq!(h.navigator.redirects(), vec![REDIRECT_DELAY]);
}

#[tokio::test]
async fn probe_double_401_is_silent() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");
    h.transport.respond(401, "");

    let result = h
        .gateway()
        .execute(ApiRequest::get(CHECK_TOKEN_PATH))
        .await;

    assert!(matches!(result, Err(GatewayError::SessionExpired)));
    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(h.credential(), Some("token-1".to_string()));
    assert!(h.notifier.notices().is_empty());
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn login_401_is_not_retried() {
    let h = TestHarness::new();
    h.transport.respond(401, r#"{"message":"bad password"}"#);

    let result = h
        .gateway()
        .execute(ApiRequest::post(LOGIN_PATH).body(json!({})))
        .await;

    match result {
        Err(GatewayError::RequestFailed { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad password");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(h.transport.call_count(), 1);
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn retry_that_fails_differently_is_a_plain_failure() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");
    h.transport.respond(500, r#"{"message":"database locked"}"#);

    let result = h.gateway().execute(ApiRequest::get("/api/tools")).await;

    assert!(matches!(
        result,
        Err(GatewayError::RequestFailed { status: 500, .. })
    ));
    assert_eq!(h.credential(), Some("token-1".to_string()));
    assert_eq!(h.notifier.messages(), vec!["database locked".to_string()]);
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn network_failure_on_retry_keeps_session() {
    let h = TestHarness::logged_in("token-1");
    h.transport.respond(401, "");
    h.transport.fail_network();

    let result = h.gateway().execute(ApiRequest::get("/api/tools")).await;

    assert!(matches!(result, Err(GatewayError::Network(_))));
    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(h.credential(), Some("token-1".to_string()));
    assert_eq!(h.storage.deletes(), 0);
    assert_eq!(h.notifier.messages(), vec![NETWORK_ERROR.to_string()]);
    assert!(h.navigator.redirects().is_empty());
}
