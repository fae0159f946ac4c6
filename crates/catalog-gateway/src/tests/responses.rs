use super::harness::TestHarness;
use crate::{ApiRequest, GatewayError, NoticeLevel, NETWORK_ERROR, REQUEST_FAILED};
use serde_json::json;

#[tokio::test]
async fn empty_success_body_is_an_empty_object() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(204, "");

    let value = h
        .gateway()
        .execute(ApiRequest::delete("/api/tools/1"))
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn unparsable_success_body_is_an_empty_object() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(200, "OK");

    let value = h
        .gateway()
        .execute(ApiRequest::get("/api/tools"))
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn failure_notice_carries_server_message() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(400, r#"{"success":false,"message":"name is required"}"#);

    let result = h.gateway().execute(ApiRequest::post("/api/tools")).await;

    match result {
        Err(GatewayError::RequestFailed { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "name is required");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(h.notifier.messages(), vec!["name is required".to_string()]);
    assert_eq!(h.notifier.levels(), vec![NoticeLevel::Error]);
}

#[tokio::test]
async fn failure_without_message_uses_generic_notice() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(502, "<html>Bad Gateway</html>");

    let result = h.gateway().execute(ApiRequest::get("/api/tools")).await;

    assert!(matches!(
        result,
        Err(GatewayError::RequestFailed { status: 502, .. })
    ));
    assert_eq!(h.notifier.messages(), vec![REQUEST_FAILED.to_string()]);
}

#[tokio::test]
async fn network_failure_is_reported_not_propagated() {
    let h = TestHarness::logged_in("t");
    h.transport.fail_network();

    let value = h.gateway().request(ApiRequest::get("/api/tools")).await;

    assert!(value.is_none());
    assert_eq!(h.notifier.messages(), vec![NETWORK_ERROR.to_string()]);
    assert_eq!(h.credential(), Some("t".to_string()));
}

#[tokio::test]
async fn silent_requests_emit_no_failure_notices() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(500, r#"{"message":"boom"}"#);
    h.transport.fail_network();

    let first = h
        .gateway()
        .execute(ApiRequest::get("/api/tools").silent())
        .await;
    let second = h
        .gateway()
        .execute(ApiRequest::get("/api/tools").silent())
        .await;

    assert!(matches!(first, Err(GatewayError::RequestFailed { .. })));
    assert!(matches!(second, Err(GatewayError::Network(_))));
    assert!(h.notifier.notices().is_empty());
}
