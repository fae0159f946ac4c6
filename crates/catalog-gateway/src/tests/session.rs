use super::harness::{TestHarness, REDIRECT_DELAY};
use crate::{NoticeLevel, CHECK_TOKEN_PATH, LOGIN_FAILED, LOGIN_PATH};
use serde_json::json;

fn login_ok(token: &str) -> String {
    json!({ "success": true, "message": "ok", "data": { "token": token } }).to_string()
}

#[tokio::test]
async fn login_stores_credential() {
    let h = TestHarness::new();
    h.transport.respond(200, login_ok("fresh"));

    let response = h.api.login("admin", "pw").await;

    assert!(response.success);
    assert_eq!(response.token(), Some("fresh"));
    assert_eq!(h.credential(), Some("fresh".to_string()));

    let request = h.transport.last_request().unwrap();
    assert_eq!(request.path, LOGIN_PATH);
    assert_eq!(
        h.transport.last_body().unwrap(),
        json!({ "name": "admin", "password": "pw" })
    );
    assert_eq!(h.notifier.messages(), vec!["Logged in".to_string()]);
}

#[tokio::test]
async fn relogin_leaves_exactly_one_credential() {
    let h = TestHarness::logged_in("stale");
    h.transport.respond(200, login_ok("fresh"));

    h.api.login("admin", "pw").await;

    assert_eq!(h.credential(), Some("fresh".to_string()));
    assert_eq!(h.storage.len(), 1);
}

#[tokio::test]
async fn rejected_login_leaves_storage_untouched() {
    let h = TestHarness::logged_in("existing");
    h.transport
        .respond(200, json!({ "success": false, "message": "wrong password" }).to_string());

    let response = h.api.login("admin", "bad").await;

    assert!(!response.success);
    assert_eq!(response.message, "wrong password");
    assert_eq!(h.credential(), Some("existing".to_string()));
    assert_eq!(h.storage.deletes(), 0);
    assert_eq!(h.notifier.messages(), vec!["wrong password".to_string()]);
    assert_eq!(h.notifier.levels(), vec![NoticeLevel::Error]);
}

#[tokio::test]
async fn login_http_failure_uses_server_message() {
    let h = TestHarness::new();
    h.transport.respond(401, r#"{"message":"user not found"}"#);

    let response = h.api.login("ghost", "pw").await;

    assert!(!response.success);
    assert_eq!(response.message, "user not found");
    assert_eq!(h.transport.call_count(), 1);
    assert_eq!(h.notifier.messages(), vec!["user not found".to_string()]);
    assert_eq!(h.credential(), None);
}

#[tokio::test]
async fn login_network_failure_reports_generic_message() {
    let h = TestHarness::new();
    h.transport.fail_network();

    let response = h.api.login("admin", "pw").await;

    assert_eq!(response.message, LOGIN_FAILED);
    assert_eq!(h.notifier.messages(), vec![LOGIN_FAILED.to_string()]);
}

#[tokio::test]
async fn success_without_token_is_a_failure() {
    let h = TestHarness::new();
    h.transport.respond(200, r#"{"success":true,"message":""}"#);

    let response = h.api.login("admin", "pw").await;

    assert!(!response.success);
    assert_eq!(response.message, LOGIN_FAILED);
    assert_eq!(h.credential(), None);
}

#[tokio::test]
async fn logout_clears_and_redirects() {
    let h = TestHarness::logged_in("t");

    assert!(h.api.logout().await);
    assert!(!h.api.logout().await);

    assert_eq!(h.credential(), None);
    assert_eq!(h.navigator.redirects(), vec![REDIRECT_DELAY, REDIRECT_DELAY]);
    assert_eq!(h.notifier.count("Logged out"), 2);
    assert_eq!(h.transport.call_count(), 0);
}

#[tokio::test]
async fn check_login_without_credential_skips_network() {
    let h = TestHarness::new();

    assert!(!h.api.check_login().await);
    assert_eq!(h.transport.call_count(), 0);
    assert!(h.notifier.notices().is_empty());
    assert!(h.navigator.redirects().is_empty());
}

#[tokio::test]
async fn check_login_accepts_valid_session() {
    let h = TestHarness::logged_in("t");

    assert!(h.api.check_login().await);

    let request = h.transport.last_request().unwrap();
    assert_eq!(request.path, CHECK_TOKEN_PATH);
    assert_eq!(request.header("Authorization"), Some("Bearer t"));
}

#[tokio::test]
async fn check_login_failures_are_silent() {
    let h = TestHarness::logged_in("t");
    h.transport.respond(401, "");
    h.transport.respond(401, "");
    assert!(!h.api.check_login().await);

    h.transport.respond(500, r#"{"message":"boom"}"#);
    assert!(!h.api.check_login().await);

    h.transport.fail_network();
    assert!(!h.api.check_login().await);

    assert!(h.notifier.notices().is_empty());
    assert!(h.navigator.redirects().is_empty());
    assert_eq!(h.credential(), Some("t".to_string()));
}
