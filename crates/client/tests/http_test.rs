mod common;

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use courtbook_client::http::{REQUEST_ID_HEADER, error_message};
use courtbook_core::errors::BookingError;
use courtbook_core::session::Role;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use common::{client, client_with_timeout, signed_in, signed_out, spawn_api};

async fn whoami(headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    Json(json!({
        "authorization": header(AUTHORIZATION.as_str()),
        "requestId": header(REQUEST_ID_HEADER),
        "cookie": header(COOKIE.as_str()),
    }))
}

fn api() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route(
            "/cookie",
            get(|| async { ([(SET_COOKIE, "sid=abc123; Path=/")], Json(json!({}))) }),
        )
        .route(
            "/missing",
            get(|| async {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Court 9 not found" })))
            }),
        )
        .route(
            "/expired",
            get(|| async {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" })))
            }),
        )
        .route(
            "/forbidden",
            get(|| async { StatusCode::FORBIDDEN.into_response() }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        )
        .route("/garbage", get(|| async { "definitely not json" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({}))
            }),
        )
        .route("/things/1", delete(|| async { StatusCode::NO_CONTENT }))
}

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_in("h.p.s", Role::Customer));

    let echoed: Value = http.get("/whoami").await.unwrap();

    assert_eq!(echoed["authorization"], "Bearer h.p.s");
    assert!(echoed["requestId"].as_str().is_some_and(|id| id.len() == 36));
}

#[tokio::test]
async fn test_no_authorization_when_signed_out() {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_out());

    let echoed: Value = http.get("/whoami").await.unwrap();

    assert_eq!(echoed["authorization"], Value::Null);
}

#[tokio::test]
async fn test_token_follows_session_changes() {
    let base_url = spawn_api(api()).await;
    let session = signed_out();
    let http = client(&base_url, session.clone());

    session.login("new.token.here", Role::Admin).unwrap();
    let echoed: Value = http.get("/whoami").await.unwrap();
    assert_eq!(echoed["authorization"], "Bearer new.token.here");

    session.logout().unwrap();
    let echoed: Value = http.get("/whoami").await.unwrap();
    assert_eq!(echoed["authorization"], Value::Null);
}

#[tokio::test]
async fn test_cookies_are_sent_back() {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_out());

    let _: Value = http.get("/cookie").await.unwrap();
    let echoed: Value = http.get("/whoami").await.unwrap();

    assert_eq!(echoed["cookie"], "sid=abc123");
}

#[rstest]
#[case("/missing", "Resource not found: Court 9 not found")]
#[case("/expired", "Authentication error: Token expired")]
#[case("/forbidden", "Authorization error: Forbidden")]
#[case("/broken", "Server error (502): upstream down")]
#[tokio::test]
async fn test_error_statuses_are_mapped(#[case] path: &str, #[case] expected: &str) {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_out());

    let err = http.get::<Value>(path).await.unwrap_err();

    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_undecodable_body_is_a_server_error() {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_out());

    let err = http.get::<Vec<i64>>("/garbage").await.unwrap_err();

    assert!(matches!(err, BookingError::Server { status: 200, .. }));
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let base_url = spawn_api(api()).await;
    let http = client(&base_url, signed_out());

    http.delete("/things/1").await.unwrap();
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let base_url = spawn_api(api()).await;
    let http = client_with_timeout(&base_url, 1);

    let err = http.get::<Value>("/slow").await.unwrap_err();

    assert!(matches!(err, BookingError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Bind and drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = client(&format!("http://{addr}"), signed_out());
    let err = http.get::<Value>("/whoami").await.unwrap_err();

    assert!(matches!(err, BookingError::Network(_)), "got {err:?}");
}

#[rstest]
#[case(StatusCode::NOT_FOUND, r#"{"error":"gone"}"#, "gone")]
#[case(StatusCode::BAD_REQUEST, r#"{"message":"bad date"}"#, "bad date")]
#[case(StatusCode::BAD_REQUEST, r#"{"detail":"x"}"#, r#"{"detail":"x"}"#)]
#[case(StatusCode::INTERNAL_SERVER_ERROR, "  oops \n", "oops")]
#[case(StatusCode::SERVICE_UNAVAILABLE, "", "Service Unavailable")]
fn test_error_message(#[case] status: StatusCode, #[case] body: &str, #[case] expected: &str) {
    let status = reqwest::StatusCode::from_u16(status.as_u16()).unwrap();
    assert_eq!(error_message(status, body), expected);
}
