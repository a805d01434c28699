use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use referral_accounts::domain::repository::TokenIssuer;
use referral_accounts::router::build_router;
use referral_accounts::state::AppState;

use crate::helpers::TEST_JWT_SECRET;

/// Router over a disconnected database: only paths that fail before
/// touching storage are exercised here.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: 3600,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

#[tokio::test]
async fn should_answer_health_checks() {
    let server = server();
    server.get("/healthz").await.assert_status(StatusCode::OK);
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_attach_request_id() {
    let response = server().get("/healthz").await;

    let id = response.header("x-request-id");
    assert!(id.to_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn should_return_field_errors_for_empty_registration() {
    let response = server().post("/register").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body.get("kind").is_none());
    for field in [
        "name",
        "email",
        "password",
        "phone",
        "birthdate",
        "gender",
        "address",
    ] {
        assert!(body[field].is_array(), "missing error for {field}");
    }
}

#[tokio::test]
async fn should_reject_non_json_body() {
    let response = server()
        .post("/register")
        .text("{\"name\":")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MALFORMED_BODY");
}

#[tokio::test]
async fn should_report_non_string_value_as_field_error() {
    let response = server()
        .post("/register")
        .json(&json!({ "name": "Sari", "phone": 812345 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["phone"][0], "The phone must be a string.");
    assert_eq!(body["email"][0], "The email field is required.");
    assert!(body.get("name").is_none());
}

#[tokio::test]
async fn should_reject_login_without_credentials() {
    let response = server().post("/login").json(&json!({ "email": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["email"][0], "The email field is required.");
    assert_eq!(body["password"][0], "The password field is required.");
}

#[tokio::test]
async fn should_reject_verify_phone_without_code() {
    let response = server()
        .post("/verify-phone")
        .json(&json!({ "phone": "081234567890" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["verification_code"].is_array());
    assert!(body.get("phone").is_none());
}

#[tokio::test]
async fn should_reject_current_user_without_token() {
    let response = server().get("/user").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_reject_current_user_with_foreign_token() {
    let foreign = referral_accounts::infra::token::JwtTokenIssuer {
        secret: "someone-elses-secret".to_owned(),
        ttl_secs: 3600,
    }
    .issue(Uuid::now_v7())
    .unwrap();
    let (name, value) = bearer(&foreign.token);

    let response = server().get("/user").add_header(name, value).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
