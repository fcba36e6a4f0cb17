mod common;

use axum::http::StatusCode;
use checkin::checkin_auth::{IdentityClaims, Role, TOKEN_TTL_MILLIS, issue_token_at};
use checkin::checkin_config::TokenConfig;
use common::{
    anonymous_request, bearer_request, body_json, json_request, setup_test_app, test_token_config,
};
use serde_json::json;
use tower::ServiceExt;

async fn issue(app: &axum::Router, body: serde_json::Value) -> axum::response::Response {
    app.clone()
        .oneshot(json_request("POST", "/api/auth/token", body))
        .await
        .unwrap()
}

async fn verify(app: &axum::Router, token: &str) -> axum::response::Response {
    app.clone()
        .oneshot(json_request("POST", "/api/auth/verify", json!({ "token": token })))
        .await
        .unwrap()
}

async fn assert_rejected(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_issue_then_verify_round_trip() {
    let app = setup_test_app();

    let response = issue(
        &app,
        json!({ "firstName": "Ann", "lastName": "Lee", "role": "admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert!(token.contains('.'));

    let response = verify(&app, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "firstName": "Ann", "lastName": "Lee", "role": "admin" })
    );
}

#[tokio::test]
async fn test_issue_normalises_role_to_lowercase() {
    let app = setup_test_app();

    let body = body_json(
        issue(
            &app,
            json!({ "firstName": "Jo", "lastName": "Park", "role": "TeamLead" }),
        )
        .await,
    )
    .await;
    let token = body["token"].as_str().unwrap();

    let claims = body_json(verify(&app, token).await).await;
    assert_eq!(claims["role"], "teamlead");
}

#[tokio::test]
async fn test_issue_missing_field_is_bad_request() {
    let app = setup_test_app();

    let response = issue(&app, json!({ "lastName": "Lee", "role": "admin" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "firstName is required");
}

#[tokio::test]
async fn test_issue_empty_field_is_bad_request() {
    let app = setup_test_app();

    let response = issue(
        &app,
        json!({ "firstName": "Ann", "lastName": "", "role": "admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "lastName is required");
}

#[tokio::test]
async fn test_issue_unknown_role_is_bad_request() {
    let app = setup_test_app();

    let response = issue(
        &app,
        json!({ "firstName": "Ann", "lastName": "Lee", "role": "owner" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_issue_rejects_colon_in_name() {
    let app = setup_test_app();

    let response = issue(
        &app,
        json!({ "firstName": "Ann:admin", "lastName": "Lee", "role": "volunteer" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "firstName must not contain ':'");
}

#[tokio::test]
async fn test_verify_garbage_is_unauthorized() {
    let app = setup_test_app();

    for token in ["garbage", "", ".", "abc.!!!", "deadbeef.QW5uOkxlZTphZG1pbjox"] {
        assert_rejected(verify(&app, token).await).await;
    }
}

#[tokio::test]
async fn test_verify_without_token_is_unauthorized() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/verify", json!({})))
        .await
        .unwrap();
    assert_rejected(response).await;
}

#[tokio::test]
async fn test_verify_non_json_body_is_unauthorized() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(anonymous_request("POST", "/api/auth/verify"))
        .await
        .unwrap();
    assert_rejected(response).await;
}

#[tokio::test]
async fn test_verify_expired_token_is_unauthorized() {
    let app = setup_test_app();
    let issued_at = chrono::Utc::now().timestamp_millis() - TOKEN_TTL_MILLIS - 1_000;
    let token = issue_token_at(
        &IdentityClaims::new("Ann", "Lee", Role::Admin),
        &test_token_config(),
        issued_at,
    );

    assert_rejected(verify(&app, &token).await).await;
}

#[tokio::test]
async fn test_verify_rejects_token_from_other_secret() {
    let app = setup_test_app();
    let other = TokenConfig::new("some-other-secret").unwrap();
    let token = issue_token_at(
        &IdentityClaims::new("Ann", "Lee", Role::Admin),
        &other,
        chrono::Utc::now().timestamp_millis(),
    );

    assert_rejected(verify(&app, &token).await).await;
}

#[tokio::test]
async fn test_verify_rejects_escalated_role() {
    use data_encoding::BASE64;

    let app = setup_test_app();
    let now = chrono::Utc::now().timestamp_millis();
    let token = issue_token_at(
        &IdentityClaims::new("Ann", "Lee", Role::Volunteer),
        &test_token_config(),
        now,
    );

    let (signature, _) = token.split_once('.').unwrap();
    let forged_payload = BASE64.encode(format!("Ann:Lee:admin:{}", now).as_bytes());
    let forged = format!("{}.{}", signature, forged_payload);

    assert_rejected(verify(&app, &forged).await).await;
}

#[tokio::test]
async fn test_session_returns_bearer_claims() {
    let app = setup_test_app();
    let token = issue_token_at(
        &IdentityClaims::new("Jo", "Park", Role::Volunteer),
        &test_token_config(),
        chrono::Utc::now().timestamp_millis(),
    );

    let response = app
        .clone()
        .oneshot(bearer_request("GET", "/api/auth/session", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "firstName": "Jo", "lastName": "Park", "role": "volunteer" })
    );
}

#[tokio::test]
async fn test_session_without_bearer_is_unauthorized() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(anonymous_request("GET", "/api/auth/session"))
        .await
        .unwrap();
    assert_rejected(response).await;
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(anonymous_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/api/auth/token"].is_object());
}
