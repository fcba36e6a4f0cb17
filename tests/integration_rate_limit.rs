mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use checkin::checkin_auth::Role;
use checkin::checkin_config::{RateLimitConfig, SlackConfig};
use common::{bearer_request, setup_test_app_with, token_for};
use serde_json::json;
use tower::ServiceExt;

/// One request per client, replenished far slower than the test runs.
fn strict_rate_limit_config() -> RateLimitConfig {
    RateLimitConfig {
        auth_replenish_secs: 60,
        auth_burst_size: 1,
    }
}

fn verify_request(client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/verify")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client_ip)
        .body(Body::from(json!({ "token": "garbage" }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_auth_rate_limit_exceeded() {
    let app = setup_test_app_with(SlackConfig::default(), strict_rate_limit_config());

    // Processed normally: rejected credential, not throttled
    let response = app.clone().oneshot(verify_request("192.168.1.100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.clone().oneshot(verify_request("192.168.1.100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_auth_rate_limit_is_per_client() {
    let app = setup_test_app_with(SlackConfig::default(), strict_rate_limit_config());

    let response = app.clone().oneshot(verify_request("10.0.0.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.clone().oneshot(verify_request("10.0.0.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_alerts_are_not_auth_rate_limited() {
    let app = setup_test_app_with(SlackConfig::default(), strict_rate_limit_config());
    let token = token_for(Role::Volunteer);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(bearer_request("GET", "/api/alerts/messages", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
