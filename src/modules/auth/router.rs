use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_session, issue_token, verify_token};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/token", post(issue_token))
        .route("/verify", post(verify_token))
        .route("/session", get(get_session))
}
