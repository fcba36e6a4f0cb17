use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_recent_messages, send_alert};
use crate::state::AppState;

pub fn init_alerts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_alert))
        .route("/messages", get(get_recent_messages))
}
