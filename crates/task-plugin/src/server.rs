//! HTTP front end for the plugin.
//!
//! - `POST /requests/{name}` — raw host request body in, host response out
//! - `GET /health` — liveness

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::SlackTaskPlugin;

pub fn router(plugin: Arc<SlackTaskPlugin>) -> Router {
    Router::new()
        .route("/requests/{name}", post(handle_request))
        .route("/health", get(health_check))
        .with_state(plugin)
        .layer(TraceLayer::new_for_http())
}

async fn handle_request(
    State(plugin): State<Arc<SlackTaskPlugin>>,
    Path(name): Path<String>,
    body: String,
) -> impl IntoResponse {
    let response = plugin.handle(&name, &body).await;
    (response.code, Json(response.body))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
