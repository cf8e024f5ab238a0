//! HTTP endpoints.
//!
//! - `/v1/events/resource-checked` : ingest one lifecycle event (202)
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use keel_telemetry_core::event::ResourceLifecycleEvent;

use crate::app_state::AppState;

pub async fn resource_checked(
    State(state): State<AppState>,
    Json(event): Json<ResourceLifecycleEvent>,
) -> impl IntoResponse {
    tracing::debug!(resource_id = %event.id(), state = %event.state(), "resource checked");
    state.publisher().publish(&event);
    StatusCode::ACCEPTED
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
