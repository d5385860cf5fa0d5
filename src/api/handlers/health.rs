use crate::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub custom_extensions: usize,
    pub custom_extension_limit: usize,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health and registry occupancy", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        custom_extensions: state.blocklist.custom_count(),
        custom_extension_limit: state.blocklist.custom_limit(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
