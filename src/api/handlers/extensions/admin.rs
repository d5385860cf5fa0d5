use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::AppState;
use crate::api::error::AppError;
use crate::api::response::ApiResponse;

use super::types::*;

#[utoipa::path(
    post,
    path = "/api/extensions/reset",
    responses(
        (status = 200, description = "Custom tier emptied, fixed tier unblocked")
    ),
    tag = "extensions"
)]
pub async fn reset_all(State(state): State<AppState>) -> Result<Json<ApiResponse<()>>, AppError> {
    state.blocklist.reset();
    Ok(Json(ApiResponse::message("Blocklist reset to defaults")))
}

#[utoipa::path(
    post,
    path = "/api/extensions/test-data",
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Numbered test extensions created", body = SeedResponse),
        (status = 400, description = "Malformed body, or prefix cannot form valid tokens"),
        (status = 409, description = "Registry already full")
    ),
    tag = "extensions"
)]
pub async fn seed_test_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<SeedResponse>>, AppError> {
    // A bare POST seeds with the defaults. A body that is present but
    // does not parse is a client error, not a request for the defaults.
    let req = if body.is_empty() {
        SeedRequest::default()
    } else {
        serde_json::from_slice::<SeedRequest>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?
    };
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let created_count = state.blocklist.seed_test_data(&req.prefix, req.count)?;

    Ok(Json(ApiResponse::ok(
        format!("{} test extension(s) created", created_count),
        SeedResponse { created_count },
    )))
}
