use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::AppState;
use crate::api::error::AppError;
use crate::api::response::ApiResponse;

use super::types::*;

#[utoipa::path(
    get,
    path = "/api/extensions/fixed",
    responses(
        (status = 200, description = "Fixed extensions with their blocked state", body = [FixedExtensionResponse])
    ),
    tag = "extensions"
)]
pub async fn list_fixed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FixedExtensionResponse>>>, AppError> {
    let entries: Vec<FixedExtensionResponse> = state
        .blocklist
        .list_fixed()
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::ok("Fetched fixed extensions", entries)))
}

#[utoipa::path(
    patch,
    path = "/api/extensions/fixed",
    request_body = UpdateFixedRequest,
    responses(
        (status = 200, description = "Blocked state updated", body = FixedExtensionResponse),
        (status = 400, description = "Malformed extension name"),
        (status = 404, description = "Not one of the fixed extensions")
    ),
    tag = "extensions"
)]
pub async fn update_fixed(
    State(state): State<AppState>,
    Json(req): Json<UpdateFixedRequest>,
) -> Result<Json<ApiResponse<FixedExtensionResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let updated = state.blocklist.set_fixed_blocked(&req.extension, req.blocked)?;
    let message = format!(
        "Fixed extension '{}' is now {}",
        updated.name,
        if updated.blocked { "blocked" } else { "allowed" }
    );

    Ok(Json(ApiResponse::ok(message, updated.into())))
}

#[utoipa::path(
    patch,
    path = "/api/extensions/fixed/bulk",
    params(
        ("blocked" = bool, Query, description = "Target blocked state for every fixed extension")
    ),
    responses(
        (status = 200, description = "All fixed extensions updated", body = BulkUpdateResponse)
    ),
    tag = "extensions"
)]
pub async fn bulk_update_fixed(
    State(state): State<AppState>,
    Query(query): Query<BulkUpdateQuery>,
) -> Result<Json<ApiResponse<BulkUpdateResponse>>, AppError> {
    let updated_count = state.blocklist.bulk_set_fixed(query.blocked);
    let message = format!(
        "{} fixed extensions set to blocked={}",
        updated_count, query.blocked
    );

    Ok(Json(ApiResponse::ok(message, BulkUpdateResponse { updated_count })))
}
