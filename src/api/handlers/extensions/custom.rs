use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::api::error::AppError;
use crate::api::response::ApiResponse;
use crate::utils::validation::is_valid_extension_input;

use super::types::*;

#[utoipa::path(
    get,
    path = "/api/extensions/custom",
    responses(
        (status = 200, description = "Custom extensions, oldest first", body = [CustomExtensionResponse])
    ),
    tag = "extensions"
)]
pub async fn list_custom(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CustomExtensionResponse>>>, AppError> {
    let entries: Vec<CustomExtensionResponse> = state
        .blocklist
        .list_custom()
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ApiResponse::ok("Fetched custom extensions", entries)))
}

#[utoipa::path(
    post,
    path = "/api/extensions/custom",
    request_body = AddCustomRequest,
    responses(
        (status = 200, description = "Batch registered, rejections itemized", body = AddCustomResponse),
        (status = 400, description = "Empty or malformed input"),
        (status = 409, description = "Registry full, nothing could be added")
    ),
    tag = "extensions"
)]
pub async fn add_custom(
    State(state): State<AppState>,
    Json(req): Json<AddCustomRequest>,
) -> Result<Json<ApiResponse<AddCustomResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if !is_valid_extension_input(&req.extensions) {
        return Err(AppError::BadRequest(
            "Extensions may only contain letters, digits, commas and spaces".to_string(),
        ));
    }

    let outcome = state.blocklist.add_custom(&req.extensions)?;
    if outcome.added.is_empty() && outcome.rejected.is_empty() {
        return Err(AppError::BadRequest("No extensions provided".to_string()));
    }

    let message = format!(
        "{} extension(s) added, {} rejected",
        outcome.added.len(),
        outcome.rejected.len()
    );
    let response = AddCustomResponse {
        added: outcome.added.into_iter().map(Into::into).collect(),
        rejected: outcome.rejected,
        total_count: outcome.total,
    };

    Ok(Json(ApiResponse::ok(message, response)))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/custom/{id}",
    params(
        ("id" = Uuid, Path, description = "Id of the custom extension to remove")
    ),
    responses(
        (status = 200, description = "Entry removed", body = DeleteCustomResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No entry with this id")
    ),
    tag = "extensions"
)]
pub async fn delete_custom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteCustomResponse>>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::BadRequest(format!("Invalid extension id: {}", id)))?;

    let removed = state.blocklist.delete_custom(id)?;
    let message = format!("Custom extension '{}' removed", removed.extension);

    Ok(Json(ApiResponse::ok(
        message,
        DeleteCustomResponse {
            removed_id: removed.id,
            extension: removed.extension,
        },
    )))
}

#[utoipa::path(
    delete,
    path = "/api/extensions/custom",
    responses(
        (status = 200, description = "All custom extensions removed", body = ClearCustomResponse)
    ),
    tag = "extensions"
)]
pub async fn clear_custom(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ClearCustomResponse>>, AppError> {
    let removed_count = state.blocklist.clear_custom();

    Ok(Json(ApiResponse::ok(
        format!("{} custom extension(s) removed", removed_count),
        ClearCustomResponse { removed_count },
    )))
}
