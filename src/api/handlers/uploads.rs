use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::api::error::AppError;
use crate::api::response::ApiResponse;
use crate::services::upload::screen_filenames;

#[derive(Serialize, ToSchema)]
pub struct UploadCheckResponse {
    pub total_files: usize,
    pub accepted_files: usize,
    pub accepted_file_names: Vec<String>,
    pub rejected_file_names: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/extensions/upload",
    request_body(content = Multipart, description = "Multipart batch of files to screen"),
    responses(
        (status = 200, description = "Screening outcome for the whole batch", body = UploadCheckResponse),
        (status = 400, description = "No files in the request"),
        (status = 413, description = "Request body too large")
    ),
    tag = "uploads"
)]
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadCheckResponse>>, AppError> {
    let mut filenames: Vec<String> = Vec::new();
    let mut total_files = 0usize;

    // Capture errors in a result so the remaining stream can still be drained
    let result: Result<(), AppError> = async {
        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some("files") {
                while field.chunk().await.map_err(multipart_error)?.is_some() {}
                continue;
            }

            total_files += 1;
            let filename = field.file_name().unwrap_or_default().to_string();
            if !filename.is_empty() {
                filenames.push(filename);
            }

            // Only the name matters for screening; the bytes are consumed
            // so the client gets a proper response instead of a TCP reset.
            while field.chunk().await.map_err(multipart_error)?.is_some() {}
        }
        Ok(())
    }
    .await;

    if let Err(e) = result {
        tracing::warn!("Upload screening aborted early: {}. Consuming remaining stream...", e);
        while let Ok(Some(mut field)) = multipart.next_field().await {
            while let Ok(Some(_)) = field.chunk().await {}
        }
        return Err(e);
    }

    if total_files == 0 {
        return Err(AppError::BadRequest("No files provided".to_string()));
    }

    let snapshot = state.blocklist.snapshot();
    let outcome = screen_filenames(&filenames, &snapshot);

    for rejected in &outcome.rejected {
        tracing::warn!(
            "Rejected '{}': extension '{}' is blocked",
            rejected.filename,
            rejected.extension
        );
    }

    let message = format!(
        "{} of {} file(s) accepted",
        outcome.accepted.len(),
        total_files
    );
    let response = UploadCheckResponse {
        total_files,
        accepted_files: outcome.accepted.len(),
        accepted_file_names: outcome.accepted,
        rejected_file_names: outcome
            .rejected
            .into_iter()
            .map(|rejected| rejected.filename)
            .collect(),
    };

    Ok(Json(ApiResponse::ok(message, response)))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Request body exceeds the maximum allowed limit".to_string())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
