pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::GatekeeperConfig;
use crate::services::blocklist::BlocklistService;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::extensions::list_fixed,
        api::handlers::extensions::update_fixed,
        api::handlers::extensions::bulk_update_fixed,
        api::handlers::extensions::list_custom,
        api::handlers::extensions::add_custom,
        api::handlers::extensions::delete_custom,
        api::handlers::extensions::clear_custom,
        api::handlers::extensions::reset_all,
        api::handlers::extensions::seed_test_data,
        api::handlers::uploads::upload_files,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            api::handlers::extensions::types::FixedExtensionResponse,
            api::handlers::extensions::types::CustomExtensionResponse,
            api::handlers::extensions::types::UpdateFixedRequest,
            api::handlers::extensions::types::BulkUpdateResponse,
            api::handlers::extensions::types::AddCustomRequest,
            api::handlers::extensions::types::AddCustomResponse,
            api::handlers::extensions::types::DeleteCustomResponse,
            api::handlers::extensions::types::ClearCustomResponse,
            api::handlers::extensions::types::SeedRequest,
            api::handlers::extensions::types::SeedResponse,
            api::handlers::uploads::UploadCheckResponse,
            api::handlers::health::HealthResponse,
            crate::models::RejectedToken,
            crate::models::RejectReason,
        )
    ),
    tags(
        (name = "extensions", description = "Blocklist management endpoints"),
        (name = "uploads", description = "Upload screening endpoints"),
        (name = "system", description = "Service health endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub blocklist: Arc<BlocklistService>,
    pub config: GatekeeperConfig,
}

impl AppState {
    /// Builds the shared state, sizing the registry from the config.
    pub fn new(config: GatekeeperConfig) -> Self {
        let blocklist = Arc::new(BlocklistService::new(config.custom_extension_limit));
        Self { blocklist, config }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .route(
            "/api/extensions/fixed",
            get(api::handlers::extensions::list_fixed)
                .patch(api::handlers::extensions::update_fixed),
        )
        .route(
            "/api/extensions/fixed/bulk",
            patch(api::handlers::extensions::bulk_update_fixed),
        )
        .route(
            "/api/extensions/custom",
            get(api::handlers::extensions::list_custom)
                .post(api::handlers::extensions::add_custom)
                .delete(api::handlers::extensions::clear_custom),
        )
        .route(
            "/api/extensions/custom/:id",
            delete(api::handlers::extensions::delete_custom),
        )
        .route(
            "/api/extensions/reset",
            post(api::handlers::extensions::reset_all),
        )
        .route(
            "/api/extensions/test-data",
            post(api::handlers::extensions::seed_test_data),
        )
        .route(
            "/api/extensions/upload",
            post(api::handlers::uploads::upload_files),
        )
        .layer(from_fn(api::middleware::metrics::metrics_middleware))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any),
        )
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_upload_bytes,
        ))
        .with_state(state)
}
