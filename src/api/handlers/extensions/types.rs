use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CustomExtension, FixedExtension, RejectedToken};
use crate::utils::validation::MAX_INPUT_LENGTH;

#[derive(Serialize, ToSchema)]
pub struct FixedExtensionResponse {
    pub extension: String,
    pub blocked: bool,
}

impl From<FixedExtension> for FixedExtensionResponse {
    fn from(entry: FixedExtension) -> Self {
        Self {
            extension: entry.name,
            blocked: entry.blocked,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CustomExtensionResponse {
    pub id: Uuid,
    pub extension: String,
    pub created_at: DateTime<Utc>,
}

impl From<CustomExtension> for CustomExtensionResponse {
    fn from(entry: CustomExtension) -> Self {
        Self {
            id: entry.id,
            extension: entry.extension,
            created_at: entry.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct UpdateFixedRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Extension must be between 1 and 20 characters"
    ))]
    pub extension: String,
    pub blocked: bool,
}

#[derive(Deserialize)]
pub struct BulkUpdateQuery {
    pub blocked: bool,
}

#[derive(Serialize, ToSchema)]
pub struct BulkUpdateResponse {
    pub updated_count: usize,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct AddCustomRequest {
    /// Comma separated extensions, e.g. `"sh, py, tar"`.
    #[validate(length(
        min = 1,
        max = MAX_INPUT_LENGTH,
        message = "Extensions input must be between 1 and 500 characters"
    ))]
    pub extensions: String,
}

#[derive(Serialize, ToSchema)]
pub struct AddCustomResponse {
    pub added: Vec<CustomExtensionResponse>,
    pub rejected: Vec<RejectedToken>,
    pub total_count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteCustomResponse {
    pub removed_id: Uuid,
    pub extension: String,
}

#[derive(Serialize, ToSchema)]
pub struct ClearCustomResponse {
    pub removed_count: usize,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct SeedRequest {
    /// Prefix for the generated names (`test` gives `test1`, `test2`, ...).
    #[serde(default = "default_seed_prefix")]
    pub prefix: String,

    #[validate(range(min = 1, message = "Count must be at least 1"))]
    #[serde(default = "default_seed_count")]
    pub count: usize,
}

fn default_seed_prefix() -> String {
    "test".to_string()
}

const fn default_seed_count() -> usize {
    200
}

impl Default for SeedRequest {
    fn default() -> Self {
        Self {
            prefix: default_seed_prefix(),
            count: default_seed_count(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SeedResponse {
    pub created_count: usize,
}
