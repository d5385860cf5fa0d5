use std::env;

/// Runtime configuration for the gatekeeper
#[derive(Debug, Clone)]
pub struct GatekeeperConfig {
    /// Maximum number of custom extensions (default: 200)
    pub custom_extension_limit: usize,

    /// Maximum multipart request body size in bytes (default: 256 MB)
    pub max_upload_bytes: usize,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            custom_extension_limit: 200,
            max_upload_bytes: 256 * 1024 * 1024, // 256 MB
        }
    }
}

impl GatekeeperConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            custom_extension_limit: env::var("CUSTOM_EXTENSION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.custom_extension_limit),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_bytes),
        }
    }
}
