// SPDX-License-Identifier: Apache-2.0

use orderdesk_store::StoreConfig;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            // Dashboard dev server origin.
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig, store: &StoreConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if store.seed_count == 0 {
        return Err("seed count must be > 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_config_validation_rejects_zero_limits() {
        let api = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        let err = validate_startup_config(&api, &StoreConfig::default()).expect_err("zero body");
        assert!(err.contains("body bytes"));

        let err = validate_startup_config(&ApiConfig::default(), &StoreConfig { seed_count: 0 })
            .expect_err("zero seed");
        assert!(err.contains("seed count"));

        assert!(validate_startup_config(&ApiConfig::default(), &StoreConfig::default()).is_ok());
    }
}
