//! HTTP connection to the remote event store (lightweight for CLI usage).

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Thin wrapper around the blocking HTTP client plus the resolved
/// endpoint. One per process; handed to the gateway functions.
pub struct StoreClient {
    pub http: Client,
    base_url: String,
}

impl StoreClient {
    /// Build a client from the loaded configuration.
    /// Fails when the endpoint or credential is missing or unusable.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let base_url = cfg.resolve_store_url()?;
        let key = cfg.resolve_store_key()?;

        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(&key)
            .map_err(|_| AppError::Config("store credential contains invalid characters".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| AppError::Config("store credential contains invalid characters".into()))?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// REST endpoint for the given table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }
}
