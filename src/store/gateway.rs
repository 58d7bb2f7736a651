//! The two remote operations this system consumes: append one record,
//! fetch all records. No retry anywhere; failures abort the interaction.

use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use crate::store::client::StoreClient;

pub struct StoreGateway<'a> {
    client: &'a StoreClient,
    table: String,
}

impl<'a> StoreGateway<'a> {
    pub fn new(client: &'a StoreClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    /// Create exactly one new record. The server assigns both the id and
    /// the timestamp, so the request body carries no fields at all.
    pub fn append(&self) -> AppResult<EventRecord> {
        let url = self.client.table_url(&self.table);

        let response = self
            .client
            .http
            .post(&url)
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({}))
            .send()
            .map_err(|e| AppError::RemoteWrite(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::RemoteWrite(format!(
                "store returned {}: {}",
                status, body
            )));
        }

        // The store answers with the list of created rows.
        let mut created: Vec<EventRecord> = response
            .json()
            .map_err(|e| AppError::RemoteWrite(format!("unreadable response: {}", e)))?;

        match created.len() {
            1 => Ok(created.remove(0)),
            n => Err(AppError::RemoteWrite(format!(
                "expected exactly one created record, got {}",
                n
            ))),
        }
    }

    /// Fetch the complete, unordered record list. The store is assumed
    /// small enough to read in full; no pagination.
    pub fn fetch_all(&self) -> AppResult<Vec<EventRecord>> {
        let url = format!("{}?select=*", self.client.table_url(&self.table));

        let response = self
            .client
            .http
            .get(&url)
            .send()
            .map_err(|e| AppError::RemoteRead(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::RemoteRead(format!(
                "store returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .map_err(|e| AppError::RemoteRead(format!("unreadable response: {}", e)))
    }
}
