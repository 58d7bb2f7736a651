//! Session-scoped record cache.
//!
//! One `Session` lives for one command invocation. The record list is
//! fetched at most once; a successful `track` pushes the created record
//! onto the cached list instead of re-fetching. Single writer assumed,
//! so cache and store cannot diverge within a session.

use crate::errors::AppResult;
use crate::models::record::EventRecord;
use crate::store::gateway::StoreGateway;

pub struct Session<'a> {
    gateway: &'a StoreGateway<'a>,
    records: Option<Vec<EventRecord>>,
}

impl<'a> Session<'a> {
    pub fn new(gateway: &'a StoreGateway<'a>) -> Self {
        Self {
            gateway,
            records: None,
        }
    }

    /// Fetch-or-use-cached record list.
    pub fn records(&mut self) -> AppResult<&[EventRecord]> {
        if self.records.is_none() {
            self.records = Some(self.gateway.fetch_all()?);
        }
        Ok(self.records.as_deref().unwrap_or(&[]))
    }

    /// Append one event and update the cache in place.
    pub fn track(&mut self) -> AppResult<EventRecord> {
        let created = self.gateway.append()?;
        if let Some(records) = &mut self.records {
            records.push(created.clone());
        }
        Ok(created)
    }
}
