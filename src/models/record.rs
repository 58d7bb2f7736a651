use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier.
/// The store owns the key type; accept either a JSON integer or a string
/// so the client stays agnostic about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One logged habit event as stored remotely.
/// Both fields are server-assigned; the timestamp stays a raw ISO-8601
/// string until the aggregator parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: RecordId,       // ⇔ events.id (server-assigned primary key)
    pub timestamp: String,  // ⇔ events.timestamp (TEXT, ISO8601 with offset)
}

impl EventRecord {
    pub fn new(id: RecordId, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
        }
    }
}
