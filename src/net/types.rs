//! Wire DTOs for the `/names/` and `/health/` endpoints.
//!
//! DESIGN
//! ======
//! The list endpoint answers either with a bare array or with a paginated
//! envelope; `NameListResponse` accepts both and collapses them into one
//! `Vec<NameRecord>` so nothing downstream cares which convention the backend
//! was configured with.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier. Integer keys and string keys (UUIDs)
/// are both accepted and treated as opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A stored name entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Unique identifier assigned by the backend.
    pub id: RecordId,
    /// The trimmed name as stored.
    pub name: String,
    /// Creation timestamp as sent by the backend (ISO 8601 / RFC 3339).
    pub created_at: String,
}

/// Body of `GET /names/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NameListResponse {
    Bare(Vec<NameRecord>),
    Envelope { results: Vec<NameRecord> },
}

impl NameListResponse {
    pub fn into_records(self) -> Vec<NameRecord> {
        match self {
            Self::Bare(records) | Self::Envelope { results: records } => records,
        }
    }
}

/// Body of `POST /names/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateNameRequest {
    pub name: String,
}

/// Body of `GET /health/`, both for the healthy and the failing answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub table_exists: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub traceback: Option<String>,
}
