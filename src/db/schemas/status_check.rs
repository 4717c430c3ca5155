//! Status check document schema
//!
//! Legacy liveness-audit records: clients POST their name, the API stores
//! it with a timestamp. Field names stay snake_case on the wire; this
//! endpoint predates the camelCase convention the portfolio entities use.

use bson::Document;
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for status checks
pub const STATUS_CHECK_COLLECTION: &str = "status_checks";

/// Status check document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatusCheckDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Self-reported client name
    pub client_name: String,

    pub timestamp: DateTime<Utc>,
}

impl StatusCheckDoc {
    /// Create a status check for a client name
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoIndexes for StatusCheckDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![]
    }
}

impl Timestamped for StatusCheckDoc {
    // Append-only records carry a single timestamp; both stamps map onto it.
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.timestamp = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.timestamp = at;
    }
}

/// Create request for a status check
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
