//! Work experience document schema

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for experience entries
pub const EXPERIENCE_COLLECTION: &str = "experiences";

/// Experience document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this entry belongs to
    pub portfolio_id: String,

    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: String,

    /// Whether this is the current position
    #[serde(default)]
    pub current: bool,

    /// Display position, ascending
    #[serde(default)]
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExperienceDoc {
    /// Build a full document from a create request
    pub fn new(portfolio_id: impl Into<String>, create: ExperienceCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.into(),
            title: create.title,
            company: create.company,
            location: create.location,
            duration: create.duration,
            description: create.description,
            current: create.current,
            order: create.order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for ExperienceDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // Listing order within an owner's portfolio
            (
                doc! { "portfolioId": 1, "order": 1 },
                Some(
                    IndexOptions::builder()
                        .name("portfolioId_order_index".to_string())
                        .build(),
                ),
            ),
            // Natural key used by the seed migration upsert. The same title
            // can recur across companies, so company is part of the key.
            (
                doc! { "portfolioId": 1, "title": 1, "company": 1 },
                Some(
                    IndexOptions::builder()
                        .name("portfolioId_title_company_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl Timestamped for ExperienceDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Create request for an experience entry
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCreate {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub order: i32,
}

/// Partial update for an experience entry.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub current: Option<bool>,
    pub order: Option<i32>,
}

impl ExperienceUpdate {
    /// Collect only the provided fields into a `$set` payload
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref company) = self.company {
            set.insert("company", company.as_str());
        }
        if let Some(ref location) = self.location {
            set.insert("location", location.as_str());
        }
        if let Some(ref duration) = self.duration {
            set.insert("duration", duration.as_str());
        }
        if let Some(ref description) = self.description {
            set.insert("description", description.as_str());
        }
        if let Some(current) = self.current {
            set.insert("current", current);
        }
        if let Some(order) = self.order {
            set.insert("order", order);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_preserves_false_and_zero_values() {
        // `false` and `0` are real values, not "absent"
        let update: ExperienceUpdate = serde_json::from_value(serde_json::json!({
            "current": false,
            "order": 0
        }))
        .unwrap();

        let set = update.set_document();
        assert_eq!(set.len(), 2);
        assert!(!set.get_bool("current").unwrap());
        assert_eq!(set.get_i32("order").unwrap(), 0);
    }
}
