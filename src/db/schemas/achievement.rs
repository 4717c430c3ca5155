//! Achievement document schema

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for achievements
pub const ACHIEVEMENT_COLLECTION: &str = "achievements";

/// Achievement document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this achievement belongs to
    pub portfolio_id: String,

    pub title: String,
    pub description: String,

    /// Display position, ascending
    #[serde(default)]
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AchievementDoc {
    /// Build a full document from a create request
    pub fn new(portfolio_id: impl Into<String>, create: AchievementCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.into(),
            title: create.title,
            description: create.description,
            order: create.order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for AchievementDoc {
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
            // Natural key used by the seed migration upsert
            (
                doc! { "portfolioId": 1, "title": 1 },
                Some(
                    IndexOptions::builder()
                        .name("portfolioId_title_index".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl Timestamped for AchievementDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Create request for an achievement
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

/// Partial update for an achievement.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchievementUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<i32>,
}

impl AchievementUpdate {
    /// Collect only the provided fields into a `$set` payload
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref description) = self.description {
            set.insert("description", description.as_str());
        }
        if let Some(order) = self.order {
            set.insert("order", order);
        }
        set
    }
}
