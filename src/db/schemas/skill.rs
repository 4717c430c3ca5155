//! Skill category document schema

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for skill categories
pub const SKILL_COLLECTION: &str = "skills";

/// Skill category document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this category belongs to
    pub portfolio_id: String,

    /// Category heading, e.g. "Languages"
    pub title: String,

    /// Individual skills under the heading
    pub items: Vec<String>,

    /// Display position, ascending
    #[serde(default)]
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillCategoryDoc {
    /// Build a full document from a create request
    pub fn new(portfolio_id: impl Into<String>, create: SkillCategoryCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.into(),
            title: create.title,
            items: create.items,
            order: create.order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for SkillCategoryDoc {
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

impl Timestamped for SkillCategoryDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Create request for a skill category
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryCreate {
    pub title: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

/// Partial update for a skill category.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryUpdate {
    pub title: Option<String>,
    pub items: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl SkillCategoryUpdate {
    /// Collect only the provided fields into a `$set` payload
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref items) = self.items {
            set.insert("items", items.clone());
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
    fn test_create_defaults_order_to_zero() {
        let create: SkillCategoryCreate = serde_json::from_value(serde_json::json!({
            "title": "Languages",
            "items": ["Rust", "Python"]
        }))
        .unwrap();

        assert_eq!(create.order, 0);

        let doc = SkillCategoryDoc::new("default", create);
        assert_eq!(doc.portfolio_id, "default");
        assert_eq!(doc.items, vec!["Rust", "Python"]);
        assert!(!doc.id.is_empty());
    }

    #[test]
    fn test_create_rejects_missing_required_fields() {
        let result: Result<SkillCategoryCreate, _> =
            serde_json::from_value(serde_json::json!({ "title": "Languages" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_set_document_skips_absent_fields() {
        let update = SkillCategoryUpdate {
            items: Some(vec!["Go".to_string()]),
            ..Default::default()
        };

        let set = update.set_document();
        assert_eq!(set.len(), 1);
        assert!(set.get("title").is_none());
        assert_eq!(set.get_array("items").unwrap().len(), 1);
    }
}
