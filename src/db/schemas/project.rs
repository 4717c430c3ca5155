//! Project document schema

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for projects
pub const PROJECT_COLLECTION: &str = "projects";

/// Project document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this project belongs to
    pub portfolio_id: String,

    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,

    /// Repository link; "#" when there is nothing to link yet
    #[serde(default = "default_link")]
    pub github: String,

    /// Live demo link; "#" when there is nothing to link yet
    #[serde(default = "default_link")]
    pub demo: String,

    /// Whether the project is highlighted on the front page
    #[serde(default)]
    pub featured: bool,

    /// Placeholder cards reserve a slot before the project is ready
    #[serde(default)]
    pub placeholder: bool,

    /// Display position, ascending
    #[serde(default)]
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_link() -> String {
    "#".to_string()
}

impl ProjectDoc {
    /// Build a full document from a create request
    pub fn new(portfolio_id: impl Into<String>, create: ProjectCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.into(),
            title: create.title,
            description: create.description,
            technologies: create.technologies,
            github: create.github,
            demo: create.demo,
            featured: create.featured,
            placeholder: create.placeholder,
            order: create.order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for ProjectDoc {
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

impl Timestamped for ProjectDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Create request for a project
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default = "default_link")]
    pub github: String,
    #[serde(default = "default_link")]
    pub demo: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub placeholder: bool,
    #[serde(default)]
    pub order: i32,
}

/// Partial update for a project.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: Option<bool>,
    pub placeholder: Option<bool>,
    pub order: Option<i32>,
}

impl ProjectUpdate {
    /// Collect only the provided fields into a `$set` payload
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref description) = self.description {
            set.insert("description", description.as_str());
        }
        if let Some(ref technologies) = self.technologies {
            set.insert("technologies", technologies.clone());
        }
        if let Some(ref github) = self.github {
            set.insert("github", github.as_str());
        }
        if let Some(ref demo) = self.demo {
            set.insert("demo", demo.as_str());
        }
        if let Some(featured) = self.featured {
            set.insert("featured", featured);
        }
        if let Some(placeholder) = self.placeholder {
            set.insert("placeholder", placeholder);
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
    fn test_create_defaults_links_and_flags() {
        let create: ProjectCreate = serde_json::from_value(serde_json::json!({
            "title": "Churn model",
            "description": "Predicting churn",
            "technologies": ["Python", "XGBoost"]
        }))
        .unwrap();

        assert_eq!(create.github, "#");
        assert_eq!(create.demo, "#");
        assert!(!create.featured);
        assert!(!create.placeholder);
        assert_eq!(create.order, 0);
    }

    #[test]
    fn test_doc_round_trips_through_bson() {
        let doc = ProjectDoc::new(
            "default",
            ProjectCreate {
                title: "Churn model".to_string(),
                description: "Predicting churn".to_string(),
                technologies: vec!["Python".to_string()],
                github: "#".to_string(),
                demo: "https://demo.example.com".to_string(),
                featured: true,
                placeholder: false,
                order: 3,
            },
        );

        let bson_doc = bson::to_document(&doc).unwrap();
        assert_eq!(bson_doc.get_str("portfolioId").unwrap(), "default");
        assert_eq!(bson_doc.get_i32("order").unwrap(), 3);

        let back: ProjectDoc = bson::from_document(bson_doc).unwrap();
        assert_eq!(back.id, doc.id);
        assert!(back.featured);
    }
}
