//! Publication document schema

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for publications
pub const PUBLICATION_COLLECTION: &str = "publications";

/// Publication document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this publication belongs to
    pub portfolio_id: String,

    pub title: String,

    /// Author list as printed, e.g. "Doe J., Smith A."
    pub authors: String,

    /// Venue the work appeared in
    pub publication: String,

    /// Publication year, kept as text ("2024", "in press")
    pub year: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Display position, ascending
    #[serde(default)]
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicationDoc {
    /// Build a full document from a create request
    pub fn new(portfolio_id: impl Into<String>, create: PublicationCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.into(),
            title: create.title,
            authors: create.authors,
            publication: create.publication,
            year: create.year,
            doi: create.doi,
            order: create.order,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for PublicationDoc {
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

impl Timestamped for PublicationDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Create request for a publication
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublicationCreate {
    pub title: String,
    pub authors: String,
    pub publication: String,
    pub year: String,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Partial update for a publication.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublicationUpdate {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub publication: Option<String>,
    pub year: Option<String>,
    pub doi: Option<String>,
    pub order: Option<i32>,
}

impl PublicationUpdate {
    /// Collect only the provided fields into a `$set` payload
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("title", title.as_str());
        }
        if let Some(ref authors) = self.authors {
            set.insert("authors", authors.as_str());
        }
        if let Some(ref publication) = self.publication {
            set.insert("publication", publication.as_str());
        }
        if let Some(ref year) = self.year {
            set.insert("year", year.as_str());
        }
        if let Some(ref doi) = self.doi {
            set.insert("doi", doi.as_str());
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
    fn test_missing_doi_is_absent_from_wire() {
        let doc = PublicationDoc::new(
            "default",
            PublicationCreate {
                title: "Flow Networks".to_string(),
                authors: "Doe J.".to_string(),
                publication: "Journal of Graphs".to_string(),
                year: "2024".to_string(),
                doi: None,
                order: 0,
            },
        );

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("doi").is_none());
        assert_eq!(json["year"], "2024");
    }
}
