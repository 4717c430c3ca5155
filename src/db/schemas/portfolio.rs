//! Portfolio document schema
//!
//! One portfolio per owner key, holding the personal info header and the
//! about section. Child content (skills, experience, ...) lives in its own
//! collections keyed by `portfolioId`.

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::mongo::{IntoIndexes, Timestamped};

/// Collection name for portfolios
pub const PORTFOLIO_COLLECTION: &str = "portfolios";

/// Personal info header (name, tagline, contact links)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub kaggle: String,
}

/// Education entry inside the about section
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

/// About section with a title, free-form description, and education
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(default = "default_about_title")]
    pub title: String,
    pub description: String,
    pub education: Education,
}

fn default_about_title() -> String {
    "About Me".to_string()
}

/// Portfolio document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDoc {
    /// Generated record id (uuid v4 string)
    pub id: String,

    /// Owner key this portfolio belongs to
    pub user_id: String,

    pub personal: PersonalInfo,
    pub about: AboutSection,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioDoc {
    /// Create a new portfolio document for an owner
    pub fn new(user_id: impl Into<String>, personal: PersonalInfo, about: AboutSection) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            personal,
            about,
            created_at: now,
            updated_at: now,
        }
    }
}

impl IntoIndexes for PortfolioDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            // One portfolio per owner
            (
                doc! { "userId": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .name("userId_unique".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

impl Timestamped for PortfolioDoc {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Partial update for the personal info header.
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoUpdate {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub kaggle: Option<String>,
}

impl PersonalInfoUpdate {
    /// Collect only the provided fields into a dotted `$set` payload
    /// under the `personal.` prefix.
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref name) = self.name {
            set.insert("personal.name", name.as_str());
        }
        if let Some(ref tagline) = self.tagline {
            set.insert("personal.tagline", tagline.as_str());
        }
        if let Some(ref email) = self.email {
            set.insert("personal.email", email.as_str());
        }
        if let Some(ref github) = self.github {
            set.insert("personal.github", github.as_str());
        }
        if let Some(ref linkedin) = self.linkedin {
            set.insert("personal.linkedin", linkedin.as_str());
        }
        if let Some(ref kaggle) = self.kaggle {
            set.insert("personal.kaggle", kaggle.as_str());
        }
        set
    }
}

/// Partial update for the about section.
/// `education` replaces the whole nested object when provided.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AboutSectionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub education: Option<Education>,
}

impl AboutSectionUpdate {
    /// Collect only the provided fields into a dotted `$set` payload
    /// under the `about.` prefix.
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref title) = self.title {
            set.insert("about.title", title.as_str());
        }
        if let Some(ref description) = self.description {
            set.insert("about.description", description.as_str());
        }
        if let Some(ref education) = self.education {
            set.insert(
                "about.education",
                doc! {
                    "institution": education.institution.as_str(),
                    "degree": education.degree.as_str(),
                    "duration": education.duration.as_str(),
                },
            );
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_personal() -> PersonalInfo {
        PersonalInfo {
            name: "Ada Lovelace".to_string(),
            tagline: "Analyst".to_string(),
            email: "ada@example.com".to_string(),
            github: "https://github.com/ada".to_string(),
            linkedin: "https://linkedin.com/in/ada".to_string(),
            kaggle: "https://kaggle.com/ada".to_string(),
        }
    }

    fn sample_about() -> AboutSection {
        AboutSection {
            title: "About Me".to_string(),
            description: "I write engines.".to_string(),
            education: Education {
                institution: "University of London".to_string(),
                degree: "Mathematics".to_string(),
                duration: "1833-1835".to_string(),
            },
        }
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let doc = PortfolioDoc::new("default", sample_personal(), sample_about());
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["userId"], "default");
        assert!(json.get("user_id").is_none());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert_eq!(json["personal"]["name"], "Ada Lovelace");
        assert_eq!(json["about"]["education"]["institution"], "University of London");
    }

    #[test]
    fn test_about_title_defaults_when_absent() {
        let about: AboutSection = serde_json::from_value(serde_json::json!({
            "description": "desc",
            "education": {
                "institution": "U",
                "degree": "D",
                "duration": "2020"
            }
        }))
        .unwrap();

        assert_eq!(about.title, "About Me");
    }

    #[test]
    fn test_personal_update_collects_only_provided_fields() {
        let update = PersonalInfoUpdate {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            ..Default::default()
        };

        let set = update.set_document();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("personal.name").unwrap(), "Grace Hopper");
        assert_eq!(set.get_str("personal.email").unwrap(), "grace@example.com");
        assert!(set.get("personal.tagline").is_none());
    }

    #[test]
    fn test_empty_personal_update_is_empty_document() {
        let update = PersonalInfoUpdate::default();
        assert!(update.set_document().is_empty());
    }

    #[test]
    fn test_about_update_replaces_education_wholesale() {
        let update = AboutSectionUpdate {
            education: Some(Education {
                institution: "MIT".to_string(),
                degree: "CS".to_string(),
                duration: "2019-2023".to_string(),
            }),
            ..Default::default()
        };

        let set = update.set_document();
        assert_eq!(set.len(), 1);
        let education = set.get_document("about.education").unwrap();
        assert_eq!(education.get_str("institution").unwrap(), "MIT");
        assert_eq!(education.get_str("duration").unwrap(), "2019-2023");
    }
}
