//! Portfolio data access service
//!
//! All reads and writes for the portfolio document and its child content
//! kinds go through `PortfolioService`. Handlers never touch collections
//! directly; they translate the booleans and options returned here into
//! HTTP statuses.

use bson::{doc, Bson, Document};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::db::schemas::{
    AboutSectionUpdate, AchievementCreate, AchievementDoc, AchievementUpdate, ExperienceCreate,
    ExperienceDoc, ExperienceUpdate, PersonalInfoUpdate, PortfolioDoc, ProjectCreate, ProjectDoc,
    ProjectUpdate, PublicationCreate, PublicationDoc, PublicationUpdate, SkillCategoryCreate,
    SkillCategoryDoc, SkillCategoryUpdate, StatusCheckCreate, StatusCheckDoc,
    ACHIEVEMENT_COLLECTION, EXPERIENCE_COLLECTION, PORTFOLIO_COLLECTION, PROJECT_COLLECTION,
    PUBLICATION_COLLECTION, SKILL_COLLECTION, STATUS_CHECK_COLLECTION,
};
use crate::db::{MongoClient, MongoCollection};
use crate::services::seed::SeedData;
use crate::types::{Result, VitrineError};

/// Complete portfolio payload: the portfolio document plus every child
/// list, each sorted by display order.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: PortfolioDoc,
    pub skills: Vec<SkillCategoryDoc>,
    pub experiences: Vec<ExperienceDoc>,
    pub projects: Vec<ProjectDoc>,
    pub achievements: Vec<AchievementDoc>,
    pub publications: Vec<PublicationDoc>,
}

/// Documents written per kind during a seed migration
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationReport {
    pub skills: usize,
    pub experiences: usize,
    pub projects: usize,
    pub achievements: usize,
    pub publications: usize,
}

/// Service holding the typed collection handles for one database
#[derive(Clone)]
pub struct PortfolioService {
    portfolios: MongoCollection<PortfolioDoc>,
    skills: MongoCollection<SkillCategoryDoc>,
    experiences: MongoCollection<ExperienceDoc>,
    projects: MongoCollection<ProjectDoc>,
    achievements: MongoCollection<AchievementDoc>,
    publications: MongoCollection<PublicationDoc>,
    status_checks: MongoCollection<StatusCheckDoc>,
}

impl PortfolioService {
    /// Open every collection, applying schema indexes
    pub async fn new(mongo: &MongoClient) -> Result<Self> {
        Ok(Self {
            portfolios: mongo.collection(PORTFOLIO_COLLECTION).await?,
            skills: mongo.collection(SKILL_COLLECTION).await?,
            experiences: mongo.collection(EXPERIENCE_COLLECTION).await?,
            projects: mongo.collection(PROJECT_COLLECTION).await?,
            achievements: mongo.collection(ACHIEVEMENT_COLLECTION).await?,
            publications: mongo.collection(PUBLICATION_COLLECTION).await?,
            status_checks: mongo.collection(STATUS_CHECK_COLLECTION).await?,
        })
    }

    // === Portfolio ===

    /// Get the complete portfolio for an owner.
    ///
    /// Returns `None` when the portfolio document itself is missing,
    /// regardless of any orphaned child documents.
    pub async fn get_portfolio(&self, owner: &str) -> Result<Option<PortfolioResponse>> {
        let portfolio = match self.portfolios.find_one(doc! { "userId": owner }).await? {
            Some(p) => p,
            None => return Ok(None),
        };

        Ok(Some(PortfolioResponse {
            portfolio,
            skills: self.list_skills(owner).await?,
            experiences: self.list_experiences(owner).await?,
            projects: self.list_projects(owner).await?,
            achievements: self.list_achievements(owner).await?,
            publications: self.list_publications(owner).await?,
        }))
    }

    /// Export is the composite read under a different route
    pub async fn export_data(&self, owner: &str) -> Result<Option<PortfolioResponse>> {
        self.get_portfolio(owner).await
    }

    /// Update fields of the personal section
    pub async fn update_personal(&self, owner: &str, updates: &PersonalInfoUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .portfolios
            .update_one(doc! { "userId": owner }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Update fields of the about section
    pub async fn update_about(&self, owner: &str, updates: &AboutSectionUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .portfolios
            .update_one(doc! { "userId": owner }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    // === Skills ===

    pub async fn list_skills(&self, owner: &str) -> Result<Vec<SkillCategoryDoc>> {
        self.skills
            .find_many(doc! { "portfolioId": owner }, Some(order_sort()), None)
            .await
    }

    pub async fn create_skill(
        &self,
        owner: &str,
        create: SkillCategoryCreate,
    ) -> Result<SkillCategoryDoc> {
        self.skills
            .insert_one(SkillCategoryDoc::new(owner, create))
            .await
    }

    pub async fn update_skill(&self, id: &str, updates: &SkillCategoryUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .skills
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete_skill(&self, id: &str) -> Result<bool> {
        self.skills.delete_one(doc! { "id": id }).await
    }

    // === Experience ===

    pub async fn list_experiences(&self, owner: &str) -> Result<Vec<ExperienceDoc>> {
        self.experiences
            .find_many(doc! { "portfolioId": owner }, Some(order_sort()), None)
            .await
    }

    pub async fn create_experience(
        &self,
        owner: &str,
        create: ExperienceCreate,
    ) -> Result<ExperienceDoc> {
        self.experiences
            .insert_one(ExperienceDoc::new(owner, create))
            .await
    }

    pub async fn update_experience(&self, id: &str, updates: &ExperienceUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .experiences
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete_experience(&self, id: &str) -> Result<bool> {
        self.experiences.delete_one(doc! { "id": id }).await
    }

    // === Projects ===

    pub async fn list_projects(&self, owner: &str) -> Result<Vec<ProjectDoc>> {
        self.projects
            .find_many(doc! { "portfolioId": owner }, Some(order_sort()), None)
            .await
    }

    pub async fn create_project(&self, owner: &str, create: ProjectCreate) -> Result<ProjectDoc> {
        self.projects
            .insert_one(ProjectDoc::new(owner, create))
            .await
    }

    pub async fn update_project(&self, id: &str, updates: &ProjectUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .projects
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete_project(&self, id: &str) -> Result<bool> {
        self.projects.delete_one(doc! { "id": id }).await
    }

    // === Achievements ===

    pub async fn list_achievements(&self, owner: &str) -> Result<Vec<AchievementDoc>> {
        self.achievements
            .find_many(doc! { "portfolioId": owner }, Some(order_sort()), None)
            .await
    }

    pub async fn create_achievement(
        &self,
        owner: &str,
        create: AchievementCreate,
    ) -> Result<AchievementDoc> {
        self.achievements
            .insert_one(AchievementDoc::new(owner, create))
            .await
    }

    pub async fn update_achievement(&self, id: &str, updates: &AchievementUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .achievements
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete_achievement(&self, id: &str) -> Result<bool> {
        self.achievements.delete_one(doc! { "id": id }).await
    }

    // === Publications ===

    pub async fn list_publications(&self, owner: &str) -> Result<Vec<PublicationDoc>> {
        self.publications
            .find_many(doc! { "portfolioId": owner }, Some(order_sort()), None)
            .await
    }

    pub async fn create_publication(
        &self,
        owner: &str,
        create: PublicationCreate,
    ) -> Result<PublicationDoc> {
        self.publications
            .insert_one(PublicationDoc::new(owner, create))
            .await
    }

    pub async fn update_publication(&self, id: &str, updates: &PublicationUpdate) -> Result<bool> {
        let mut set = updates.set_document();
        if set.is_empty() {
            return Ok(false);
        }

        set.insert("updatedAt", updated_at_stamp()?);
        let result = self
            .publications
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete_publication(&self, id: &str) -> Result<bool> {
        self.publications.delete_one(doc! { "id": id }).await
    }

    // === Migration ===

    /// Write a full seed payload for an owner.
    ///
    /// The portfolio document is replaced wholesale; child documents are
    /// upserted by natural key with `order` taken from source position, so
    /// re-running the same seed updates in place instead of duplicating.
    /// Writes are not atomic across collections: a failure partway leaves
    /// the kinds migrated so far in place.
    pub async fn migrate(&self, owner: &str, seed: SeedData) -> Result<MigrationReport> {
        info!("Starting data migration for owner '{}'", owner);

        let portfolio = PortfolioDoc::new(owner, seed.personal, seed.about);
        self.portfolios
            .replace_upsert(doc! { "userId": owner }, portfolio)
            .await?;
        info!("Migrated portfolio document");

        let mut report = MigrationReport::default();

        for (i, mut create) in seed.skills.categories.into_iter().enumerate() {
            create.order = i as i32;
            let skill = SkillCategoryDoc::new(owner, create);
            let filter = title_key(owner, &skill.title);
            self.skills.replace_upsert(filter, skill).await?;
            report.skills += 1;
        }
        info!("Migrated {} skill categories", report.skills);

        for (i, mut create) in seed.experience.into_iter().enumerate() {
            create.order = i as i32;
            let experience = ExperienceDoc::new(owner, create);
            let filter = title_company_key(owner, &experience.title, &experience.company);
            self.experiences.replace_upsert(filter, experience).await?;
            report.experiences += 1;
        }
        info!("Migrated {} experiences", report.experiences);

        for (i, mut create) in seed.projects.into_iter().enumerate() {
            create.order = i as i32;
            let project = ProjectDoc::new(owner, create);
            let filter = title_key(owner, &project.title);
            self.projects.replace_upsert(filter, project).await?;
            report.projects += 1;
        }
        info!("Migrated {} projects", report.projects);

        for (i, mut create) in seed.achievements.into_iter().enumerate() {
            create.order = i as i32;
            let achievement = AchievementDoc::new(owner, create);
            let filter = title_key(owner, &achievement.title);
            self.achievements.replace_upsert(filter, achievement).await?;
            report.achievements += 1;
        }
        info!("Migrated {} achievements", report.achievements);

        for (i, mut create) in seed.publications.into_iter().enumerate() {
            create.order = i as i32;
            let publication = PublicationDoc::new(owner, create);
            let filter = title_key(owner, &publication.title);
            self.publications.replace_upsert(filter, publication).await?;
            report.publications += 1;
        }
        info!("Migrated {} publications", report.publications);

        Ok(report)
    }

    // === Status checks ===

    pub async fn create_status_check(&self, create: StatusCheckCreate) -> Result<StatusCheckDoc> {
        self.status_checks
            .insert_one(StatusCheckDoc::new(create.client_name))
            .await
    }

    pub async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheckDoc>> {
        self.status_checks
            .find_many(doc! {}, None, Some(limit))
            .await
    }
}

/// Ascending display-order sort used by every child listing
fn order_sort() -> Document {
    doc! { "order": 1 }
}

/// Natural key for kinds identified by title within an owner's portfolio
fn title_key(owner: &str, title: &str) -> Document {
    doc! { "portfolioId": owner, "title": title }
}

/// Experience titles recur across employers, so the company joins the key
fn title_company_key(owner: &str, title: &str, company: &str) -> Document {
    doc! { "portfolioId": owner, "title": title, "company": company }
}

/// Fresh `updatedAt` value encoded the same way the document schemas
/// serialize their timestamps
fn updated_at_stamp() -> Result<Bson> {
    bson::to_bson(&Utc::now())
        .map_err(|e| VitrineError::Internal(format!("Failed to encode timestamp: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schemas::{AboutSection, Education, PersonalInfo};

    fn sample_personal() -> PersonalInfo {
        PersonalInfo {
            name: "Ada".to_string(),
            tagline: "Engineer".to_string(),
            email: "ada@example.com".to_string(),
            github: "https://github.com/ada".to_string(),
            linkedin: "https://linkedin.com/in/ada".to_string(),
            kaggle: "https://kaggle.com/ada".to_string(),
        }
    }

    fn sample_about() -> AboutSection {
        AboutSection {
            title: "About Me".to_string(),
            description: "Builds things.".to_string(),
            education: Education {
                institution: "Institute".to_string(),
                degree: "BSc".to_string(),
                duration: "2010 - 2014".to_string(),
            },
        }
    }

    #[test]
    fn test_title_key_scopes_to_owner() {
        let key = title_key("default", "Programming");
        assert_eq!(key.get_str("portfolioId").unwrap(), "default");
        assert_eq!(key.get_str("title").unwrap(), "Programming");
        assert_eq!(key.len(), 2);
    }

    #[test]
    fn test_experience_key_includes_company() {
        let key = title_company_key("default", "Engineer", "Acme");
        assert_eq!(key.get_str("company").unwrap(), "Acme");
        assert_eq!(key.len(), 3);
    }

    #[test]
    fn test_updated_at_stamp_matches_schema_serialization() {
        // Stamps written through `$set` must round-trip the same way the
        // typed documents serialize createdAt/updatedAt.
        let stamp = updated_at_stamp().unwrap();
        match stamp {
            Bson::String(s) => {
                assert!(chrono::DateTime::parse_from_rfc3339(&s).is_ok());
            }
            other => panic!("expected string timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_portfolio_response_serializes_expected_sections() {
        let response = PortfolioResponse {
            portfolio: PortfolioDoc::new("default", sample_personal(), sample_about()),
            skills: vec![],
            experiences: vec![],
            projects: vec![],
            achievements: vec![],
            publications: vec![],
        };

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        for section in [
            "portfolio",
            "skills",
            "experiences",
            "projects",
            "achievements",
            "publications",
        ] {
            assert!(object.contains_key(section), "missing section {}", section);
        }
        assert_eq!(object["portfolio"]["userId"], "default");
    }
}
