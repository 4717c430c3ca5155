//! Database schemas for Vitrine
//!
//! Defines MongoDB document structures for the portfolio, its child
//! content kinds, and the legacy status checks.

mod achievement;
mod experience;
mod portfolio;
mod project;
mod publication;
mod skill;
mod status_check;

pub use achievement::{AchievementCreate, AchievementDoc, AchievementUpdate, ACHIEVEMENT_COLLECTION};
pub use experience::{ExperienceCreate, ExperienceDoc, ExperienceUpdate, EXPERIENCE_COLLECTION};
pub use portfolio::{
    AboutSection, AboutSectionUpdate, Education, PersonalInfo, PersonalInfoUpdate, PortfolioDoc,
    PORTFOLIO_COLLECTION,
};
pub use project::{ProjectCreate, ProjectDoc, ProjectUpdate, PROJECT_COLLECTION};
pub use publication::{PublicationCreate, PublicationDoc, PublicationUpdate, PUBLICATION_COLLECTION};
pub use skill::{SkillCategoryCreate, SkillCategoryDoc, SkillCategoryUpdate, SKILL_COLLECTION};
pub use status_check::{StatusCheckCreate, StatusCheckDoc, STATUS_CHECK_COLLECTION};
