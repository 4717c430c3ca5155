//! HTTP routes for Vitrine

pub mod achievements;
pub mod experience;
pub mod health;
pub(crate) mod helpers;
pub mod migrate;
pub mod portfolio;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod status;

pub use achievements::handle_achievements_request;
pub use experience::handle_experience_request;
pub use health::{health_check, version_info};
pub use migrate::handle_migrate_request;
pub use portfolio::handle_portfolio_request;
pub use projects::handle_projects_request;
pub use publications::handle_publications_request;
pub use skills::handle_skills_request;
pub use status::handle_status_request;
