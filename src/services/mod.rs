//! Services layer for Vitrine
//!
//! Business logic sitting between the route handlers and the database
//! wrappers.
//!
//! ## Services
//!
//! - **PortfolioService**: CRUD, composite reads and seed migration for
//!   the portfolio and its child content kinds
//! - **Seed parsing**: JavaScript-wrapped JSON5 seed files and migration
//!   payloads

pub mod portfolio;
pub mod seed;

pub use portfolio::{MigrationReport, PortfolioResponse, PortfolioService};
pub use seed::{parse_seed, strip_js_wrapper, SeedData, SkillsSeed};
