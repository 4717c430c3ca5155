//! Vitrine - Portfolio API server
//!
//! REST backend for a personal portfolio site: a single portfolio
//! document per owner plus ordered lists of skills, experience, projects,
//! achievements and publications, stored in MongoDB and served under
//! `/api` routes.
//!
//! ## Modules
//!
//! - **config**: CLI and environment configuration
//! - **db**: MongoDB client, typed collections and document schemas
//! - **services**: Portfolio CRUD, composite reads and seed migration
//! - **routes**: HTTP handlers for the `/api` surface and health probes
//! - **server**: hyper HTTP/1.1 server and request dispatch

pub mod config;
pub mod db;
pub mod routes;
pub mod server;
pub mod services;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{Result, VitrineError};
