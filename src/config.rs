//! Configuration for Vitrine
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Vitrine - portfolio content API
#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine")]
#[command(about = "Portfolio content API over MongoDB")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8001")]
    pub listen: SocketAddr,

    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "portfolio")]
    pub mongodb_db: String,

    /// Owner key the portfolio content is scoped to.
    /// Single-owner deployment: every route reads and writes this owner's
    /// documents. Multi-owner isolation is out of scope.
    #[arg(long, env = "PORTFOLIO_OWNER", default_value = "default")]
    pub portfolio_owner: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mongodb_db.trim().is_empty() {
            return Err("MONGODB_DB must not be empty".to_string());
        }

        if self.portfolio_owner.trim().is_empty() {
            return Err("PORTFOLIO_OWNER must not be empty".to_string());
        }

        Ok(())
    }
}
