//! Vitrine Import - one-shot seed data loader
//!
//! Reads a JS/JSON5 seed file, parses the portfolio sections out of it and
//! upserts them into MongoDB by natural key. Safe to re-run: existing
//! documents are replaced in place instead of duplicated.
//!
//! Usage:
//!   vitrine-import --seed-path ../frontend/src/data/mock.js
//!
//! Environment variables:
//!   SEED_DATA_PATH - Path to the seed file (default: ./mock.js)
//!   MONGODB_URI - MongoDB connection URI (default: mongodb://localhost:27017)
//!   MONGODB_DB - MongoDB database name (default: portfolio)
//!   PORTFOLIO_OWNER - Owner key the seed data is written under (default: default)
//!   LOG_LEVEL - Log level (default: info)

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitrine::db::MongoClient;
use vitrine::services::{parse_seed, PortfolioService};

#[derive(Parser, Debug)]
#[command(name = "vitrine-import")]
#[command(about = "One-shot portfolio seed data import")]
#[command(version)]
struct Args {
    /// Path to the seed file (mock.js export or plain JSON)
    #[arg(long, env = "SEED_DATA_PATH", default_value = "./mock.js")]
    seed_path: String,

    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "portfolio")]
    mongodb_db: String,

    /// Owner key the seed data is written under
    #[arg(long, env = "PORTFOLIO_OWNER", default_value = "default")]
    portfolio_owner: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vitrine={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Reading seed data from {}", args.seed_path);
    let content = match std::fs::read_to_string(&args.seed_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read {}: {}", args.seed_path, e);
            std::process::exit(1);
        }
    };

    let seed = match parse_seed(&content) {
        Ok(seed) => seed,
        Err(e) => {
            error!("Failed to parse seed data: {}", e);
            std::process::exit(1);
        }
    };

    let mongo = match MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await {
        Ok(client) => {
            info!("MongoDB connected successfully");
            client
        }
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let service = match PortfolioService::new(&mongo).await {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialize portfolio service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = service.migrate(&args.portfolio_owner, seed).await {
        error!("Data migration failed: {}", e);
        std::process::exit(1);
    }

    info!("Data migration completed successfully");

    // Re-read everything to confirm the import landed
    match service.get_portfolio(&args.portfolio_owner).await {
        Ok(Some(data)) => {
            info!("Verification passed:");
            info!("  Portfolio: {}", data.portfolio.personal.name);
            info!("  Skills: {} categories", data.skills.len());
            info!("  Experience: {} entries", data.experiences.len());
            info!("  Projects: {} projects", data.projects.len());
            info!("  Achievements: {} achievements", data.achievements.len());
            info!("  Publications: {} publications", data.publications.len());
        }
        Ok(None) => {
            error!("Verification failed: no data found after migration");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Verification failed: {}", e);
            std::process::exit(1);
        }
    }
}
