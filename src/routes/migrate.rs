//! Seed migration route
//!
//! POST /api/migrate accepts a full seed object as JSON and writes it
//! through the same natural-key upsert path the import binary uses.
//! Failures report 422 so callers can distinguish a rejected payload from
//! transport problems.

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;
use tracing::{error, info};

use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, message_response, method_not_allowed,
    parse_json_body_with_limit, BoxBody, MIGRATE_BODY_LIMIT,
};
use crate::server::AppState;
use crate::services::SeedData;

/// Dispatch the migration route. Returns `None` for other paths.
pub async fn handle_migrate_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();

    if path != "/api/migrate" {
        return None;
    }

    let method = req.method().clone();
    Some(match method {
        Method::POST => migrate(req, state).await,
        Method::OPTIONS => cors_preflight(),
        _ => method_not_allowed(),
    })
}

/// POST /api/migrate
async fn migrate(req: Request<hyper::body::Incoming>, state: Arc<AppState>) -> Response<BoxBody> {
    let seed: SeedData = match parse_json_body_with_limit(req, MIGRATE_BODY_LIMIT).await {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };

    match state.service.migrate(state.owner(), seed).await {
        Ok(report) => {
            info!(
                "Migration complete: {} skills, {} experiences, {} projects, {} achievements, {} publications",
                report.skills,
                report.experiences,
                report.projects,
                report.achievements,
                report.publications
            );
            message_response("Data migrated successfully")
        }
        Err(e) => {
            error!("Migration failed: {}", e);
            detail_response(StatusCode::UNPROCESSABLE_ENTITY, "Migration failed")
        }
    }
}
