//! HTTP routes for work experience entries
//!
//! The path segment is singular (`/api/experience`) while the composite
//! read labels the list `experiences`; both names are part of the wire
//! contract.
//!
//! - GET    /api/experience      - List entries in display order
//! - POST   /api/experience      - Create an entry
//! - PUT    /api/experience/{id} - Partial update by record id
//! - DELETE /api/experience/{id} - Delete by record id

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{ExperienceCreate, ExperienceUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, id_segment, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

const BASE: &str = "/api/experience";

/// Dispatch experience routes. Returns `None` for paths outside this
/// family.
pub async fn handle_experience_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    if path == BASE {
        return Some(match method {
            Method::GET => list_experiences(state).await,
            Method::POST => create_experience(req, state).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    if let Some(id) = id_segment(&path, BASE) {
        return Some(match method {
            Method::PUT => update_experience(req, state, id).await,
            Method::DELETE => delete_experience(state, id).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    None
}

async fn list_experiences(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_experiences(state.owner()).await {
        Ok(experiences) => json_response(StatusCode::OK, &experiences),
        Err(e) => error_response(e),
    }
}

async fn create_experience(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: ExperienceCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_experience(state.owner(), create).await {
        Ok(experience) => json_response(StatusCode::OK, &experience),
        Err(e) => error_response(e),
    }
}

async fn update_experience(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<BoxBody> {
    let updates: ExperienceUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_experience(id, &updates).await {
        Ok(true) => message_response("Experience updated successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Experience not found"),
        Err(e) => error_response(e),
    }
}

async fn delete_experience(state: Arc<AppState>, id: &str) -> Response<BoxBody> {
    match state.service.delete_experience(id).await {
        Ok(true) => message_response("Experience deleted successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Experience not found"),
        Err(e) => error_response(e),
    }
}
