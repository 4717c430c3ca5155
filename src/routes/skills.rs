//! HTTP routes for skill categories
//!
//! - GET    /api/skills      - List categories in display order
//! - POST   /api/skills      - Create a category
//! - PUT    /api/skills/{id} - Partial update by record id
//! - DELETE /api/skills/{id} - Delete by record id

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{SkillCategoryCreate, SkillCategoryUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, id_segment, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

const BASE: &str = "/api/skills";

/// Dispatch skill-category routes. Returns `None` for paths outside this
/// family.
pub async fn handle_skills_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    if path == BASE {
        return Some(match method {
            Method::GET => list_skills(state).await,
            Method::POST => create_skill(req, state).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    if let Some(id) = id_segment(&path, BASE) {
        return Some(match method {
            Method::PUT => update_skill(req, state, id).await,
            Method::DELETE => delete_skill(state, id).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    None
}

async fn list_skills(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_skills(state.owner()).await {
        Ok(skills) => json_response(StatusCode::OK, &skills),
        Err(e) => error_response(e),
    }
}

async fn create_skill(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: SkillCategoryCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_skill(state.owner(), create).await {
        Ok(skill) => json_response(StatusCode::OK, &skill),
        Err(e) => error_response(e),
    }
}

async fn update_skill(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<BoxBody> {
    let updates: SkillCategoryUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_skill(id, &updates).await {
        Ok(true) => message_response("Skill category updated successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Skill category not found"),
        Err(e) => error_response(e),
    }
}

async fn delete_skill(state: Arc<AppState>, id: &str) -> Response<BoxBody> {
    match state.service.delete_skill(id).await {
        Ok(true) => message_response("Skill category deleted successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Skill category not found"),
        Err(e) => error_response(e),
    }
}
