//! HTTP routes for projects
//!
//! - GET    /api/projects      - List projects in display order
//! - POST   /api/projects      - Create a project
//! - PUT    /api/projects/{id} - Partial update by record id
//! - DELETE /api/projects/{id} - Delete by record id

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{ProjectCreate, ProjectUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, id_segment, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

const BASE: &str = "/api/projects";

/// Dispatch project routes. Returns `None` for paths outside this family.
pub async fn handle_projects_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    if path == BASE {
        return Some(match method {
            Method::GET => list_projects(state).await,
            Method::POST => create_project(req, state).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    if let Some(id) = id_segment(&path, BASE) {
        return Some(match method {
            Method::PUT => update_project(req, state, id).await,
            Method::DELETE => delete_project(state, id).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    None
}

async fn list_projects(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_projects(state.owner()).await {
        Ok(projects) => json_response(StatusCode::OK, &projects),
        Err(e) => error_response(e),
    }
}

async fn create_project(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: ProjectCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_project(state.owner(), create).await {
        Ok(project) => json_response(StatusCode::OK, &project),
        Err(e) => error_response(e),
    }
}

async fn update_project(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<BoxBody> {
    let updates: ProjectUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_project(id, &updates).await {
        Ok(true) => message_response("Project updated successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Project not found"),
        Err(e) => error_response(e),
    }
}

async fn delete_project(state: Arc<AppState>, id: &str) -> Response<BoxBody> {
    match state.service.delete_project(id).await {
        Ok(true) => message_response("Project deleted successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Project not found"),
        Err(e) => error_response(e),
    }
}
