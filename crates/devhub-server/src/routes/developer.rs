//! Developer Routes - Registry CRUD
//!
//! HTTP handlers that delegate to DeveloperService for business logic.
//! Absent records and not-applicable mutations both become 404 here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use devhub::{DeveloperChanges, Mutation};
use validator::Validate;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::models::{CreateDeveloperRequest, DeveloperResponse, UpdateDeveloperRequest};
use crate::AppState;

/// Create new Developer
#[utoipa::path(
    post,
    path = "/developers",
    request_body = CreateDeveloperRequest,
    responses(
        (status = 201, description = "Developer created successfully", body = DeveloperResponse),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Developer"
)]
pub async fn create_developer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDeveloperRequest>,
) -> Result<(StatusCode, Json<DeveloperResponse>), ApiError> {
    payload.validate()?;

    let developer = state.developer_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(developer.into())))
}

/// List all Developers
#[utoipa::path(
    get,
    path = "/developers",
    responses(
        (status = 200, description = "List of all Developers", body = Vec<DeveloperResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Developer"
)]
pub async fn list_developers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeveloperResponse>>, ApiError> {
    let developers = state.developer_service.find_all().await?;

    Ok(Json(developers.into_iter().map(Into::into).collect()))
}

/// Get Developer by ID
#[utoipa::path(
    get,
    path = "/developers/{id}",
    params(
        ("id" = String, Path, description = "Developer ID")
    ),
    responses(
        (status = 200, description = "Developer found", body = DeveloperResponse),
        (status = 404, description = "Developer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Developer"
)]
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeveloperResponse>, ApiError> {
    let developer = state
        .developer_service
        .find_one(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Developer not found"))?;

    Ok(Json(developer.into()))
}

/// Update Developer (partial)
#[utoipa::path(
    patch,
    path = "/developers/{id}",
    params(
        ("id" = String, Path, description = "Developer ID")
    ),
    request_body = UpdateDeveloperRequest,
    responses(
        (status = 200, description = "Developer updated successfully", body = DeveloperResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Developer not found"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Developer"
)]
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateDeveloperRequest>,
) -> Result<Json<DeveloperResponse>, ApiError> {
    payload.validate()?;
    let changes: DeveloperChanges = payload.into();

    match state.developer_service.update(&id, &changes).await? {
        Mutation::Applied(developer) => Ok(Json(developer.into())),
        Mutation::NotApplicable => {
            tracing::warn!("Update skipped, Developer {} not found", id);
            Err(ApiError::not_found("Developer not found"))
        }
    }
}

/// Delete Developer
#[utoipa::path(
    delete,
    path = "/developers/{id}",
    params(
        ("id" = String, Path, description = "Developer ID")
    ),
    responses(
        (status = 204, description = "Developer deleted successfully"),
        (status = 404, description = "Developer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Developer"
)]
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.developer_service.remove(&id).await? {
        Mutation::Applied(_) => Ok(StatusCode::NO_CONTENT),
        Mutation::NotApplicable => {
            tracing::warn!("Delete skipped, Developer {} not found", id);
            Err(ApiError::not_found("Developer not found"))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/developers", get(list_developers).post(create_developer))
        .route(
            "/developers/:id",
            get(get_developer)
                .patch(update_developer)
                .delete(delete_developer),
        )
}
