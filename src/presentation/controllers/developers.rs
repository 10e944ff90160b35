//! REST controller for the developer collection and item routes

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};

use crate::application::{ApplicationError, ensure_same_id};
use crate::domain::DeveloperId;
use crate::presentation::controllers::AppState;
use crate::presentation::models::{
    CreateDeveloperRequest, DeveloperDto, ErrorResponse, UpdateDeveloperRequest,
};

/// List every developer in insertion order
#[utoipa::path(
    get,
    path = "/api/devs",
    tag = "developers",
    responses(
        (status = 200, description = "All developers", body = [DeveloperDto]),
        (status = 500, description = "Store could not be read", body = ErrorResponse)
    )
)]
pub async fn list_developers(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<DeveloperDto>>, ApplicationError> {
    let developers = app_state.developer_service.list_developers().await?;
    Ok(Json(developers.into_iter().map(DeveloperDto::from).collect()))
}

/// Create a developer; the store assigns the id
#[utoipa::path(
    post,
    path = "/api/devs",
    tag = "developers",
    request_body = CreateDeveloperRequest,
    responses(
        (status = 200, description = "Developer created", body = DeveloperDto),
        (status = 400, description = "Malformed, incomplete or invalid body", body = ErrorResponse)
    )
)]
pub async fn create_developer(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateDeveloperRequest>, JsonRejection>,
) -> Result<Json<DeveloperDto>, ApplicationError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let created = app_state
        .developer_service
        .add_developer(request.into())
        .await?;
    Ok(Json(created.into()))
}

/// Fetch one developer; an unknown id yields `null`
#[utoipa::path(
    get,
    path = "/api/devs/{id}",
    tag = "developers",
    params(("id" = String, Path, description = "Developer id")),
    responses(
        (status = 200, description = "The developer, or null when absent", body = DeveloperDto),
        (status = 500, description = "Store could not be read", body = ErrorResponse)
    )
)]
pub async fn get_developer(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<DeveloperDto>>, ApplicationError> {
    let Ok(id) = DeveloperId::new(id) else {
        return Ok(Json(None));
    };
    let developer = app_state.developer_service.get_developer(&id).await?;
    Ok(Json(developer.map(DeveloperDto::from)))
}

/// Replace the submitted fields of an existing developer
#[utoipa::path(
    patch,
    path = "/api/devs/{id}",
    tag = "developers",
    params(("id" = String, Path, description = "Developer id")),
    request_body = UpdateDeveloperRequest,
    responses(
        (status = 200, description = "Developer updated", body = DeveloperDto),
        (status = 400, description = "Invalid body, id mismatch or unknown developer", body = ErrorResponse)
    )
)]
pub async fn update_developer(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDeveloperRequest>, JsonRejection>,
) -> Result<Json<DeveloperDto>, ApplicationError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let id = DeveloperId::new(id)?;
    let (body_id, patch) = request.into_parts();
    ensure_same_id(&id, body_id.as_deref())?;

    let updated = app_state.developer_service.edit_developer(&id, patch).await?;
    Ok(Json(updated.into()))
}

fn invalid_body(rejection: JsonRejection) -> ApplicationError {
    ApplicationError::InvalidRequest {
        message: rejection.body_text(),
    }
}
