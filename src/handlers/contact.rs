//! Contact CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, NameFilter};
use crate::model::{CreateContact, UpdateContact};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

pub async fn list(
    State(state): State<AppState>,
    NameFilter(name): NameFilter,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.contacts.list_contacts(name.as_deref()).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state
        .contacts
        .get_contact(id)
        .await?
        .ok_or(AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateContact>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.contacts.create_contact(body.name).await?;
    Ok((StatusCode::OK, Json(row)))
}

/// Existence is checked before the name, so an unknown id is 404 even with a blank name.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<UpdateContact>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let existing = state
        .contacts
        .get_contact(id)
        .await?
        .ok_or(AppError::NotFound(id_str))?;
    let row = state.contacts.update_contact(existing, body.name).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.contacts.delete_contact(id).await? {
        return Err(AppError::NotFound(id_str));
    }
    Ok(StatusCode::NO_CONTENT)
}
