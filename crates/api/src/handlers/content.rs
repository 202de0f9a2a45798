//! Handlers for the `/content` resource.
//!
//! Reads go through the cache-aside path (a cache hit skips the store; a
//! miss fetches and populates). Writes go to the store first and then
//! refresh the cache entry with the authoritative returned row.

use axum::extract::{Path, Query, State};
use axum::Json;
use medialib_core::genre;
use medialib_core::types::ContentId;
use medialib_db::models::content::{Content, ContentInput};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /content`.
///
/// Both filters are optional; blank values are treated as absent.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
    pub genre: Option<String>,
}

/// Response body for `DELETE /content/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedContent {
    pub id: ContentId,
}

/// GET /api/v1/content[?title=&genre=]
///
/// `title` filters by case-insensitive substring, `genre` by
/// case-insensitive exact match; they compose with AND. An empty result
/// set is reported as 404 per the API contract.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Content>>> {
    let contents = state
        .manager
        .get_filtered(params.title.as_deref(), params.genre.as_deref())
        .await?;

    if contents.is_empty() {
        return Err(AppError::NoContent);
    }
    Ok(Json(contents))
}

/// GET /api/v1/content/{id}
///
/// Cache-aside: a cache hit never consults the store; a miss consults the
/// store and populates the cache on success. A not-found leaves the cache
/// untouched.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
) -> AppResult<Json<Content>> {
    if let Some(content) = state.cache.get(id).await {
        tracing::debug!(%id, "Serving content from cache");
        return Ok(Json(content));
    }

    let content = state
        .manager
        .get(id)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;
    state.cache.set(id, content.clone()).await;
    Ok(Json(content))
}

/// POST /api/v1/content
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContentInput>,
) -> AppResult<Json<Content>> {
    let content = state.manager.create(&input).await?;
    tracing::info!(id = %content.id, title = %content.title, "Created content");

    state.cache.set(content.id, content.clone()).await;
    Ok(Json(content))
}

/// PATCH /api/v1/content/{id}
///
/// Full replace of the mutable fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(input): Json<ContentInput>,
) -> AppResult<Json<Content>> {
    let content = state
        .manager
        .update(id, &input)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;
    tracing::info!(%id, "Updated content");

    state.cache.set(id, content.clone()).await;
    Ok(Json(content))
}

/// DELETE /api/v1/content/{id}
///
/// The cache entry is dropped only after the store confirms the delete; a
/// not-found delete leaves any cached entry untouched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
) -> AppResult<Json<DeletedContent>> {
    let deleted = state
        .manager
        .delete(id)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;
    tracing::info!(%id, "Deleted content");

    state.cache.remove(id).await;
    Ok(Json(DeletedContent { id: deleted }))
}

/// POST /api/v1/content/{id}/genre
///
/// Appends every genre in the body, or none: the first candidate already
/// on the record aborts the whole request with a 400.
pub async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> AppResult<Json<Content>> {
    let current = state
        .manager
        .get(id)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;

    let merged = genre::merge_genres(&current.genre_list, &genres)?;

    let mut input = current.to_input();
    input.genre_list = merged;
    let updated = state
        .manager
        .update(id, &input)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;
    tracing::info!(%id, added = genres.len(), "Added genres");

    state.cache.set(id, updated.clone()).await;
    Ok(Json(updated))
}

/// DELETE /api/v1/content/{id}/genre
///
/// Removes every matching genre; genres in the body that are not on the
/// record are ignored.
pub async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> AppResult<Json<Content>> {
    let current = state
        .manager
        .get(id)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;

    let mut input = current.to_input();
    input.genre_list = genre::remove_genres(&current.genre_list, &genres);
    let updated = state
        .manager
        .update(id, &input)
        .await?
        .ok_or(AppError::ContentNotFound(id))?;
    tracing::info!(%id, "Removed genres");

    state.cache.set(id, updated.clone()).await;
    Ok(Json(updated))
}
