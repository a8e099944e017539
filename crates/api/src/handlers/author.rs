//! Handlers for the `/authors` resource.
//!
//! Every handler issues exactly one repository call. Extractor rejections
//! are converted into [`AppError`] so all failures share the JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::author_filter::AuthorFilter;
use bookshelf_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use bookshelf_db::repositories::AuthorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AuthorId;
use crate::query::AuthorSearchParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/authors
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthor>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let Json(input) = payload?;
    let author = AuthorRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::storage_write("create"))?;

    tracing::info!(author_id = author.id, "Author created");

    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /api/v1/authors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool)
        .await
        .map_err(AppError::StorageRead)?;
    Ok(Json(authors))
}

/// GET /api/v1/authors/search?paramType={genre|nationality|name}&paramValue=...
///
/// A repeated key uses its first value.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Author>>> {
    let params = AuthorSearchParams::from(pairs);
    let filter = AuthorFilter::parse(params.param_type.as_deref(), params.param_value.as_deref())?;

    let authors = AuthorRepo::search(&state.pool, &filter)
        .await
        .map_err(AppError::StorageRead)?;

    tracing::debug!(
        filter = filter.kind(),
        matches = authors.len(),
        "Author search completed",
    );

    Ok(Json(authors))
}

/// GET /api/v1/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
) -> AppResult<Json<Author>> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::StorageRead)?
        .ok_or_else(|| AppError::author_not_found(id))?;
    Ok(Json(author))
}

/// PUT|PATCH /api/v1/authors/{id}
///
/// Fields omitted from the body keep their stored value. A missing author
/// is reported before a malformed body.
pub async fn update(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
    payload: Result<Json<UpdateAuthor>, JsonRejection>,
) -> AppResult<Json<Author>> {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            AuthorRepo::find_by_id(&state.pool, id)
                .await
                .map_err(AppError::StorageRead)?
                .ok_or_else(|| AppError::author_not_found(id))?;
            return Err(rejection.into());
        }
    };
    let author = AuthorRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::storage_write("update"))?
        .ok_or_else(|| AppError::author_not_found(id))?;

    tracing::info!(author_id = id, "Author updated");

    Ok(Json(author))
}

/// DELETE /api/v1/authors/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthorId(id): AuthorId,
) -> AppResult<Json<MessageResponse>> {
    let deleted = AuthorRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::storage_write("delete"))?;

    if !deleted {
        return Err(AppError::author_not_found(id));
    }

    tracing::info!(author_id = id, "Author deleted");

    Ok(Json(MessageResponse {
        message: "Author deleted",
    }))
}
