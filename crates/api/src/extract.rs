//! Custom request extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use bookshelf_core::types::DbId;

use crate::error::AppError;

/// Author id taken from the `{id}` path segment.
///
/// Rejects anything that is not a base-10 integer with
/// [`AppError::InvalidIdentifier`], so handlers never see a raw string:
///
/// ```ignore
/// async fn get_by_id(State(state): State<AppState>, AuthorId(id): AuthorId) -> AppResult<Json<Author>> {
///     // `id` is already a `DbId`
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorId(pub DbId);

impl<S> FromRequestParts<S> for AuthorId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        raw.parse::<DbId>()
            .map(AuthorId)
            .map_err(|_| AppError::InvalidIdentifier(raw))
    }
}
