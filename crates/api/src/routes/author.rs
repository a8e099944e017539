//! Route definitions for authors.

use axum::routing::get;
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/authors`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /search    -> search
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(author::list).post(author::create))
        .route("/search", get(author::search))
        .route(
            "/{id}",
            get(author::get_by_id)
                .put(author::update)
                .patch(author::update)
                .delete(author::delete),
        )
}
