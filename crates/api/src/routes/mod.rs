pub mod author;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /authors                                         list, create
/// /authors/search?paramType=&paramValue=           filtered query
/// /authors/{id}                                    get, update (PUT/PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/authors", author::router())
}
