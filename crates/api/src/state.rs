/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only storage handle handlers ever see; it is passed
/// explicitly into each repository call. Cloning is cheap (the pool is
/// reference counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookshelf_db::DbPool,
}
