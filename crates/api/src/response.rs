//! Shared response body types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` confirmation body, used where an operation has
/// no entity left to return (e.g. after a delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
