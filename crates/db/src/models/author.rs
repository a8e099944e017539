//! Author entity model and DTOs.

use bookshelf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An author row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub nationality: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new author. Any `id` in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub nationality: String,
}

/// DTO for updating an existing author. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub nationality: Option<String>,
}
