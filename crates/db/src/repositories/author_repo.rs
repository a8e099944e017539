//! Repository for the `authors` table.

use bookshelf_core::author_filter::{like_contains_pattern, AuthorFilter};
use bookshelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, nationality, created_at, updated_at";

/// Same columns qualified with the `a` alias, for joined queries.
const QUALIFIED_COLUMNS: &str = "a.id, a.name, a.nationality, a.created_at, a.updated_at";

/// Provides CRUD and search operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, nationality)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(&input.nationality)
            .fetch_one(pool)
            .await
    }

    /// Find an author by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every author, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM authors ORDER BY id");
        sqlx::query_as::<_, Author>(&query).fetch_all(pool).await
    }

    /// List authors matching a search filter, ordered by ID.
    ///
    /// - `Genre`: authors with at least one book in the genre, each listed once.
    /// - `Nationality`: exact match.
    /// - `NameContains`: case-sensitive substring match via `LIKE`.
    pub async fn search(pool: &PgPool, filter: &AuthorFilter) -> Result<Vec<Author>, sqlx::Error> {
        match filter {
            AuthorFilter::Genre(genre_id) => {
                let query = format!(
                    "SELECT DISTINCT {QUALIFIED_COLUMNS}
                     FROM authors a
                     INNER JOIN books b ON b.author_id = a.id
                     INNER JOIN genres g ON g.id = b.genre_id
                     WHERE g.id = $1
                     ORDER BY a.id"
                );
                sqlx::query_as::<_, Author>(&query)
                    .bind(genre_id)
                    .fetch_all(pool)
                    .await
            }
            AuthorFilter::Nationality(nationality) => {
                let query =
                    format!("SELECT {COLUMNS} FROM authors WHERE nationality = $1 ORDER BY id");
                sqlx::query_as::<_, Author>(&query)
                    .bind(nationality)
                    .fetch_all(pool)
                    .await
            }
            AuthorFilter::NameContains(fragment) => {
                let query = format!("SELECT {COLUMNS} FROM authors WHERE name LIKE $1 ORDER BY id");
                sqlx::query_as::<_, Author>(&query)
                    .bind(like_contains_pattern(fragment))
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update an author. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                name = COALESCE($2, name),
                nationality = COALESCE($3, nationality),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.nationality)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an author by ID. Returns `true` if a row was removed.
    ///
    /// The author's books go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
