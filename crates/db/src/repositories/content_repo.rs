//! Repository for the `contents` table.

use medialib_core::types::ContentId;
use sqlx::PgPool;

use crate::models::content::{Content, ContentInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, description, image_url, duration, \
    start_time, end_time, genre_list, created_at, updated_at";

/// Provides CRUD operations for content records.
pub struct ContentRepo;

impl ContentRepo {
    /// Insert a new content record, returning the created row.
    ///
    /// The identifier is assigned by the database.
    pub async fn create(pool: &PgPool, input: &ContentInput) -> Result<Content, sqlx::Error> {
        let query = format!(
            "INSERT INTO contents
                (title, subtitle, description, image_url, duration,
                 start_time, end_time, genre_list)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.duration)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.genre_list)
            .fetch_one(pool)
            .await
    }

    /// Find a content record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: ContentId) -> Result<Option<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all content, ordered by creation time ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents ORDER BY created_at ASC");
        sqlx::query_as::<_, Content>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a content record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET
                title = $2,
                subtitle = $3,
                description = $4,
                image_url = $5,
                duration = $6,
                start_time = $7,
                end_time = $8,
                genre_list = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.duration)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.genre_list)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a content record by ID. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
