//! Business layer between the HTTP handlers and the content repository.

use medialib_core::filter;
use medialib_core::types::ContentId;
use medialib_db::models::content::{Content, ContentInput};
use medialib_db::repositories::ContentRepo;
use medialib_db::DbPool;

/// Orchestrates repository CRUD calls and in-process listing filters.
///
/// Cheaply cloneable: holds only the pool handle.
#[derive(Clone)]
pub struct ContentManager {
    pool: DbPool,
}

impl ContentManager {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All persisted content, unfiltered.
    pub async fn get_many(&self) -> Result<Vec<Content>, sqlx::Error> {
        ContentRepo::list_all(&self.pool).await
    }

    /// Create a new content record; the identifier is assigned by the store.
    pub async fn create(&self, input: &ContentInput) -> Result<Content, sqlx::Error> {
        ContentRepo::create(&self.pool, input).await
    }

    /// Look up a content record, `None` if the identifier is unknown.
    pub async fn get(&self, id: ContentId) -> Result<Option<Content>, sqlx::Error> {
        ContentRepo::find_by_id(&self.pool, id).await
    }

    /// Full replace of the mutable fields, `None` if the identifier is
    /// unknown.
    pub async fn update(
        &self,
        id: ContentId,
        input: &ContentInput,
    ) -> Result<Option<Content>, sqlx::Error> {
        ContentRepo::update(&self.pool, id, input).await
    }

    /// Delete a content record, returning its identifier, or `None` if
    /// unknown.
    pub async fn delete(&self, id: ContentId) -> Result<Option<ContentId>, sqlx::Error> {
        let deleted = ContentRepo::delete(&self.pool, id).await?;
        Ok(deleted.then_some(id))
    }

    /// Fetch all content, then filter in-process.
    ///
    /// A non-blank `title` keeps entries whose title contains it
    /// case-insensitively; a non-blank `genre` keeps entries with at least
    /// one genre equal to it case-insensitively (exact match). The filters
    /// are independently optional and compose with logical AND. There is no
    /// filter pushdown to the store.
    pub async fn get_filtered(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Content>, sqlx::Error> {
        let mut contents = self.get_many().await?;

        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            contents.retain(|content| filter::title_contains(&content.title, title));
        }
        if let Some(genre) = genre.filter(|g| !g.trim().is_empty()) {
            contents.retain(|content| filter::has_genre(&content.genre_list, genre));
        }

        Ok(contents)
    }
}
