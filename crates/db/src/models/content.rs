//! Content entity model and DTOs.

use medialib_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    /// Runtime in minutes.
    pub duration: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Ordered; duplicates are rejected on add-genre requests but not
    /// deduplicated here.
    pub genre_list: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Content {
    /// Project the row back into its input shape, for read-modify-write
    /// updates that replace the full mutable field set.
    pub fn to_input(&self) -> ContentInput {
        ContentInput {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genre_list: self.genre_list.clone(),
        }
    }
}

/// DTO accepted on create and update.
///
/// Covers every mutable field; an update is a full replace, not a merge.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentInput {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub duration: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub genre_list: Vec<String>,
}
