//! Write-through in-memory cache for content records.

use std::collections::HashMap;

use medialib_core::types::ContentId;
use medialib_db::models::content::Content;
use tokio::sync::RwLock;

/// Keyed cache of content records, one entry per identifier.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Entries have no TTL and are never
/// evicted; they live until explicitly removed or process restart. The
/// database stays the source of truth -- this only ever holds values the
/// persistence layer has already returned.
#[derive(Default)]
pub struct ContentCache {
    entries: RwLock<HashMap<ContentId, Content>>,
}

impl ContentCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached record by ID.
    pub async fn get(&self, id: ContentId) -> Option<Content> {
        self.entries.read().await.get(&id).cloned()
    }

    /// Insert or overwrite the entry for `id`.
    pub async fn set(&self, id: ContentId, content: Content) {
        self.entries.write().await.insert(id, content);
    }

    /// Drop the entry for `id`, if present.
    pub async fn remove(&self, id: ContentId) {
        self.entries.write().await.remove(&id);
    }
}
