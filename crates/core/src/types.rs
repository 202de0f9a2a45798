/// Content identifiers are UUIDs assigned by the database at insert time.
pub type ContentId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
