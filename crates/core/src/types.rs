/// Store-assigned document identifier (PostgreSQL `gen_random_uuid()`).
pub type DocumentId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
