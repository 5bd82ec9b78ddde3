/// All primary keys are UUIDs assigned by the database (`gen_random_uuid()`).
///
/// Identifiers cross the wire as their canonical string form; anything that
/// does not parse as a UUID is a malformed reference and rejected before it
/// reaches the store.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
