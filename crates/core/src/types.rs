/// All record ids are server-assigned UUIDs.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identity capability shared by every persisted record.
///
/// A record without an id has never been saved; the repository uses
/// this to decide between insert and update.
pub trait Identified {
    /// The record id, if one has been assigned by the store.
    fn id(&self) -> Option<DbId>;

    /// Whether this record has not yet been persisted.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
