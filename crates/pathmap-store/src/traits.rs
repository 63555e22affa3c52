use pathmap_types::{FileInfo, FileRecord};

use crate::error::StoreResult;

/// Metadata index mapping logical paths to physical files.
///
/// Implementations must tolerate concurrent inserts for distinct
/// `(filesystem, path)` pairs. Errors are propagated to the writer, never
/// swallowed.
pub trait PathDb: Send + Sync {
    /// Record a completed write.
    ///
    /// Called once per successful write session, after the physical sink is
    /// closed. Backends report failures as [`StoreError::MetadataInsert`].
    ///
    /// [`StoreError::MetadataInsert`]: crate::StoreError::MetadataInsert
    fn insert(&self, record: &FileRecord) -> StoreResult<()>;
}

/// Physical byte-storage backend.
///
/// Must tolerate concurrent deletes for distinct file ids.
pub trait PhysicalStore: Send + Sync {
    /// Delete a physical artifact. Returns `true` if it existed.
    fn delete(&self, file: &FileInfo) -> StoreResult<bool>;
}
