use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Physical coordinates of a file held by a byte-storage backend.
///
/// `file_id` names the artifact; `file_storage` is the backend-specific
/// location tag (for the filesystem backend, a relative directory).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_id: String,
    pub file_storage: String,
}

impl FileInfo {
    /// Create file coordinates, rejecting empty components.
    pub fn new(
        file_id: impl Into<String>,
        file_storage: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let file_id = file_id.into();
        let file_storage = file_storage.into();
        if file_id.is_empty() {
            return Err(TypeError::EmptyField("file_id"));
        }
        if file_storage.is_empty() {
            return Err(TypeError::EmptyField("file_storage"));
        }
        Ok(Self {
            file_id,
            file_storage,
        })
    }

    /// Mint coordinates for a brand-new artifact.
    ///
    /// The id is a UUID v7 (time-ordered); the storage tag fans out on the
    /// first four hex characters as `ab/cd` so no single directory grows
    /// unbounded.
    pub fn generate() -> Self {
        let file_id = Uuid::now_v7().simple().to_string();
        let file_storage = format!("{}/{}", &file_id[..2], &file_id[2..4]);
        Self {
            file_id,
            file_storage,
        }
    }
}

impl fmt::Debug for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileInfo({}@{})", self.file_id, self.file_storage)
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.file_storage, self.file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_id() {
        assert_eq!(
            FileInfo::new("", "aa/bb").unwrap_err(),
            TypeError::EmptyField("file_id")
        );
    }

    #[test]
    fn new_rejects_empty_storage() {
        assert_eq!(
            FileInfo::new("abc", "").unwrap_err(),
            TypeError::EmptyField("file_storage")
        );
    }

    #[test]
    fn generate_is_unique() {
        let a = FileInfo::generate();
        let b = FileInfo::generate();
        assert_ne!(a.file_id, b.file_id);
    }

    #[test]
    fn generate_storage_fans_out_on_id_prefix() {
        let info = FileInfo::generate();
        assert_eq!(info.file_id.len(), 32);
        assert_eq!(
            info.file_storage,
            format!("{}/{}", &info.file_id[..2], &info.file_id[2..4])
        );
    }

    #[test]
    fn display_is_relative_location() {
        let info = FileInfo::new("f1", "aa/bb").unwrap();
        assert_eq!(info.to_string(), "aa/bb/f1");
    }
}
