//! The committed metadata record for a logical path.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::file_info::FileInfo;
use crate::temporal::{expiration_for, Timestamp};

/// Metadata linking a logical path to the physical file holding its bytes.
///
/// A record exists only for writes that completed without error. Field names
/// are a stable serialized contract for downstream readers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Logical filesystem namespace.
    pub filesystem: String,
    /// Logical path within the namespace.
    pub path: String,
    pub created_at: Timestamp,
    /// Absent when no time-to-live was configured.
    pub expires_at: Option<Timestamp>,
    pub file_id: String,
    /// Total size in bytes.
    pub size: u64,
    pub file_storage: String,
    /// Lowercase hex digest; absent when no checksum algorithm was configured.
    pub checksum: Option<String>,
}

impl FileRecord {
    /// Assemble a record for a completed write, deriving expiry from `ttl_ms`.
    pub fn committed(
        filesystem: impl Into<String>,
        path: impl Into<String>,
        file: &FileInfo,
        size: u64,
        checksum: Option<String>,
        created_at: Timestamp,
        ttl_ms: i64,
    ) -> Self {
        Self {
            filesystem: filesystem.into(),
            path: path.into(),
            created_at,
            expires_at: expiration_for(created_at, ttl_ms),
            file_id: file.file_id.clone(),
            size,
            file_storage: file.file_storage.clone(),
            checksum,
        }
    }

    /// Physical coordinates this record points at.
    pub fn file_info(&self) -> FileInfo {
        FileInfo {
            file_id: self.file_id.clone(),
            file_storage: self.file_storage.clone(),
        }
    }

    /// Check the structural invariants a persisted record must satisfy.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.filesystem.is_empty() {
            return Err(TypeError::EmptyField("filesystem"));
        }
        if self.path.is_empty() {
            return Err(TypeError::EmptyField("path"));
        }
        if self.file_id.is_empty() {
            return Err(TypeError::EmptyField("file_id"));
        }
        if let Some(sum) = &self.checksum {
            let lower_hex = !sum.is_empty()
                && sum
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
            if !lower_hex {
                return Err(TypeError::InvalidChecksum(sum.clone()));
            }
        }
        Ok(())
    }
}
