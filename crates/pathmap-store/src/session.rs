//! Checksummed write sessions that commit path metadata only on success.
//!
//! A [`WriteSession`] owns the sink for one physical artifact. Every byte is
//! forwarded to the sink and, once the sink accepts it, counted and fed to
//! the checksum. The first sink failure deletes the artifact before the error
//! reaches the caller, and the session then refuses to commit. A clean close
//! inserts exactly one [`FileRecord`] into the metadata index.
//!
//! Sessions are single-writer. They hold no locks; sharing one across threads
//! is unsupported.

use std::io::{self, Write};
use std::sync::Arc;

use chrono::Utc;
use pathmap_crypto::{ChecksumAccumulator, ChecksumAlgorithm};
use pathmap_types::{FileInfo, FileRecord, TypeError};
use tracing::{debug, error, info, warn};

use crate::config::StorageConfig;
use crate::error::{StoreError, StoreResult};
use crate::sink::ByteSink;
use crate::traits::{PathDb, PhysicalStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Open,
    /// A write failed; the artifact was handed to the backend for deletion.
    Failed(io::ErrorKind),
    Closed,
}

/// One logical write: bytes in, at most one committed [`FileRecord`] out.
pub struct WriteSession<S: ByteSink> {
    path_db: Arc<dyn PathDb>,
    physical: Arc<dyn PhysicalStore>,
    filesystem: String,
    path: String,
    file_info: FileInfo,
    sink: Option<S>,
    checksum: Option<ChecksumAccumulator>,
    ttl_ms: i64,
    size: u64,
    state: SessionState,
}

impl<S: ByteSink> WriteSession<S> {
    /// Bind a session to `sink` for the logical `(filesystem, path)`.
    ///
    /// The checksum algorithm and TTL come from `config`. An unknown
    /// algorithm or an empty `filesystem`/`path` fails here, before any byte
    /// reaches the sink, since no record could ever be committed for them.
    pub fn new(
        path_db: Arc<dyn PathDb>,
        physical: Arc<dyn PhysicalStore>,
        filesystem: impl Into<String>,
        path: impl Into<String>,
        file_info: FileInfo,
        sink: S,
        config: &StorageConfig,
    ) -> StoreResult<Self> {
        let filesystem = filesystem.into();
        let path = path.into();
        if filesystem.is_empty() {
            return Err(StoreError::InvalidRecord(TypeError::EmptyField("filesystem")));
        }
        if path.is_empty() {
            return Err(StoreError::InvalidRecord(TypeError::EmptyField("path")));
        }
        let checksum = config.checksum()?.map(ChecksumAccumulator::new);
        debug!(
            %filesystem,
            %path,
            file = %file_info,
            checksum = checksum.as_ref().map(|c| c.algorithm().name()).unwrap_or("none"),
            "opened write session"
        );
        Ok(Self {
            path_db,
            physical,
            filesystem,
            path,
            file_info,
            sink: Some(sink),
            checksum,
            ttl_ms: config.file_ttl_ms,
            size: 0,
            state: SessionState::Open,
        })
    }

    pub fn filesystem(&self) -> &str {
        &self.filesystem
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_info(&self) -> &FileInfo {
        &self.file_info
    }

    /// Bytes accepted by the sink so far.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns `true` once any write has failed.
    pub fn has_failed(&self) -> bool {
        matches!(self.state, SessionState::Failed(_))
    }

    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum.as_ref().map(ChecksumAccumulator::algorithm)
    }

    /// Write a single byte.
    pub fn write_byte(&mut self, byte: u8) -> StoreResult<()> {
        self.write_bytes(&[byte])
    }

    /// Write a block of bytes.
    ///
    /// On sink failure the physical artifact is deleted before this returns
    /// [`StoreError::SinkWrite`] carrying the sink's own error. None of the
    /// block's bytes are counted.
    pub fn write_bytes(&mut self, buf: &[u8]) -> StoreResult<()> {
        if self.state != SessionState::Open {
            return Err(StoreError::SessionFailed {
                path: self.path.clone(),
            });
        }
        self.forward(buf).map_err(StoreError::SinkWrite)
    }

    fn forward(&mut self, buf: &[u8]) -> io::Result<()> {
        let result = match self.sink.as_mut() {
            Some(sink) => sink.write_all(buf),
            None => Err(io::Error::other("sink already closed")),
        };
        match result {
            Ok(()) => {
                self.size += buf.len() as u64;
                if let Some(acc) = self.checksum.as_mut() {
                    acc.update(buf);
                }
                Ok(())
            }
            Err(e) => {
                self.abandon(&e);
                Err(e)
            }
        }
    }

    /// Delete the partial artifact and poison the session.
    ///
    /// Delete failures are logged and dropped; they must not replace the
    /// write error the caller is about to see.
    fn abandon(&mut self, cause: &io::Error) {
        error!(
            filesystem = %self.filesystem,
            path = %self.path,
            file = %self.file_info,
            written = self.size,
            error = %cause,
            "write to physical sink failed, deleting artifact"
        );
        if let Err(e) = self.physical.delete(&self.file_info) {
            warn!(file = %self.file_info, error = %e, "failed to delete partial artifact");
        }
        self.state = SessionState::Failed(cause.kind());
    }

    /// Close the sink and, if every write succeeded, commit the record.
    ///
    /// Returns `Ok(None)` when an earlier write failed and the commit was
    /// suppressed. A sink close failure is returned as
    /// [`StoreError::SinkClose`] and nothing is committed. Index errors are
    /// returned as-is; at that point the artifact is already durable.
    pub fn close(mut self) -> StoreResult<Option<FileRecord>> {
        let state = std::mem::replace(&mut self.state, SessionState::Closed);
        if let Some(sink) = self.sink.take() {
            sink.close().map_err(StoreError::SinkClose)?;
        }
        debug!(path = %self.path, file = %self.file_info, "closed physical sink");

        if let SessionState::Failed(kind) = state {
            warn!(
                filesystem = %self.filesystem,
                path = %self.path,
                cause = ?kind,
                "write session failed, metadata not committed"
            );
            return Ok(None);
        }

        let created_at = Utc::now();
        let checksum = self.checksum.take().map(ChecksumAccumulator::finalize_hex);
        let record = FileRecord::committed(
            self.filesystem.as_str(),
            self.path.as_str(),
            &self.file_info,
            self.size,
            checksum,
            created_at,
            self.ttl_ms,
        );
        self.path_db.insert(&record)?;
        info!(
            filesystem = %record.filesystem,
            path = %record.path,
            file = %self.file_info,
            size = record.size,
            checksum = record.checksum.as_deref().unwrap_or("none"),
            "committed file record"
        );
        Ok(Some(record))
    }
}

impl<S: ByteSink> Write for WriteSession<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.state != SessionState::Open {
            return Err(io::Error::other(StoreError::SessionFailed {
                path: self.path.clone(),
            }));
        }
        self.forward(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

impl<S: ByteSink> Drop for WriteSession<S> {
    fn drop(&mut self) {
        if self.state == SessionState::Open {
            warn!(
                filesystem = %self.filesystem,
                path = %self.path,
                file = %self.file_info,
                "write session dropped without close, nothing committed"
            );
        }
    }
}

impl<S: ByteSink> std::fmt::Debug for WriteSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteSession")
            .field("filesystem", &self.filesystem)
            .field("path", &self.path)
            .field("file_info", &self.file_info)
            .field("size", &self.size)
            .field("checksum", &self.checksum_algorithm())
            .field("state", &self.state)
            .finish()
    }
}
