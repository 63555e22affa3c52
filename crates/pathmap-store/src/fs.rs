//! Filesystem-backed physical store.
//!
//! Artifacts live at `<root>/<file_storage>/<file_id>`. The store hands out
//! fresh coordinates and sinks; it never interprets file contents.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use pathmap_types::FileInfo;
use tracing::debug;

use crate::error::StoreResult;
use crate::traits::PhysicalStore;

#[derive(Clone, Debug)]
pub struct FileSystemPhysicalStore {
    root: PathBuf,
}

impl FileSystemPhysicalStore {
    /// Open a store rooted at `root`, creating the directory if missing.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of an artifact.
    pub fn location(&self, file: &FileInfo) -> PathBuf {
        self.root.join(&file.file_storage).join(&file.file_id)
    }

    /// Mint coordinates for a new artifact.
    pub fn allocate(&self) -> FileInfo {
        FileInfo::generate()
    }

    /// Create the artifact and return a sink for its bytes.
    ///
    /// Fails if the artifact already exists; ids are never reused.
    pub fn create_sink(&self, file: &FileInfo) -> StoreResult<File> {
        let location = self.location(file);
        if let Some(parent) = location.parent() {
            fs::create_dir_all(parent)?;
        }
        let sink = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&location)?;
        debug!(file = %file, "created physical artifact");
        Ok(sink)
    }

    pub fn exists(&self, file: &FileInfo) -> bool {
        self.location(file).is_file()
    }

    /// Read an artifact's bytes.
    pub fn read(&self, file: &FileInfo) -> StoreResult<Vec<u8>> {
        Ok(fs::read(self.location(file))?)
    }
}

impl PhysicalStore for FileSystemPhysicalStore {
    fn delete(&self, file: &FileInfo) -> StoreResult<bool> {
        match fs::remove_file(self.location(file)) {
            Ok(()) => {
                debug!(file = %file, "deleted physical artifact");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
