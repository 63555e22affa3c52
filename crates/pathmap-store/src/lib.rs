//! Write-commit protocol for pathmap.
//!
//! Bytes for a logical path stream into a physical artifact through a
//! [`WriteSession`], which counts and checksums them on the way. The logical
//! path only becomes visible, as a [`FileRecord`] in the [`PathDb`], after
//! every byte has been accepted and the sink has closed cleanly.
//!
//! # Collaborators
//!
//! - [`PathDb`] -- metadata index receiving committed records
//!   ([`InMemoryPathDb`] for tests and embedding)
//! - [`PhysicalStore`] -- byte-storage backend asked to delete partial
//!   artifacts ([`FileSystemPhysicalStore`] on local disk)
//! - [`ByteSink`] -- the destination a session writes into
//!
//! # Design Rules
//!
//! 1. A record is committed iff every write succeeded and the sink closed.
//! 2. A failed write deletes the artifact before the error reaches the caller.
//! 3. Cleanup failures are logged, never allowed to mask the write error.
//! 4. No transaction spans the sink close and the index insert; an insert
//!    failure leaves a durable but unreferenced artifact.
//! 5. One writer per session; no internal locking.
//!
//! [`FileRecord`]: pathmap_types::FileRecord

pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod session;
pub mod sink;
pub mod traits;

pub use config::StorageConfig;
pub use error::{StoreError, StoreResult};
pub use fs::FileSystemPhysicalStore;
pub use memory::InMemoryPathDb;
pub use session::WriteSession;
pub use sink::ByteSink;
pub use traits::{PathDb, PhysicalStore};
