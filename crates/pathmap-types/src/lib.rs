//! Foundation types for pathmap.
//!
//! pathmap maps logical paths (a filesystem namespace plus a path) onto
//! physical files held by a separate byte-storage backend. This crate holds
//! the types both sides agree on. Every other pathmap crate depends on
//! `pathmap-types`.
//!
//! # Key Types
//!
//! - [`FileInfo`] -- Physical coordinates of stored bytes (file id + storage tag)
//! - [`FileRecord`] -- Committed metadata linking a logical path to a physical file
//! - [`expiration_for`] -- Expiry computation from a creation time and a TTL

pub mod error;
pub mod file_info;
pub mod record;
pub mod temporal;

pub use error::TypeError;
pub use file_info::FileInfo;
pub use record::FileRecord;
pub use temporal::{expiration_for, Timestamp};
