//! Checksum primitives for pathmap.
//!
//! Provides the set of digest algorithms a storage deployment may configure
//! and a streaming [`ChecksumAccumulator`] that is fed bytes as they are
//! written and yields a lowercase hex digest once the stream ends.
//!
//! All digests wrap established libraries (RustCrypto, BLAKE3) -- no custom
//! cryptography.

pub mod accumulator;
pub mod algorithm;
pub mod error;

pub use accumulator::ChecksumAccumulator;
pub use algorithm::ChecksumAlgorithm;
pub use error::{CryptoError, CryptoResult};
