use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::algorithm::ChecksumAlgorithm;
use crate::error::CryptoResult;

/// Running hash state for one algorithm.
#[derive(Clone)]
enum HashState {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Blake3(Box<blake3::Hasher>),
}

/// Streaming checksum fed incrementally as bytes are written.
///
/// `finalize_hex` consumes the accumulator, so a digest can be read exactly
/// once and no input can follow it.
#[derive(Clone)]
pub struct ChecksumAccumulator {
    algorithm: ChecksumAlgorithm,
    state: HashState,
    bytes_fed: u64,
}

impl ChecksumAccumulator {
    /// Start an empty digest for `algorithm`.
    pub fn new(algorithm: ChecksumAlgorithm) -> Self {
        let state = match algorithm {
            ChecksumAlgorithm::Md5 => HashState::Md5(Md5::new()),
            ChecksumAlgorithm::Sha1 => HashState::Sha1(Sha1::new()),
            ChecksumAlgorithm::Sha256 => HashState::Sha256(Sha256::new()),
            ChecksumAlgorithm::Sha384 => HashState::Sha384(Sha384::new()),
            ChecksumAlgorithm::Sha512 => HashState::Sha512(Sha512::new()),
            ChecksumAlgorithm::Blake3 => HashState::Blake3(Box::new(blake3::Hasher::new())),
        };
        Self {
            algorithm,
            state,
            bytes_fed: 0,
        }
    }

    /// Start an empty digest for the algorithm called `name`.
    pub fn for_name(name: &str) -> CryptoResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// Number of bytes fed so far.
    pub fn bytes_fed(&self) -> u64 {
        self.bytes_fed
    }

    /// Feed one byte.
    pub fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    /// Feed a block of bytes.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            HashState::Md5(h) => h.update(data),
            HashState::Sha1(h) => h.update(data),
            HashState::Sha256(h) => h.update(data),
            HashState::Sha384(h) => h.update(data),
            HashState::Sha512(h) => h.update(data),
            HashState::Blake3(h) => {
                h.update(data);
            }
        }
        self.bytes_fed += data.len() as u64;
    }

    /// Lowercase hex digest over everything fed so far.
    pub fn finalize_hex(self) -> String {
        match self.state {
            HashState::Md5(h) => hex::encode(h.finalize()),
            HashState::Sha1(h) => hex::encode(h.finalize()),
            HashState::Sha256(h) => hex::encode(h.finalize()),
            HashState::Sha384(h) => hex::encode(h.finalize()),
            HashState::Sha512(h) => hex::encode(h.finalize()),
            HashState::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

impl std::fmt::Debug for ChecksumAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecksumAccumulator")
            .field("algorithm", &self.algorithm)
            .field("bytes_fed", &self.bytes_fed)
            .finish()
    }
}
