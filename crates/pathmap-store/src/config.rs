use std::path::Path;

use pathmap_crypto::ChecksumAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Write-path configuration shared by every session a storage layer opens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Digest computed over each file's bytes. Empty or `"NONE"` disables
    /// checksums.
    pub checksum_algorithm: String,
    /// Time-to-live for committed records in milliseconds. Zero or negative
    /// means records never expire.
    pub file_ttl_ms: i64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            checksum_algorithm: ChecksumAlgorithm::Sha256.name().to_string(),
            file_ttl_ms: 0,
        }
    }
}

impl StorageConfig {
    /// A configuration with checksums disabled.
    pub fn without_checksum() -> Self {
        Self {
            checksum_algorithm: pathmap_crypto::algorithm::NONE_SENTINEL.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style TTL override.
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.file_ttl_ms = ttl_ms;
        self
    }

    /// Builder-style algorithm override.
    pub fn with_checksum_algorithm(mut self, name: impl Into<String>) -> Self {
        self.checksum_algorithm = name.into();
        self
    }

    /// Resolve the configured algorithm; `None` when checksums are disabled.
    pub fn checksum(&self) -> StoreResult<Option<ChecksumAlgorithm>> {
        Ok(ChecksumAlgorithm::from_config(&self.checksum_algorithm)?)
    }

    /// Fail early on an unknown algorithm name.
    pub fn validate(&self) -> StoreResult<()> {
        self.checksum().map(|_| ())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| StoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
