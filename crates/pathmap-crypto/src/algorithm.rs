use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accumulator::ChecksumAccumulator;
use crate::error::{CryptoError, CryptoResult};

/// Configuration sentinel that disables checksumming.
pub const NONE_SENTINEL: &str = "NONE";

/// Digest algorithms a storage deployment can configure.
///
/// Names follow the JDK `MessageDigest` convention (`SHA-256`, `MD5`, ...)
/// since stored records are often shared with JVM tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
    #[serde(rename = "BLAKE3")]
    Blake3,
}

impl ChecksumAlgorithm {
    pub const ALL: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Blake3,
    ];

    /// Resolve a configured algorithm name.
    ///
    /// A blank name or the exact sentinel `"NONE"` disables checksumming and
    /// yields `Ok(None)`. Any other name, surrounding whitespace included,
    /// must resolve to a known algorithm.
    pub fn from_config(name: &str) -> CryptoResult<Option<Self>> {
        if name.trim().is_empty() || name == NONE_SENTINEL {
            return Ok(None);
        }
        name.parse().map(Some)
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Blake3 => "BLAKE3",
        }
    }

    /// One-shot lowercase hex digest of `data`.
    pub fn digest_hex(&self, data: &[u8]) -> String {
        let mut acc = ChecksumAccumulator::new(*self);
        acc.update(data);
        acc.finalize_hex()
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = CryptoError;

    /// Case-insensitive; the single dash after `SHA` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let normalized = match upper.strip_prefix("SHA-") {
            Some(rest) => format!("SHA{rest}"),
            None => upper.clone(),
        };
        match normalized.as_str() {
            "MD5" => Ok(Self::Md5),
            "SHA1" | "SHA" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            "BLAKE3" => Ok(Self::Blake3),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jdk_names() {
        assert_eq!("MD5".parse(), Ok(ChecksumAlgorithm::Md5));
        assert_eq!("SHA-1".parse(), Ok(ChecksumAlgorithm::Sha1));
        assert_eq!("SHA-256".parse(), Ok(ChecksumAlgorithm::Sha256));
        assert_eq!("SHA-384".parse(), Ok(ChecksumAlgorithm::Sha384));
        assert_eq!("SHA-512".parse(), Ok(ChecksumAlgorithm::Sha512));
    }

    #[test]
    fn parsing_is_case_and_dash_insensitive() {
        assert_eq!("sha256".parse(), Ok(ChecksumAlgorithm::Sha256));
        assert_eq!("Sha-512".parse(), Ok(ChecksumAlgorithm::Sha512));
        assert_eq!("blake3".parse(), Ok(ChecksumAlgorithm::Blake3));
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "WHIRLPOOL".parse::<ChecksumAlgorithm>().unwrap_err();
        assert_eq!(err, CryptoError::UnsupportedAlgorithm("WHIRLPOOL".into()));
    }

    #[test]
    fn config_blank_and_none_disable() {
        assert_eq!(ChecksumAlgorithm::from_config(""), Ok(None));
        assert_eq!(ChecksumAlgorithm::from_config("   "), Ok(None));
        assert_eq!(ChecksumAlgorithm::from_config("NONE"), Ok(None));
    }

    #[test]
    fn config_lowercase_none_is_not_the_sentinel() {
        assert!(matches!(
            ChecksumAlgorithm::from_config("none"),
            Err(CryptoError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn config_resolves_known_name() {
        assert_eq!(
            ChecksumAlgorithm::from_config("SHA-256"),
            Ok(Some(ChecksumAlgorithm::Sha256))
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for alg in ChecksumAlgorithm::ALL {
            assert_eq!(alg.to_string().parse(), Ok(alg));
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&ChecksumAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"SHA-256\"");
    }

    #[test]
    fn digest_hex_lengths() {
        let expected = [
            (ChecksumAlgorithm::Md5, 32),
            (ChecksumAlgorithm::Sha1, 40),
            (ChecksumAlgorithm::Sha256, 64),
            (ChecksumAlgorithm::Sha384, 96),
            (ChecksumAlgorithm::Sha512, 128),
            (ChecksumAlgorithm::Blake3, 64),
        ];
        for (alg, len) in expected {
            assert_eq!(alg.digest_hex(b"x").len(), len, "{alg}");
        }
    }

    #[test]
    fn padded_sentinel_is_not_the_sentinel() {
        assert_eq!(
            ChecksumAlgorithm::from_config(" NONE "),
            Err(CryptoError::UnsupportedAlgorithm(" NONE ".into()))
        );
    }

    #[test]
    fn padded_name_is_unsupported() {
        assert!(ChecksumAlgorithm::from_config(" SHA-256").is_err());
    }

    #[test]
    fn only_the_dash_after_sha_is_optional() {
        for name in ["S_H-A_2-5-6", "SHA-2-5-6", "SHA_256", "SHA--256", "M-D5", "BLAKE-3"] {
            assert_eq!(
                name.parse::<ChecksumAlgorithm>(),
                Err(CryptoError::UnsupportedAlgorithm(name.into())),
                "{name}"
            );
        }
    }
}
