//! Newtype for SHA-256 digests carried in the index.

use serde::{Deserialize, Serialize};

/// Newtype for a SHA-256 digest string (64 lowercase hex characters).
///
/// Provides compile-time distinction from other strings and optional runtime
/// validation. Index entries deserialized from a previously written document
/// are accepted as-is; digests entering the catalog through [`Self::validated`]
/// are checked and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Create a new `Sha256Digest` without validation (for deserialized data).
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create a validated digest: exactly 64 ASCII hex characters, normalized
    /// to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error string if `s` is not exactly 64 ASCII hex characters.
    pub fn validated(s: &str) -> Result<Self, String> {
        if s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(format!(
                "Invalid SHA256 digest: expected 64 hex chars, got '{s}'"
            ))
        }
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the digest string is empty (a placeholder, not a real digest).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Sha256Digest {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Sha256Digest {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_accepts_lowercase_hex() {
        let d = Sha256Digest::validated(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        )
        .unwrap();
        assert_eq!(d.as_str().len(), 64);
    }

    #[test]
    fn validated_normalizes_case() {
        let d = Sha256Digest::validated(
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD",
        )
        .unwrap();
        assert_eq!(
            d.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn validated_rejects_short_or_non_hex() {
        assert!(Sha256Digest::validated("abc123").is_err());
        assert!(Sha256Digest::validated(&"g".repeat(64)).is_err());
    }

    #[test]
    fn serializes_as_bare_string() {
        let d = Sha256Digest::new("aa");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"aa\"");
    }
}
