//! Git object identifier
//!
//! Object ids are hexadecimal digests of an object's content. Repositories use
//! either SHA-1 (40 characters) or SHA-256 (64 characters); both are accepted.
//!
//! Two files are considered byte-identical exactly when their blob object ids
//! are equal.

use crate::artifacts::errors::BackendError;
use crate::artifacts::objects::{
    SHA1_OBJECT_ID_LENGTH, SHA256_OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH,
};

/// Git object identifier (content hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Surrounding whitespace is ignored so that raw backend output can be
    /// passed in directly. Uppercase digits are normalised to lowercase.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self, BackendError> {
        let id = id.as_ref().trim();

        if id.len() != SHA1_OBJECT_ID_LENGTH && id.len() != SHA256_OBJECT_ID_LENGTH {
            return Err(BackendError::InvalidObjectId(id.to_string()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BackendError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Parse an object id from raw process output
    pub fn try_parse_bytes(raw: &[u8]) -> Result<Self, BackendError> {
        let id = std::str::from_utf8(raw)
            .map_err(|_| BackendError::InvalidObjectId(String::from_utf8_lossy(raw).into_owned()))?;

        Self::try_parse(id)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
