//! Record identifier codec.
//!
//! Records are keyed by BSON object ids. At every API boundary and in every stored
//! foreign key the id travels as its 24 character lowercase hex encoding, so this is
//! the only place that knows how the two forms map onto each other.

use bson::oid::ObjectId;
use std::{fmt, str::FromStr};

use crate::server::error::{identifier::IdError, AppError};

/// Native identifier of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Generates a fresh identifier for a record about to be inserted.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses an externally supplied identifier.
    ///
    /// Accepts exactly 24 hexadecimal characters in either case.
    ///
    /// # Returns
    /// - `Ok(RecordId)` - Decoded identifier
    /// - `Err(IdError::Malformed)` - Wrong length or non-hex characters
    pub fn decode(value: &str) -> Result<Self, IdError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|source| IdError::Malformed {
                value: value.to_string(),
                source,
            })
    }

    /// Canonical string form: 24 lowercase hex characters.
    pub fn encode(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Decodes an identifier taken from a request path, query or body.
///
/// # Arguments
/// - `entity` - Name of the referenced record kind, used in the client facing message
/// - `value` - The caller supplied string
///
/// # Returns
/// - `Ok(RecordId)` - Decoded identifier
/// - `Err(AppError::InvalidIdentifier)` - Malformed identifier, surfaced as 400 Bad Request
pub fn parse_record_id(entity: &'static str, value: &str) -> Result<RecordId, AppError> {
    RecordId::decode(value).map_err(|source| AppError::InvalidIdentifier { entity, source })
}
