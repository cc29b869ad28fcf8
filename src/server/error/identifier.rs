use thiserror::Error;

/// Failure to decode an externally supplied record identifier.
#[derive(Error, Debug)]
pub enum IdError {
    /// The string is not 24 hexadecimal characters.
    #[error("'{value}' is not a valid record id: {source}")]
    Malformed {
        /// The string that failed to decode
        value: String,
        /// The underlying object id parse error
        #[source]
        source: bson::oid::Error,
    },
}
