use thiserror::Error;

use crate::server::error::identifier::IdError;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored row carries an id that no longer decodes.
    ///
    /// Only possible if rows were written out-of-band. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Stored {collection} row has malformed id: {source}")]
    CorruptStoredId {
        /// Collection the row was read from
        collection: &'static str,
        /// The underlying decode error
        #[source]
        source: IdError,
    },

    /// Stored event results are not a list of result items.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to convert event results for event '{event_id}': {source}")]
    EventResults {
        /// Encoded id of the stored event
        event_id: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
