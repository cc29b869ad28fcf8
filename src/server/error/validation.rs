use thiserror::Error;

/// Record shape violations detected before any database access.
///
/// Results in a 422 Unprocessable Entity response carrying the message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Bounty must be zero or greater, got {0}")]
    NegativeBounty(i64),

    #[error("Unknown sea '{0}', expected one of: East Blue, West Blue, North Blue, South Blue, Grand Line")]
    UnknownSea(String),

    #[error("Unknown event status '{0}', expected one of: upcoming, ongoing, completed")]
    UnknownStatus(String),
}
