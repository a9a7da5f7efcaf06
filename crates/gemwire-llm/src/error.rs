use thiserror::Error;

/// Why a response, or one candidate inside it, could not be decoded
///
/// Errors are returned in the result slot they belong to; decoding never
/// aborts sibling candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload was not valid JSON
    #[error("Received invalid JSON: {0}")]
    InvalidJson(String),

    /// Provider returned an error object
    #[error("{0}")]
    Provider(String),

    /// Candidate is well-formed but a field holds a value this layer rejects
    #[error("{field}: {reason}")]
    Validation {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Candidate could not be read as a candidate object at all
    #[error("invalid candidate: {0}")]
    MalformedCandidate(String),

    /// Payload is neither a candidate list nor an error object
    #[error("Unexpected response")]
    UnexpectedResponse,
}

impl DecodeError {
    /// Whether the provider itself reported the failure
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
