use thiserror::Error;

/// Every way a generation or extraction call can fail.
///
/// The set is closed so callers can map each kind to its own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Network, auth, rate limiting, timeouts or a non-success status from the model service.
    #[error("Model service unavailable: {0}")]
    TransportFailure(String),

    /// The model answered, but the text is not a structured payload.
    #[error("Malformed model payload: {0}")]
    MalformedPayload(String),

    /// The payload parsed but does not have the expected shape.
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("No items recognized in image")]
    EmptyExtraction,
}

impl CoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::TransportFailure(_) => "transport_failure",
            CoreError::MalformedPayload(_) => "malformed_payload",
            CoreError::SchemaViolation(_) => "schema_violation",
            CoreError::EmptyExtraction => "empty_extraction",
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        CoreError::SchemaViolation(message.into())
    }
}
