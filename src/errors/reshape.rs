//! Error type for response reshaping.

/// Errors that can occur while reshaping a provider response.
///
/// The provider returns raw JSON; the wallet wrappers rename fields, attach
/// chain context, and deserialize into typed records. These variants cover
/// the ways that can go wrong when the vendor payload doesn't match the
/// documented schema.
#[derive(Debug, thiserror::Error)]
pub enum ReshapeError {
    /// A field the reshaping step depends on was absent or the wrong type.
    #[error("missing field `{field}` in provider response")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// The payload was not the JSON type the endpoint documents.
    #[error("unexpected payload type: expected {expected}")]
    UnexpectedType {
        /// The JSON type the reshaping step needed (e.g. `"object"`).
        expected: &'static str,
    },

    /// The payload did not deserialize into the expected response shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(#[from] serde_json::Error),
}

impl ReshapeError {
    /// Create a `MissingField` error for a specific field.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ReshapeError::MissingField {
            field: field.into(),
        }
    }

    /// Create an `UnexpectedType` error for the JSON type that was needed.
    pub fn unexpected_type(expected: &'static str) -> Self {
        ReshapeError::UnexpectedType { expected }
    }
}
