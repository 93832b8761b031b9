//! Error type for the data-provider boundary.

/// Errors that can occur when calling the external data provider.
///
/// This captures every failure mode of a provider call: transport failures,
/// non-success API responses, undecodable payloads, and malformed request
/// URLs. Query wrappers collapse all of these into a degraded record; the
/// variants exist so provider implementations and direct callers can still
/// distinguish them.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request failed before a response was produced.
    ///
    /// Connection errors, TLS failures, and timeouts imposed by the caller's
    /// HTTP client all land here.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status code.
    ///
    /// Authentication failures, unknown addresses, and malformed parameters
    /// are all reported this way by the vendor; the message carries whatever
    /// detail the response body contained.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error detail extracted from the response body.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ProviderError {
    /// Helper to create an `Api` error from a status code and body detail.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Api {
            status,
            message: message.into(),
        }
    }
}
