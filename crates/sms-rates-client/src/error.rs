//! Client error types.

/// Errors that can occur when using the sms-rates client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// The service could not compute a quote from the given inputs.
    #[error("unable to compute: {reason}")]
    UnableToCompute {
        /// The reason reported by the service.
        reason: String,
        /// Machine-readable reason kind (e.g. `unknown_country`).
        kind: Option<String>,
    },

    /// Resource not found (e.g. an unlisted country on the rates route).
    #[error("not found: {message}")]
    NotFound {
        /// The server's message.
        message: String,
    },
}
