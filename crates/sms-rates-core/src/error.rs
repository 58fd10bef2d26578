//! Error types for sms-rates.

/// Result type for sms-rates operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors that can occur while computing a quote.
///
/// Every variant is recoverable by design: at a serving boundary they all
/// collapse to a single "unable to compute" outcome, and retrying without
/// changed input always produces the same result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// The credit amount is missing, not a number, negative, or too large.
    #[error("invalid credit amount: {0}")]
    InvalidAmount(String),

    /// Currency code not present in the exchange-rate table.
    #[error("unknown currency code: {code}")]
    UnknownCurrency {
        /// The code that failed to resolve.
        code: String,
    },

    /// Country code not present in the rate table.
    #[error("unknown country code: {code}")]
    UnknownCountry {
        /// The code that failed to resolve.
        code: String,
    },

    /// Message type is not one of the supported kinds.
    #[error("unknown message type: {value}")]
    UnknownMessageType {
        /// The value that failed to parse.
        value: String,
    },

    /// The looked-up unit cost is zero or otherwise unusable.
    #[error("no {message_type} unit cost for {country}")]
    MissingUnitCost {
        /// The destination country.
        country: String,
        /// The requested message type.
        message_type: String,
    },
}
