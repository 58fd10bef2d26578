//! Request and response types for the sms-rates client.
//!
//! Responses mirror the service's JSON exactly; decimal fields stay as
//! strings so callers choose their own numeric representation.

use serde::{Deserialize, Serialize};

use sms_rates_core::MessageType;

/// Inputs for one quote request.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteParams {
    /// Purchased credit amount, e.g. `"25.50"`.
    pub credit_amount: String,
    /// Currency the credit was purchased in, e.g. `"USD"`.
    pub credit_currency: String,
    /// Destination country code, e.g. `"IN"`.
    pub destination_country: String,
    /// Message type: `"utility"` or `"marketing"`.
    pub message_type: String,
}

impl QuoteParams {
    /// Assemble quote parameters.
    #[must_use]
    pub fn new(
        credit_amount: impl Into<String>,
        credit_currency: impl Into<String>,
        destination_country: impl Into<String>,
        message_type: MessageType,
    ) -> Self {
        Self {
            credit_amount: credit_amount.into(),
            credit_currency: credit_currency.into(),
            destination_country: destination_country.into(),
            message_type: message_type.as_str().to_string(),
        }
    }
}

/// A computed quote.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    /// Number of whole messages the credit buys.
    pub message_count: u64,
    /// The message type that was priced.
    pub message_type: String,
    /// The destination country code.
    pub destination_country: String,
    /// Display name for the destination, when known.
    pub country_name: Option<String>,
    /// The destination country's local currency.
    pub destination_currency: String,
    /// The credit expressed in the destination currency.
    pub credit_in_destination: String,
    /// Cost of one message in the destination currency.
    pub unit_cost: String,
}

/// One country's rate entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRateInfo {
    /// Country code.
    pub country: String,
    /// Display name, when known.
    pub name: Option<String>,
    /// Currency the unit costs are priced in.
    pub local_currency: String,
    /// Cost of one utility message.
    pub utility: String,
    /// Cost of one marketing message.
    pub marketing: String,
}

/// Response for the rates listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRatesResponse {
    /// Per-country rates, sorted by country code.
    pub rates: Vec<CountryRateInfo>,
}

/// One supported source currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyInfo {
    /// Currency code.
    pub currency: String,
    /// Units of this currency per one USD.
    pub usd_rate: String,
}

/// Response for the currency listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCurrenciesResponse {
    /// Supported source currencies, sorted by code.
    pub currencies: Vec<CurrencyInfo>,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Structured error body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ApiErrorBody,
}

/// Error payload fields.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
    /// Optional machine-readable details.
    pub details: Option<serde_json::Value>,
}
