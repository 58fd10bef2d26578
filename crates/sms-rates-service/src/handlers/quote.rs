//! Quote handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sms_rates_core::{CountryCode, CreditAmount, CurrencyCode, MessageType, QuoteRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Quote request body.
///
/// Fields arrive as raw strings, the way a form submits them; the
/// handler parses and validates each one before quoting.
#[derive(Debug, Deserialize)]
pub struct QuoteRequestBody {
    /// Purchased credit amount, e.g. `"25.50"`.
    pub credit_amount: String,
    /// Currency the credit was purchased in, e.g. `"USD"`.
    pub credit_currency: String,
    /// Destination country code, e.g. `"IN"`.
    pub destination_country: String,
    /// Message type: `"utility"` or `"marketing"`.
    pub message_type: String,
}

/// Quote response.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// Number of whole messages the credit buys.
    pub message_count: u64,
    /// The message type that was priced.
    pub message_type: MessageType,
    /// The destination country.
    pub destination_country: CountryCode,
    /// Display name for the destination, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    /// The destination country's local currency.
    pub destination_currency: CurrencyCode,
    /// The credit expressed in the destination currency.
    pub credit_in_destination: Decimal,
    /// Cost of one message in the destination currency.
    pub unit_cost: Decimal,
}

/// Compute a message-count quote from the four raw inputs.
pub async fn compute_quote(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuoteRequestBody>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let request = QuoteRequest::new(
        CreditAmount::parse(&body.credit_amount)?,
        body.credit_currency.parse()?,
        body.destination_country.parse()?,
        body.message_type.parse()?,
    );

    let quote = state.rate_book().quote(&request)?;

    tracing::debug!(
        credit_amount = %request.credit_amount,
        credit_currency = %request.credit_currency,
        destination_country = %request.destination_country,
        message_type = %request.message_type,
        message_count = %quote.message_count,
        "Quote computed"
    );

    Ok(Json(QuoteResponse {
        message_count: quote.message_count,
        message_type: request.message_type,
        destination_country: request.destination_country,
        country_name: state
            .rate_book()
            .country_name(request.destination_country)
            .map(String::from),
        destination_currency: quote.destination_currency,
        credit_in_destination: quote.credit_in_destination,
        unit_cost: quote.unit_cost,
    }))
}
