//! Rate table handlers.
//!
//! Read-only listings of the static tables, the data a presentation
//! layer needs to populate its country and currency pickers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use sms_rates_core::{CountryCode, CurrencyCode, RateBook};

use crate::error::ApiError;
use crate::state::AppState;

/// One country's rate entry.
#[derive(Debug, Serialize)]
pub struct CountryRateResponse {
    /// Country code.
    pub country: CountryCode,
    /// Display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Currency the unit costs are priced in.
    pub local_currency: CurrencyCode,
    /// Cost of one utility message.
    pub utility: Decimal,
    /// Cost of one marketing message.
    pub marketing: Decimal,
}

fn country_entry(book: &RateBook, country: CountryCode) -> Option<CountryRateResponse> {
    let rate = book.country_rate(country).ok()?;
    Some(CountryRateResponse {
        country,
        name: book.country_name(country).map(String::from),
        local_currency: rate.local_currency,
        utility: rate.utility,
        marketing: rate.marketing,
    })
}

/// List rates response.
#[derive(Debug, Serialize)]
pub struct ListRatesResponse {
    /// Per-country rates, sorted by country code.
    pub rates: Vec<CountryRateResponse>,
}

/// List all per-country rates.
pub async fn list_rates(State(state): State<Arc<AppState>>) -> Json<ListRatesResponse> {
    let book = state.rate_book();
    let rates = book
        .countries()
        .into_iter()
        .filter_map(|country| country_entry(book, country))
        .collect();

    Json(ListRatesResponse { rates })
}

/// Rates for a single country.
pub async fn get_rate(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> Result<Json<CountryRateResponse>, ApiError> {
    let book = state.rate_book();
    let entry = country
        .parse::<CountryCode>()
        .ok()
        .and_then(|code| country_entry(book, code))
        .ok_or_else(|| ApiError::NotFound(format!("no rates for country: {country}")))?;

    Ok(Json(entry))
}

/// One supported source currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code.
    pub currency: CurrencyCode,
    /// Units of this currency per one USD.
    pub usd_rate: Decimal,
}

/// List currencies response.
#[derive(Debug, Serialize)]
pub struct ListCurrenciesResponse {
    /// Supported source currencies, sorted by code.
    pub currencies: Vec<CurrencyResponse>,
}

/// List the currencies a credit amount may be denominated in.
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> Json<ListCurrenciesResponse> {
    let book = state.rate_book();
    let currencies = book
        .currencies()
        .into_iter()
        .filter_map(|currency| {
            let usd_rate = book.exchange_rate(currency).ok()?;
            Some(CurrencyResponse { currency, usd_rate })
        })
        .collect();

    Json(ListCurrenciesResponse { currencies })
}
