//! Quote computation.
//!
//! A [`QuoteRequest`] carries the four validated inputs; [`RateBook::quote`]
//! runs the conversion chain and returns a [`Quote`] or the reason none
//! could be computed. Parsing raw input into the typed fields happens
//! before a request exists, so the computation itself only fails on
//! table lookups.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::codes::{CountryCode, CurrencyCode};
use crate::error::{QuoteError, Result};
use crate::rates::RateBook;

/// The kind of message being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Transactional messages (one-time passwords, alerts).
    Utility,
    /// Promotional messages.
    Marketing,
}

impl MessageType {
    /// Both supported message types.
    pub const ALL: [Self; 2] = [Self::Utility, Self::Marketing];

    /// The lowercase wire name of this message type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utility => "utility",
            Self::Marketing => "marketing",
        }
    }
}

impl FromStr for MessageType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utility" => Ok(Self::Utility),
            "marketing" => Ok(Self::Marketing),
            other => Err(QuoteError::UnknownMessageType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum accepted credit amount.
///
/// With the smallest unit cost in the rate table, amounts up to this
/// bound always yield message counts that fit in a `u64`.
pub const MAX_CREDIT_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// A validated, non-negative credit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreditAmount(Decimal);

impl CreditAmount {
    /// Validate a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidAmount`] for negative amounts and for
    /// amounts above [`MAX_CREDIT_AMOUNT`].
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(QuoteError::InvalidAmount(
                "negative amounts cannot buy messages".to_string(),
            ));
        }
        if amount > MAX_CREDIT_AMOUNT {
            return Err(QuoteError::InvalidAmount(format!(
                "amount exceeds the supported maximum of {MAX_CREDIT_AMOUNT}"
            )));
        }
        Ok(Self(amount))
    }

    /// Parse raw user input into a validated amount.
    ///
    /// Trims surrounding whitespace. An empty or non-numeric value is
    /// [`QuoteError::InvalidAmount`]; the caller decides whether that
    /// means "awaiting input" or a hard failure.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QuoteError::InvalidAmount("no amount given".to_string()));
        }
        let amount = trimmed
            .parse::<Decimal>()
            .map_err(|_| QuoteError::InvalidAmount(format!("not a number: {trimmed:?}")))?;
        Self::new(amount)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl FromStr for CreditAmount {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CreditAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The four validated inputs of one quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Purchased credit, in `credit_currency`.
    pub credit_amount: CreditAmount,
    /// Currency the credit was purchased in.
    pub credit_currency: CurrencyCode,
    /// Country the messages will be sent to.
    pub destination_country: CountryCode,
    /// Kind of message being priced.
    pub message_type: MessageType,
}

impl QuoteRequest {
    /// Assemble a request from already-validated parts.
    #[must_use]
    pub const fn new(
        credit_amount: CreditAmount,
        credit_currency: CurrencyCode,
        destination_country: CountryCode,
        message_type: MessageType,
    ) -> Self {
        Self {
            credit_amount,
            credit_currency,
            destination_country,
            message_type,
        }
    }
}

/// A successfully computed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Number of whole messages the credit buys. Never rounds up.
    pub message_count: u64,
    /// The destination country's local currency.
    pub destination_currency: CurrencyCode,
    /// The credit expressed in the destination currency.
    pub credit_in_destination: Decimal,
    /// Cost of one message, in the destination currency.
    pub unit_cost: Decimal,
}

impl RateBook {
    /// Compute how many messages the credit buys.
    ///
    /// The conversion chain, in order: normalize the credit to USD using
    /// the source currency's rate, convert into the destination country's
    /// local currency, then divide by that country's unit cost for the
    /// message type and floor. Pure: no side effects, deterministic in
    /// the request and the static tables.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::UnknownCurrency`] or
    /// [`QuoteError::UnknownCountry`] when a code is not in the tables,
    /// and [`QuoteError::MissingUnitCost`] when the listed unit cost is
    /// zero or negative.
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote> {
        let source_rate = self.exchange_rate(request.credit_currency)?;
        let country = self.country_rate(request.destination_country)?;
        let destination_rate = self.exchange_rate(country.local_currency)?;

        let credit_usd = request.credit_amount.get() / source_rate;
        let credit_in_destination = credit_usd * destination_rate;

        let unit_cost = country.unit_cost(request.message_type);
        if unit_cost <= Decimal::ZERO {
            return Err(QuoteError::MissingUnitCost {
                country: request.destination_country.to_string(),
                message_type: request.message_type.to_string(),
            });
        }

        let message_count = (credit_in_destination / unit_cost)
            .floor()
            .to_u64()
            .ok_or_else(|| {
                QuoteError::InvalidAmount("message count exceeds the representable range".to_string())
            })?;

        Ok(Quote {
            message_count,
            destination_currency: country.local_currency,
            credit_in_destination,
            unit_cost,
        })
    }
}
