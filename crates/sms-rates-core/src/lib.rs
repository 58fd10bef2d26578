//! Core types and computation for sms-rates.
//!
//! This crate provides everything needed to answer one question: given a
//! purchased credit amount in some currency, how many SMS messages of a
//! given type can be sent to a given destination country?
//!
//! - **Codes**: [`CountryCode`], [`CurrencyCode`]
//! - **Tables**: [`RateBook`], [`CountryRate`]
//! - **Quoting**: [`QuoteRequest`], [`Quote`], [`MessageType`], [`CreditAmount`]
//! - **Errors**: [`QuoteError`]
//!
//! # Conversion model
//!
//! Per-message unit costs are priced in the destination country's local
//! currency. A credit amount in any supported currency is first
//! normalized to USD (the base currency, rate exactly 1), then converted
//! into the destination currency, then divided by the unit cost. The
//! result is floored: a partial message is not sendable.
//!
//! All arithmetic uses [`rust_decimal::Decimal`] so table entries such as
//! `0.0107` are represented exactly. The tables are process-lifetime
//! constants; quoting is a pure function over them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codes;
pub mod error;
pub mod quote;
pub mod rates;

pub use codes::{CountryCode, CurrencyCode};
pub use error::{QuoteError, Result};
pub use quote::{CreditAmount, MessageType, Quote, QuoteRequest, MAX_CREDIT_AMOUNT};
pub use rates::{CountryRate, RateBook};
