//! SMS Rates client SDK.
//!
//! This crate provides a client library for calling the sms-rates API,
//! the collaborator a presentation layer uses to quote message counts.
//!
//! # Example
//!
//! ```no_run
//! use sms_rates_client::{QuoteParams, SmsRatesClient};
//! use sms_rates_core::MessageType;
//!
//! # async fn example() -> Result<(), sms_rates_client::ClientError> {
//! let client = SmsRatesClient::new("http://sms-rates:8080");
//!
//! let quote = client
//!     .quote(QuoteParams::new("100", "USD", "IN", MessageType::Marketing))
//!     .await?;
//!
//! println!("{} messages", quote.message_count);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, SmsRatesClient};
pub use error::ClientError;
pub use types::*;
