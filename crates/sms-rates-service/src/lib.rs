//! HTTP API for sms-rates.
//!
//! This crate exposes the quote computation from `sms-rates-core` to
//! presentation layers:
//!
//! - `POST /v1/quote` - compute a message count from the four raw inputs
//! - `GET /v1/rates`, `GET /v1/rates/:country` - the per-country rate table
//! - `GET /v1/currencies` - supported source currencies
//! - `GET /health` - liveness
//!
//! The service holds no state beyond the static rate tables; every quote
//! is recomputed from scratch, exactly as the inputs dictate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are async for the router even when pure

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
