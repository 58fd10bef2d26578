//! Application state.

use sms_rates_core::RateBook;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// Everything in here is immutable after startup; handlers only read.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration, including the rate tables.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        tracing::info!(
            countries = config.rates.countries().len(),
            currencies = config.rates.currencies().len(),
            "Rate tables loaded"
        );
        Self { config }
    }

    /// The static rate tables.
    #[must_use]
    pub fn rate_book(&self) -> &RateBook {
        &self.config.rates
    }
}
