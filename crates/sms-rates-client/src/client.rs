//! SMS Rates HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, CountryRateInfo, HealthResponse, ListCurrenciesResponse, ListRatesResponse,
    QuoteParams, QuoteResponse,
};

/// SMS Rates API client.
///
/// Provides methods for quoting message counts and reading the rate
/// tables.
#[derive(Debug, Clone)]
pub struct SmsRatesClient {
    client: Client,
    base_url: String,
}

/// Options for constructing a client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

impl SmsRatesClient {
    /// Create a new sms-rates client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the sms-rates service
    ///   (e.g. `"http://sms-rates:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new sms-rates client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Quote how many messages a credit amount buys.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnableToCompute`] when the service cannot
    /// compute a quote from the inputs, or another [`ClientError`] for
    /// transport and protocol failures.
    pub async fn quote(&self, params: QuoteParams) -> Result<QuoteResponse, ClientError> {
        let url = format!("{}/v1/quote", self.base_url);

        tracing::debug!(
            credit_amount = %params.credit_amount,
            destination_country = %params.destination_country,
            "Requesting quote"
        );

        let response = self.client.post(&url).json(&params).send().await?;

        Self::handle_response(response).await
    }

    /// List all per-country rates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_rates(&self) -> Result<ListRatesResponse, ClientError> {
        let url = format!("{}/v1/rates", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Fetch the rate entry for one destination country.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unlisted country, or
    /// another [`ClientError`] for transport and protocol failures.
    pub async fn get_rate(&self, country: &str) -> Result<CountryRateInfo, ClientError> {
        let url = format!("{}/v1/rates/{country}", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// List the supported source currencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn list_currencies(&self) -> Result<ListCurrenciesResponse, ClientError> {
        let url = format!("{}/v1/currencies", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the structured error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.error.code.as_str();
                let message = api_error.error.message;

                // Map specific error codes to typed errors
                match code {
                    "unable_to_compute" => {
                        let kind = api_error
                            .error
                            .details
                            .as_ref()
                            .and_then(|d| d.get("kind"))
                            .and_then(serde_json::Value::as_str)
                            .map(String::from);

                        Err(ClientError::UnableToCompute {
                            reason: message,
                            kind,
                        })
                    }
                    "not_found" => Err(ClientError::NotFound { message }),
                    _ => Err(ClientError::Api {
                        code: code.to_string(),
                        message,
                        status: status.as_u16(),
                    }),
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}
