//! Client for the current-rates provider (exchangerate-api.com style).
//!
//! A single GET per call, no retries. A failed call is an immediate error
//! for the caller to handle, either by surfacing it or by falling back to
//! synthetic data in the history pipeline.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::config::API_TIMEOUT;
use crate::error::{AppError, Result};
use crate::models::RateSnapshot;

#[derive(Debug, Clone)]
pub struct ExchangeRateApiClient {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, API_TIMEOUT)
    }

    /// Build a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current rate snapshot for a base currency.
    ///
    /// A response body without a `rates` field deserializes to an empty
    /// rate table rather than an error.
    pub async fn fetch_rates(&self, base: &str) -> Result<RateSnapshot> {
        let url = format!("{}/{}", self.base_url, base);
        debug!("Fetching current rates: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                error!("Current rates timeout for {}", base);
                AppError::UpstreamTimeout
            } else {
                error!("Current rates request failed for {}: {}", base, e);
                AppError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Current rates provider returned {} for {}", status, base);
            return Err(AppError::UpstreamUnavailable(status.as_u16()));
        }

        let snapshot: RateSnapshot = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("invalid JSON body: {}", e)))?;

        debug!(
            "Fetched {} rates for base {}",
            snapshot.rates.len(),
            base
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_rates_parses_snapshot() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/USD")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"base":"USD","date":"2024-06-01","rates":{"EUR":0.9,"TRY":32.5}}"#)
            .create_async()
            .await;

        let client = ExchangeRateApiClient::new(server.url()).unwrap();
        let snapshot = client.fetch_rates("USD").await.unwrap();

        assert_eq!(snapshot.date.as_deref(), Some("2024-06-01"));
        assert_eq!(snapshot.rates["EUR"], 0.9);
        assert_eq!(snapshot.rates["TRY"], 32.5);
    }

    #[tokio::test]
    async fn test_missing_rates_field_is_empty_table() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/USD")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"base":"USD","date":"2024-06-01"}"#)
            .create_async()
            .await;

        let client = ExchangeRateApiClient::new(server.url()).unwrap();
        let snapshot = client.fetch_rates("USD").await.unwrap();

        assert!(snapshot.rates.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_is_upstream_unavailable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/USD")
            .with_status(503)
            .create_async()
            .await;

        let client = ExchangeRateApiClient::new(server.url()).unwrap();
        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(503)));
    }

    #[tokio::test]
    async fn test_stalled_upstream_is_timeout() {
        // A socket that accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let _stream = stream;
                    tokio::time::sleep(Duration::from_secs(5)).await;
                });
            }
        });

        let client = ExchangeRateApiClient::with_timeout(
            format!("http://{}", addr),
            Duration::from_millis(100),
        )
        .unwrap();
        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamTimeout));
    }

    #[tokio::test]
    async fn test_garbage_body_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/USD")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = ExchangeRateApiClient::new(server.url()).unwrap();
        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
    }
}
