//! Client for the historical-rates provider (Frankfurter-style API).
//!
//! Supports ranged queries (`/{start}..{end}`) and single-day queries
//! (`/{date}`), both scoped with `from`/`to` query parameters. Ranged
//! queries carry a longer timeout since they are heavier upstream.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::{API_TIMEOUT, HISTORICAL_API_TIMEOUT};
use crate::error::{AppError, Result};

/// Ranged response: date -> currency code -> rate. Dates are not
/// necessarily contiguous; the provider omits non-trading days.
#[derive(Debug, Deserialize)]
struct RangeResponse {
    rates: Option<BTreeMap<String, HashMap<String, f64>>>,
}

#[derive(Debug, Deserialize)]
struct DayResponse {
    rates: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone)]
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
    /// Timeout for single-day queries; ranged queries use the client's
    /// longer default.
    day_timeout: Duration,
}

impl FrankfurterClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(base_url, HISTORICAL_API_TIMEOUT, API_TIMEOUT)
    }

    /// Build a client with custom ranged and single-day timeouts.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        range_timeout: Duration,
        day_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(range_timeout)
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            day_timeout,
        })
    }

    fn translate_send_error(err: reqwest::Error, context: &str) -> AppError {
        if err.is_timeout() {
            error!("Historical rates timeout: {}", context);
            AppError::UpstreamTimeout
        } else {
            error!("Historical rates request failed ({}): {}", context, err);
            AppError::Network(err.to_string())
        }
    }

    /// Fetch rates for a date range. The returned map is keyed by date in
    /// YYYY-MM-DD format, so iteration order is ascending by date.
    pub async fn fetch_range(
        &self,
        base: &str,
        quote: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<String, HashMap<String, f64>>> {
        let url = format!(
            "{}/{}..{}",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        debug!("Fetching historical range: {} ({}→{})", url, base, quote);

        let response = self
            .client
            .get(&url)
            .query(&[("from", base), ("to", quote)])
            .send()
            .await
            .map_err(|e| Self::translate_send_error(e, &format!("{}/{}", base, quote)))?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Historical provider returned {} for {}/{}",
                status, base, quote
            );
            return Err(AppError::UpstreamUnavailable(status.as_u16()));
        }

        let body: RangeResponse = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("invalid JSON body: {}", e)))?;

        body.rates
            .ok_or_else(|| AppError::UpstreamMalformed("missing rates field".to_string()))
    }

    /// Fetch the rate for one specific date. Returns `Ok(None)` when the
    /// provider answered but has no rate for the quote currency.
    pub async fn fetch_on(&self, date: &str, base: &str, quote: &str) -> Result<Option<f64>> {
        let url = format!("{}/{}", self.base_url, date);
        debug!("Fetching rate on date: {} ({}→{})", url, base, quote);

        let response = self
            .client
            .get(&url)
            .query(&[("from", base), ("to", quote)])
            .timeout(self.day_timeout)
            .send()
            .await
            .map_err(|e| Self::translate_send_error(e, date))?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Historical provider returned {} for {} on {}",
                status, quote, date
            );
            return Err(AppError::UpstreamUnavailable(status.as_u16()));
        }

        let body: DayResponse = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("invalid JSON body: {}", e)))?;

        Ok(body.rates.and_then(|rates| rates.get(quote).copied()))
    }
}
