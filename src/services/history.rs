//! Historical data retrieval with synthetic fallback.
//!
//! Real data comes from the historical provider; when that fails or
//! returns nothing, the pipeline derives a simulated series from the
//! current rate instead of surfacing an error. Input validation happens
//! before any network call.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use tracing::{info, warn};

use crate::config::{MAX_HISTORY_DAYS, SYNTHETIC_VARIATION};
use crate::currencies;
use crate::error::{AppError, Result};
use crate::models::{HistoricalPoint, HistoricalSeries, RateSource};
use crate::services::{ExchangeRateApiClient, FrankfurterClient};

/// Fetch a range of real historical rates and flatten it into a series.
///
/// Days where the provider has no rate for the quote currency are
/// skipped. The provider omits non-trading days, so the series routinely
/// holds fewer points than the requested window. That is informational,
/// not a failure.
async fn fetch_real_history(
    client: &FrankfurterClient,
    base: &str,
    quote: &str,
    day_count: u32,
    today: NaiveDate,
) -> Result<Vec<HistoricalPoint>> {
    let start = today - Duration::days(day_count as i64);
    let rates = client.fetch_range(base, quote, start, today).await?;

    // BTreeMap keys are YYYY-MM-DD, so iteration is already ascending.
    let points: Vec<HistoricalPoint> = rates
        .into_iter()
        .filter_map(|(date, day_rates)| {
            day_rates
                .get(quote)
                .map(|rate| HistoricalPoint { date, rate: *rate })
        })
        .collect();

    if (points.len() as u32) < day_count {
        info!(
            "{} days of data found for {}/{} (weekends excluded)",
            points.len(),
            base,
            quote
        );
    }

    Ok(points)
}

/// Generate a simulated series by perturbing the current rate with
/// bounded random noise. Each day's draw is independent.
pub fn synthetic_history(
    current_rate: f64,
    day_count: u32,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<HistoricalPoint> {
    (0..day_count)
        .map(|i| {
            let date = today - Duration::days((day_count - i) as i64);
            let noise = rng.gen_range(-SYNTHETIC_VARIATION..=SYNTHETIC_VARIATION);
            HistoricalPoint {
                date: date.format("%Y-%m-%d").to_string(),
                rate: current_rate * (1.0 + noise),
            }
        })
        .collect()
}

/// Fetch a historical series for a currency pair.
///
/// Tries the real provider first (when enabled), falling back to a
/// simulated series derived from the current snapshot. Fails before any
/// network call on invalid currencies or an out-of-range day count.
pub async fn get_history(
    current_rates: &ExchangeRateApiClient,
    historical_rates: &FrankfurterClient,
    use_real_data: bool,
    base: &str,
    quote: &str,
    day_count: u32,
    rng: &mut (impl Rng + Send),
) -> Result<HistoricalSeries> {
    if !currencies::is_supported(base) || !currencies::is_supported(quote) {
        return Err(AppError::InvalidInput("invalid currency".to_string()));
    }
    if day_count < 1 || day_count > MAX_HISTORY_DAYS {
        return Err(AppError::InvalidInput(
            "days must be between 1 and 365".to_string(),
        ));
    }

    let today = Local::now().date_naive();

    if use_real_data {
        match fetch_real_history(historical_rates, base, quote, day_count, today).await {
            Ok(points) if !points.is_empty() => {
                return Ok(HistoricalSeries {
                    points,
                    source: RateSource::Real,
                });
            }
            Ok(_) => {
                warn!(
                    "Real history for {}/{} came back empty, using simulated data",
                    base, quote
                );
            }
            Err(e) => {
                warn!(
                    "Real history for {}/{} failed ({}), using simulated data",
                    base, quote, e
                );
            }
        }
    }

    // Synthetic fallback, anchored on the current rate. A missing quote
    // rate falls back to 1.0.
    let snapshot = current_rates.fetch_rates(base).await?;
    let current_rate = snapshot.rates.get(quote).copied().unwrap_or(1.0);
    let points = synthetic_history(current_rate, day_count, today, rng);

    Ok(HistoricalSeries {
        points,
        source: RateSource::Simulated,
    })
}
