//! Rate comparison between two points in time.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::{ChangeDirection, DateComparison};
use crate::services::FrankfurterClient;

/// Parse a YYYY-MM-DD date and reject dates after today.
pub fn validate_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput("invalid date, use YYYY-MM-DD".to_string()))?;

    if date > Local::now().date_naive() {
        return Err(AppError::InvalidInput(
            "cannot query future dates".to_string(),
        ));
    }

    Ok(date)
}

/// Percentage change between two rates, rounded to 2 decimal places,
/// with its direction. A zero start rate has no meaningful percentage
/// change and is rejected rather than divided by.
pub fn change_stats(start_rate: f64, end_rate: f64) -> Result<(f64, ChangeDirection)> {
    if start_rate == 0.0 {
        return Err(AppError::UpstreamMalformed(
            "start rate is zero, cannot compute change".to_string(),
        ));
    }

    let change_percent = ((end_rate - start_rate) / start_rate * 100.0 * 100.0).round() / 100.0;
    let direction = if change_percent > 0.0 {
        ChangeDirection::Up
    } else if change_percent < 0.0 {
        ChangeDirection::Down
    } else {
        ChangeDirection::Unchanged
    };

    Ok((change_percent, direction))
}

/// Fetch the rate for one date, treating an unavailable provider or a
/// missing quote as "no rate for that date".
async fn rate_for_date(
    client: &FrankfurterClient,
    date: &str,
    base: &str,
    quote: &str,
) -> Result<f64> {
    let not_found = || AppError::NotFound(format!("no rate for {}", date));

    match client.fetch_on(date, base, quote).await {
        Ok(Some(rate)) => Ok(rate),
        Ok(None) => Err(not_found()),
        Err(AppError::UpstreamUnavailable(_)) => Err(not_found()),
        Err(e) => Err(e),
    }
}

/// Compare a currency pair's rate between two dates.
///
/// Both dates must already be validated by the caller.
pub async fn compare_dates(
    client: &FrankfurterClient,
    base: &str,
    quote: &str,
    start_date: &str,
    end_date: &str,
) -> Result<DateComparison> {
    let start_rate = rate_for_date(client, start_date, base, quote).await?;
    let end_rate = rate_for_date(client, end_date, base, quote).await?;

    let (change_percent, direction) = change_stats(start_rate, end_rate)?;

    info!(
        "Compared {}/{}: {} {} → {} {} ({:+.2}%)",
        base, quote, start_date, start_rate, end_date, end_rate, change_percent
    );

    Ok(DateComparison {
        start_rate,
        end_rate,
        change_percent,
        direction,
    })
}
