//! Conversion arithmetic over a rate snapshot.
//!
//! Pure functions: the caller supplies the snapshot, nothing here touches
//! the network. Results keep full floating-point precision; rounding is a
//! display concern.

use crate::currencies;
use crate::error::{AppError, Result};
use crate::models::{Conversion, RateSnapshot};

/// Targets used by multi-convert when the caller supplies none.
pub const DEFAULT_TARGETS: &[&str] = &["USD", "EUR", "TRY", "GBP", "JPY", "CHF"];

/// Convert an amount using the snapshot's rate for `target`.
///
/// Returns the rate and the converted amount.
pub fn convert(snapshot: &RateSnapshot, target: &str, amount: f64) -> Result<(f64, f64)> {
    let rate = snapshot
        .rates
        .get(target)
        .copied()
        .ok_or_else(|| AppError::NotFound("rate not found".to_string()))?;

    Ok((rate, amount * rate))
}

/// Resolve the target list for multi-convert.
///
/// A comma-separated caller input is split, trimmed and uppercased;
/// unsupported codes are silently dropped. Without input, the default
/// target list is used. Duplicates are kept as-is.
pub fn resolve_targets(input: Option<&str>) -> Vec<String> {
    match input {
        Some(csv) if !csv.is_empty() => csv
            .split(',')
            .map(|part| part.trim().to_uppercase())
            .filter(|code| currencies::is_supported(code))
            .collect(),
        _ => DEFAULT_TARGETS.iter().map(|c| c.to_string()).collect(),
    }
}

/// Convert an amount into every target currency at once.
///
/// The source currency is removed from the target list even when
/// explicitly requested. Targets the snapshot has no rate for are
/// omitted from the result, not errored.
pub fn multi_convert(
    snapshot: &RateSnapshot,
    amount: f64,
    targets: &[String],
    exclude: &str,
) -> Result<Vec<Conversion>> {
    let targets: Vec<&String> = targets.iter().filter(|code| *code != exclude).collect();

    if targets.is_empty() {
        return Err(AppError::InvalidInput("no valid targets found".to_string()));
    }

    let conversions = targets
        .into_iter()
        .filter_map(|code| {
            let rate = snapshot.rates.get(code).copied()?;
            let info = currencies::lookup(code)?;
            Some(Conversion {
                currency: code.clone(),
                symbol: info.symbol,
                name: info.name,
                rate,
                amount: amount * rate,
            })
        })
        .collect();

    Ok(conversions)
}
