use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Point-in-time exchange rates for one base currency, as returned by the
/// current-rates provider. A response without a `rates` field is treated
/// as an empty rate table, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSnapshot {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

/// One day of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Date in YYYY-MM-DD format.
    pub date: String,
    pub rate: f64,
}

/// Provenance of a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Real,
    Simulated,
}

impl RateSource {
    /// Human-readable provenance note returned alongside history data.
    pub fn note(&self) -> &'static str {
        match self {
            RateSource::Real => "Real data from Frankfurter.app",
            RateSource::Simulated => "Simulated data",
        }
    }
}

/// A non-empty sequence of historical points, ascending by date.
#[derive(Debug, Clone)]
pub struct HistoricalSeries {
    pub points: Vec<HistoricalPoint>,
    pub source: RateSource,
}

/// One converted target in a multi-convert result.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub currency: String,
    pub symbol: &'static str,
    pub name: &'static str,
    pub rate: f64,
    pub amount: f64,
}

/// Direction of a rate change between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Unchanged,
}

/// Result of comparing a currency pair between two dates.
#[derive(Debug, Clone)]
pub struct DateComparison {
    pub start_rate: f64,
    pub end_rate: f64,
    pub change_percent: f64,
    pub direction: ChangeDirection,
}
