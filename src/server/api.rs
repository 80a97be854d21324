use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::config::DEFAULT_HISTORY_DAYS;
use crate::currencies;
use crate::error::{AppError, Result};
use crate::server::AppState;
use crate::services::{comparison, converter, history};

const API_VERSION: &str = "1.0.0";

/// Attribution for rates served from the historical provider.
const HISTORICAL_SOURCE: &str = "Frankfurter.app (European Central Bank)";

/// The most-watched currency pairs, with display names.
const POPULAR_PAIRS: &[(&str, &str, &str)] = &[
    ("USD", "TRY", "Dolar/TL"),
    ("EUR", "TRY", "Euro/TL"),
    ("GBP", "TRY", "Sterlin/TL"),
    ("EUR", "USD", "Euro/Dolar"),
    ("GBP", "USD", "Sterlin/Dolar"),
    ("JPY", "USD", "Yen/Dolar"),
    ("CHF", "USD", "Frank/Dolar"),
    ("USD", "CAD", "Dolar/Kanada Doları"),
];

/// Uppercase and validate a currency code from the request.
fn validate_currency(code: &str) -> Result<String> {
    let code = code.trim().to_uppercase();
    if currencies::is_supported(&code) {
        Ok(code)
    } else {
        Err(AppError::InvalidInput("invalid currency".to_string()))
    }
}

/// Parse a positive amount from its raw query-string form. Parsing here
/// instead of in the extractor keeps the error a JSON 400 body.
fn parse_amount(raw: Option<&str>) -> Result<f64> {
    let amount: f64 = raw
        .unwrap_or("0")
        .parse()
        .map_err(|_| AppError::InvalidInput("invalid amount".to_string()))?;

    if amount <= 0.0 {
        return Err(AppError::InvalidInput(
            "amount must be greater than 0".to_string(),
        ));
    }

    Ok(amount)
}

fn timestamp_now() -> String {
    Local::now().naive_local().to_string()
}

/// GET /api - API info and endpoint index
pub async fn api_info_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the KurTakip API!",
        "version": API_VERSION,
        "endpoints": {
            "currencies": "/api/currencies",
            "rates": "/api/rates/{base}",
            "convert": "/api/convert?from_currency=USD&to_currency=TRY&amount=100",
            "history": "/api/history/{base}/{quote}?days=30",
            "popular": "/api/popular-pairs",
            "multi-convert": "/api/multi-convert?from_currency=USD&amount=100",
            "rate-on-date": "/api/rate-on-date/{base}/{quote}/{date}",
            "compare-dates": "/api/compare-dates/{base}/{quote}?start_date=X&end_date=Y",
        },
    }))
}

/// GET /api/currencies - List all supported currencies
pub async fn list_currencies_handler() -> Json<Value> {
    Json(json!({
        "fiat": currencies::all_as_json(),
        "total": currencies::CURRENCIES.len(),
    }))
}

/// GET /api/rates/{base} - All current rates for one base currency
#[instrument(skip(state))]
pub async fn rates_handler(
    State(state): State<AppState>,
    Path(base): Path<String>,
) -> Result<Json<Value>> {
    let base = base.trim().to_uppercase();
    if !currencies::is_supported(&base) {
        return Err(AppError::NotFound("currency not found".to_string()));
    }

    let snapshot = state.current_rates.fetch_rates(&base).await?;

    Ok(Json(json!({
        "base": base,
        "date": snapshot.date,
        "rates": snapshot.rates,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    #[serde(default)]
    pub from_currency: String,
    #[serde(default)]
    pub to_currency: String,
    pub amount: Option<String>,
}

/// GET /api/convert - Convert an amount between two currencies
///
/// Example: /api/convert?from_currency=USD&to_currency=TRY&amount=100
#[instrument(skip(state))]
pub async fn convert_handler(
    State(state): State<AppState>,
    Query(params): Query<ConvertQuery>,
) -> Result<Json<Value>> {
    let amount = parse_amount(params.amount.as_deref())?;
    let from = validate_currency(&params.from_currency)?;
    let to = validate_currency(&params.to_currency)?;

    let snapshot = state.current_rates.fetch_rates(&from).await?;
    let (rate, result) = converter::convert(&snapshot, &to, amount)?;

    info!("Converted {} {} → {} {}", amount, from, result, to);

    Ok(Json(json!({
        "from": from,
        "to": to,
        "amount": amount,
        "rate": rate,
        "result": result,
        "timestamp": timestamp_now(),
    })))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<String>,
}

/// GET /api/history/{base}/{quote}?days=30 - Historical series for a pair
#[instrument(skip(state))]
pub async fn history_handler(
    State(state): State<AppState>,
    Path((base, quote)): Path<(String, String)>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Value>> {
    let base = base.trim().to_uppercase();
    let quote = quote.trim().to_uppercase();

    let day_count: u32 = match params.days.as_deref() {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput("days must be between 1 and 365".to_string()))?,
        None => DEFAULT_HISTORY_DAYS,
    };

    info!("History request: {}/{} - {} days", base, quote, day_count);

    let mut rng = StdRng::from_entropy();
    let series = history::get_history(
        &state.current_rates,
        &state.historical_rates,
        state.config.use_real_historical_data,
        &base,
        &quote,
        day_count,
        &mut rng,
    )
    .await?;

    Ok(Json(json!({
        "base": base,
        "quote": quote,
        "days": day_count,
        "data": series.points,
        "note": series.source.note(),
    })))
}

/// GET /api/popular-pairs - Rates for the most-watched pairs
///
/// Pairs whose upstream fetch fails are silently omitted.
#[instrument(skip(state))]
pub async fn popular_pairs_handler(State(state): State<AppState>) -> Json<Vec<Value>> {
    let mut results = Vec::new();

    for (base, quote, name) in POPULAR_PAIRS {
        if !currencies::is_supported(base) || !currencies::is_supported(quote) {
            continue;
        }

        match state.current_rates.fetch_rates(base).await {
            Ok(snapshot) => {
                if let Some(rate) = snapshot.rates.get(*quote) {
                    results.push(json!({
                        "base": base,
                        "quote": quote,
                        "name": name,
                        "rate": rate,
                        "change_24h": 0,
                    }));
                }
            }
            Err(e) => {
                warn!("Skipping popular pair {}/{}: {}", base, quote, e);
            }
        }
    }

    Json(results)
}

#[derive(Debug, Deserialize)]
pub struct MultiConvertQuery {
    #[serde(default)]
    pub from_currency: String,
    pub to_currencies: Option<String>,
    pub amount: Option<String>,
}

/// GET /api/multi-convert - Convert one amount into several currencies
///
/// Example: /api/multi-convert?from_currency=USD&to_currencies=EUR,TRY&amount=100
#[instrument(skip(state))]
pub async fn multi_convert_handler(
    State(state): State<AppState>,
    Query(params): Query<MultiConvertQuery>,
) -> Result<Json<Value>> {
    let amount = parse_amount(params.amount.as_deref())?;
    let from = validate_currency(&params.from_currency)
        .map_err(|_| AppError::InvalidInput("invalid source currency".to_string()))?;

    let targets = converter::resolve_targets(params.to_currencies.as_deref());

    let snapshot = state.current_rates.fetch_rates(&from).await?;
    let conversions = converter::multi_convert(&snapshot, amount, &targets, &from)?;

    Ok(Json(json!({
        "from": from,
        "amount": amount,
        "conversions": conversions,
        "timestamp": timestamp_now(),
    })))
}

/// GET /api/rate-on-date/{base}/{quote}/{date} - Rate on a specific date
#[instrument(skip(state))]
pub async fn rate_on_date_handler(
    State(state): State<AppState>,
    Path((base, quote, date)): Path<(String, String, String)>,
) -> Result<Json<Value>> {
    let base = validate_currency(&base)?;
    let quote = validate_currency(&quote)?;
    comparison::validate_date(&date)?;

    let rate = state
        .historical_rates
        .fetch_on(&date, &base, &quote)
        .await?
        .ok_or_else(|| AppError::NotFound("no rate found for this date".to_string()))?;

    Ok(Json(json!({
        "base": base,
        "quote": quote,
        "date": date,
        "rate": rate,
        "source": HISTORICAL_SOURCE,
    })))
}

#[derive(Debug, Deserialize)]
pub struct CompareDatesQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/compare-dates/{base}/{quote}?start_date=X&end_date=Y
#[instrument(skip(state))]
pub async fn compare_dates_handler(
    State(state): State<AppState>,
    Path((base, quote)): Path<(String, String)>,
    Query(params): Query<CompareDatesQuery>,
) -> Result<Json<Value>> {
    let base = validate_currency(&base)?;
    let quote = validate_currency(&quote)?;

    let (start_date, end_date) = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => (start, end),
        _ => {
            return Err(AppError::InvalidInput(
                "start_date and end_date are required".to_string(),
            ))
        }
    };

    comparison::validate_date(&start_date)?;
    comparison::validate_date(&end_date)?;

    let result =
        comparison::compare_dates(&state.historical_rates, &base, &quote, &start_date, &end_date)
            .await?;

    Ok(Json(json!({
        "base": base,
        "quote": quote,
        "start_date": start_date,
        "end_date": end_date,
        "start_rate": result.start_rate,
        "end_rate": result.end_rate,
        "change_percent": result.change_percent,
        "change_direction": result.direction,
        "source": HISTORICAL_SOURCE,
    })))
}
