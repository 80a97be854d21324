use std::path::PathBuf;
use std::time::Duration;

/// Default provider for current exchange rates (free tier).
pub const DEFAULT_CURRENT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Default provider for historical exchange rates (free tier).
pub const DEFAULT_HISTORICAL_RATES_URL: &str = "https://api.frankfurter.app";

/// Timeout for current-rate requests.
pub const API_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for ranged historical requests. Ranged queries are heavier,
/// so this is double the default.
pub const HISTORICAL_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of days for history requests.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Maximum number of days for history requests.
pub const MAX_HISTORY_DAYS: u32 = 365;

/// Random variation applied to simulated historical rates (±2%).
pub const SYNTHETIC_VARIATION: f64 = 0.02;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub current_rates_url: String,
    pub historical_rates_url: String,
    pub use_real_historical_data: bool,
    pub static_dir: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            current_rates_url: std::env::var("CURRENT_RATES_URL")
                .unwrap_or_else(|_| DEFAULT_CURRENT_RATES_URL.to_string()),
            historical_rates_url: std::env::var("HISTORICAL_RATES_URL")
                .unwrap_or_else(|_| DEFAULT_HISTORICAL_RATES_URL.to_string()),
            use_real_historical_data: std::env::var("USE_REAL_HISTORICAL_DATA")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }
}
