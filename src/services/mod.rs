pub mod comparison;
pub mod converter;
pub mod exchange_rate_api;
pub mod frankfurter;
pub mod history;

pub use comparison::compare_dates;
pub use exchange_rate_api::ExchangeRateApiClient;
pub use frankfurter::FrankfurterClient;
pub use history::get_history;
