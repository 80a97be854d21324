//! Static registry of supported currencies.
//!
//! Each entry carries a localized display name and a currency symbol.
//! The table is fixed at compile time and never mutated, so any number of
//! concurrent readers is safe without locking.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Supported currencies, in display order.
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", name: "Amerikan Doları", symbol: "$" },
    CurrencyInfo { code: "EUR", name: "Euro", symbol: "€" },
    CurrencyInfo { code: "TRY", name: "Türk Lirası", symbol: "₺" },
    CurrencyInfo { code: "GBP", name: "İngiliz Sterlini", symbol: "£" },
    CurrencyInfo { code: "JPY", name: "Japon Yeni", symbol: "¥" },
    CurrencyInfo { code: "CHF", name: "İsviçre Frangı", symbol: "CHF" },
    CurrencyInfo { code: "CAD", name: "Kanada Doları", symbol: "C$" },
    CurrencyInfo { code: "AUD", name: "Avustralya Doları", symbol: "A$" },
    CurrencyInfo { code: "CNY", name: "Çin Yuanı", symbol: "¥" },
    CurrencyInfo { code: "INR", name: "Hindistan Rupisi", symbol: "₹" },
    CurrencyInfo { code: "RUB", name: "Rus Rublesi", symbol: "₽" },
    CurrencyInfo { code: "BRL", name: "Brezilya Reali", symbol: "R$" },
    CurrencyInfo { code: "ZAR", name: "Güney Afrika Randı", symbol: "R" },
    CurrencyInfo { code: "KRW", name: "Güney Kore Wonu", symbol: "₩" },
    CurrencyInfo { code: "MXN", name: "Meksika Pezosu", symbol: "Mex$" },
    CurrencyInfo { code: "SAR", name: "Suudi Arabistan Riyali", symbol: "﷼" },
    CurrencyInfo { code: "AED", name: "BAE Dirhemi", symbol: "د.إ" },
    CurrencyInfo { code: "SEK", name: "İsveç Kronu", symbol: "kr" },
    CurrencyInfo { code: "NOK", name: "Norveç Kronu", symbol: "kr" },
    CurrencyInfo { code: "DKK", name: "Danimarka Kronu", symbol: "kr" },
    CurrencyInfo { code: "PLN", name: "Polonya Zlotisi", symbol: "zł" },
    CurrencyInfo { code: "SGD", name: "Singapur Doları", symbol: "S$" },
    CurrencyInfo { code: "NZD", name: "Yeni Zelanda Doları", symbol: "NZ$" },
];

/// Check whether a currency code is supported.
pub fn is_supported(code: &str) -> bool {
    CURRENCIES.iter().any(|c| c.code == code)
}

/// Look up display metadata for a currency code.
pub fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// All currencies as a JSON object keyed by code, preserving table order.
pub fn all_as_json() -> serde_json::Map<String, serde_json::Value> {
    CURRENCIES
        .iter()
        .map(|c| {
            (
                c.code.to_string(),
                serde_json::json!({ "name": c.name, "symbol": c.symbol }),
            )
        })
        .collect()
}
