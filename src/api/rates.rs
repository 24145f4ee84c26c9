//! Exchange Rate Source
//!
//! One-shot USD→KRW lookup. Any failure resolves to the fallback rate.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate};
use leptos::logging::{error, log, warn};
use serde::Deserialize;

use super::fetch_text;
use crate::config::{FALLBACK_KRW_RATE, QUOTE_CURRENCY, RATES_URL};
use crate::error::RateError;
use crate::models::{Quote, RateState};

/// Body of `GET /v4/latest/USD`
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    date: Option<String>,
    rates: HashMap<String, f64>,
}

/// Extract the `currency` rate and as-of date from a rates response body
pub fn parse_quote(body: &str, currency: &str) -> Result<Quote, RateError> {
    let response: RatesResponse = serde_json::from_str(body)?;
    let rate = *response
        .rates
        .get(currency)
        .ok_or_else(|| RateError::MissingRate(currency.to_string()))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(RateError::InvalidRate { currency: currency.to_string(), rate });
    }

    let as_of = response.date.as_deref().and_then(|raw| {
        let formatted = korean_short_date(raw);
        if formatted.is_none() {
            warn!("[RATES] Unreadable rate date: {:?}", raw);
        }
        formatted
    });
    Ok(Quote { rate, as_of })
}

/// "2026-01-15" (or an RFC 3339 timestamp) -> "2026. 1. 15."
pub fn korean_short_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;
    Some(format!("{}. {}. {}.", date.year(), date.month(), date.day()))
}

/// Turn a lookup result into the page's rate state, logging failures
pub fn resolve_rate(result: Result<Quote, RateError>) -> RateState {
    match result {
        Ok(quote) => {
            log!("[RATES] Loaded USD→{} {} as of {:?}", QUOTE_CURRENCY, quote.rate, quote.as_of);
            RateState::Live(quote)
        }
        Err(e) => {
            error!("[RATES] Failed to fetch rates, using fallback {}: {}", FALLBACK_KRW_RATE, e);
            RateState::Fallback(FALLBACK_KRW_RATE)
        }
    }
}

async fn fetch_quote() -> Result<Quote, RateError> {
    let body = fetch_text(RATES_URL).await?;
    parse_quote(&body, QUOTE_CURRENCY)
}

/// Load the exchange rate once. Never fails: errors become [`RateState::Fallback`].
pub async fn load_exchange_rate() -> RateState {
    resolve_rate(fetch_quote().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "USD",
        "date": "2026-01-15",
        "time_last_updated": 1768435201,
        "rates": { "USD": 1, "EUR": 0.92, "KRW": 1452.37 }
    }"#;

    #[test]
    fn test_parse_quote() {
        let quote = parse_quote(BODY, "KRW").unwrap();
        assert_eq!(quote.rate, 1452.37);
        assert_eq!(quote.as_of.as_deref(), Some("2026. 1. 15."));
    }

    #[test]
    fn test_parse_quote_missing_currency() {
        let err = parse_quote(r#"{"date":"2026-01-15","rates":{"USD":1}}"#, "KRW").unwrap_err();
        assert!(matches!(err, RateError::MissingRate(ref c) if c == "KRW"));
    }

    #[test]
    fn test_parse_quote_rejects_garbage() {
        assert!(matches!(parse_quote("<html>502</html>", "KRW"), Err(RateError::Body(_))));
        assert!(matches!(parse_quote(r#"{"date":"2026-01-15"}"#, "KRW"), Err(RateError::Body(_))));
        assert!(matches!(
            parse_quote(r#"{"rates":{"KRW":0}}"#, "KRW"),
            Err(RateError::InvalidRate { .. })
        ));
        assert!(matches!(
            parse_quote(r#"{"rates":{"KRW":-3.5}}"#, "KRW"),
            Err(RateError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_unreadable_date_keeps_rate() {
        let quote = parse_quote(r#"{"date":"soon","rates":{"KRW":1400}}"#, "KRW").unwrap();
        assert_eq!(quote.rate, 1400.0);
        assert_eq!(quote.as_of, None);

        let quote = parse_quote(r#"{"rates":{"KRW":1400}}"#, "KRW").unwrap();
        assert_eq!(quote.as_of, None);
    }

    #[test]
    fn test_korean_short_date() {
        assert_eq!(korean_short_date("2026-01-05").as_deref(), Some("2026. 1. 5."));
        assert_eq!(korean_short_date("2026-12-31").as_deref(), Some("2026. 12. 31."));
        assert_eq!(korean_short_date("2026-03-02T09:00:00+09:00").as_deref(), Some("2026. 3. 2."));
        assert_eq!(korean_short_date("2026-13-01"), None);
        assert_eq!(korean_short_date(""), None);
    }

    #[test]
    fn test_resolve_rate_falls_back() {
        let state = resolve_rate(Err(RateError::Status(503)));
        assert_eq!(state, RateState::Fallback(1450.0));
        assert_eq!(state.rate(), Some(1450.0));
        assert_eq!(state.as_of(), None);

        let state = resolve_rate(parse_quote(BODY, "KRW"));
        assert_eq!(state.rate(), Some(1452.37));
    }
}
