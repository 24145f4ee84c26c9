//! Page Configuration
//!
//! Compile-time constants for the external endpoints and storage keys.

/// Exchange-rate source, keyed on the base currency
pub const RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Currency every displayed USD price is converted into
pub const QUOTE_CURRENCY: &str = "KRW";

/// USD→KRW rate used when the live rate cannot be loaded
pub const FALLBACK_KRW_RATE: f64 = 1450.0;

/// localStorage key holding the checklist state (JSON object id -> bool)
pub const CHECKLIST_STORAGE_KEY: &str = "distrokid_checklist_v1";

/// External purchase link shown in the footer
pub const PACKAGE_URL: &str = "https://kmong.com/self-marketing/730531/ZQh4nXZpK5";
