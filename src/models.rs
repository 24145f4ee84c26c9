//! Page Models
//!
//! Static content shapes plus the exchange-rate state.

/// Top navigation entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// One release-preparation task
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub text: &'static str,
}

/// A timeline group of checklist items (D-42, D-28, ...)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistStep {
    pub badge: &'static str,
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

/// How a plan feature line is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureStyle {
    /// Green check
    Included,
    /// Check in an accent color; the value is the extra `li` classes
    Highlight(&'static str),
    /// Greyed out with a cross
    Excluded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub style: FeatureStyle,
}

/// Yearly distribution plan card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price_usd: f64,
    pub tagline: &'static str,
    pub features: &'static [PlanFeature],
    /// Corner ribbon such as "MOST POPULAR"; also switches on the accent border
    pub ribbon: Option<&'static str>,
}

/// Bullet line with a bold lead-in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub lead: &'static str,
    pub text: &'static str,
}

/// Market-environment card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub bullets: &'static [Bullet],
}

/// Delivery-format card in the tech section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecCard {
    pub title: &'static str,
    pub decoration: &'static str,
    pub lead: &'static str,
    pub lines: &'static [&'static str],
}

/// Row of the revenue simulation table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutRow {
    pub platform: &'static str,
    pub basis: &'static str,
    pub amount_usd: f64,
    pub amount_class: &'static str,
    /// Text before the unit rate, or the whole note when there is no rate
    pub note_lead: &'static str,
    pub unit_usd: Option<f64>,
    pub note_tail: &'static str,
}

/// Numbered HyperFollow tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketingTool {
    pub step: u8,
    pub description: &'static str,
}

// ========================
// Exchange Rate
// ========================

/// A USD→KRW rate read from the rate source
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub rate: f64,
    /// Korean short date ("2026. 1. 15."), None when the source date was unreadable
    pub as_of: Option<String>,
}

/// Exchange-rate load state, set once per page load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RateState {
    /// Request still in flight
    #[default]
    Pending,
    /// Live rate from the source
    Live(Quote),
    /// Request failed; the fixed fallback rate is used and no date is shown
    Fallback(f64),
}

impl RateState {
    /// Multiplier to apply, None while pending
    pub fn rate(&self) -> Option<f64> {
        match self {
            RateState::Pending => None,
            RateState::Live(quote) => Some(quote.rate),
            RateState::Fallback(rate) => Some(*rate),
        }
    }

    pub fn as_of(&self) -> Option<&str> {
        match self {
            RateState::Live(quote) => quote.as_of.as_deref(),
            _ => None,
        }
    }
}
