//! UI Components
//!
//! Page sections and the small building blocks they share.

mod section_heading;
mod krw;
mod nav_bar;
mod hero;
mod market_section;
mod pricing_section;
mod tech_section;
mod payout_section;
mod marketing_section;
mod checklist_section;
mod footer;

pub use section_heading::SectionHeading;
pub use krw::{InlineKrw, PlanPrice};
pub use nav_bar::NavBar;
pub use hero::Hero;
pub use market_section::MarketSection;
pub use pricing_section::PricingSection;
pub use tech_section::TechSection;
pub use payout_section::PayoutSection;
pub use marketing_section::MarketingSection;
pub use checklist_section::ChecklistSection;
pub use footer::Footer;
