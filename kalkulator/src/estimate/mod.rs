mod emissions;
mod pricing;
mod savings;

use serde::Serialize;

pub use emissions::{EmissionBreakdown, EmissionFactors};
pub use pricing::{LinearPricing, LookupPricing, PriceQuote, PricingStrategy};
pub use savings::{Comparison, SavedTotals, SavingsReport};

use crate::core::unit::{Days, NorwegianKrone};

//Serializes to the shape the embedding pages render from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub cost: NorwegianKrone,
    pub time_in_days: Days,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionBreakdown>,
}
