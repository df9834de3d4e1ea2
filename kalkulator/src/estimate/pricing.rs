use crate::core::unit::{Days, NorwegianKrone, SquareMeters};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub cost: NorwegianKrone,
    pub time: Days,
}

#[derive(Debug, Clone)]
pub enum PricingStrategy {
    Fixed(PriceQuote),
    Linear(LinearPricing),
    Lookup(LookupPricing),
}

#[derive(Debug, Clone)]
pub struct LinearPricing {
    pub cost_per_sqm: f64,
    pub time_per_sqm: f64,
    pub min_cost: NorwegianKrone,
    pub min_time: Days,
}

#[derive(Debug, Clone)]
pub struct LookupPricing {
    first_key: u32,
    entries: Vec<PriceQuote>,
}

impl PricingStrategy {
    pub fn quote(&self, area: SquareMeters) -> Result<PriceQuote> {
        match self {
            PricingStrategy::Fixed(quote) => Ok(*quote),
            PricingStrategy::Linear(pricing) => Ok(pricing.quote(area)),
            PricingStrategy::Lookup(pricing) => pricing.quote(area),
        }
    }
}

impl LinearPricing {
    fn quote(&self, area: SquareMeters) -> PriceQuote {
        let cost = (area.0 * self.cost_per_sqm).max(self.min_cost.0);
        let days = (area.0 * self.time_per_sqm).ceil() as u32;
        PriceQuote {
            cost: NorwegianKrone(cost),
            time: Days(days.max(self.min_time.0)),
        }
    }
}

impl LookupPricing {
    pub fn new(first_key: u32, entries: Vec<PriceQuote>) -> Self {
        Self { first_key, entries }
    }

    fn last_key(&self) -> u32 {
        self.first_key + (self.entries.len() as u32).saturating_sub(1)
    }

    //The key is clamped into the table range before indexing, so areas
    //outside the table resolve to the nearest priced entry
    fn quote(&self, area: SquareMeters) -> Result<PriceQuote> {
        let key = (area.0.round() as i64)
            .clamp(i64::from(self.first_key), i64::from(self.last_key())) as u32;
        self.entries
            .get((key - self.first_key) as usize)
            .copied()
            .ok_or(Error::LookupMiss { area_key: key })
    }
}
