use serde::Serialize;

use crate::core::unit::{Days, KilogramCo2e, NorwegianKrone, Percent};
use crate::estimate::Estimate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison<T> {
    pub baseline: T,
    pub treatment: T,
    pub saved: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    pub cost: Comparison<NorwegianKrone>,
    pub time: Comparison<Days>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<Comparison<KilogramCo2e>>,
    pub reduction: Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTotals {
    pub cost: NorwegianKrone,
    pub time: Days,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<KilogramCo2e>,
}

impl SavingsReport {
    pub fn compare(baseline: &Estimate, treatment: &Estimate) -> Self {
        let cost = Comparison {
            baseline: baseline.cost,
            treatment: treatment.cost,
            saved: treatment.cost.saved_compared_to(baseline.cost),
        };
        let time = Comparison {
            baseline: baseline.time_in_days,
            treatment: treatment.time_in_days,
            saved: treatment.time_in_days.saved_compared_to(baseline.time_in_days),
        };
        let emissions = match (&baseline.emissions, &treatment.emissions) {
            (Some(base), Some(treat)) => Some(Comparison {
                baseline: base.total,
                treatment: treat.total,
                saved: treat.total.saved_compared_to(base.total),
            }),
            _ => None,
        };
        let reduction = if baseline.cost.0 > 0.0 {
            Percent(cost.saved.0 / baseline.cost.0 * 100.0)
        } else {
            Percent(0.0)
        };

        Self {
            cost,
            time,
            emissions,
            reduction,
        }
    }

    pub fn saved(&self) -> SavedTotals {
        SavedTotals {
            cost: self.cost.saved,
            time: self.time.saved,
            emissions: self.emissions.as_ref().map(|emissions| emissions.saved),
        }
    }
}

impl SavedTotals {
    //Shown while the demolition scenario itself is on display
    pub fn zero(with_emissions: bool) -> Self {
        Self {
            cost: NorwegianKrone(0.0),
            time: Days(0),
            emissions: with_emissions.then_some(KilogramCo2e(0.0)),
        }
    }
}
