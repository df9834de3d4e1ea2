mod catalog;
mod controller;
mod display;

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

pub use catalog::{bevar, mtek, mtett};
pub use controller::{Phase, WidgetController, WidgetSelection};
pub use display::WidgetDisplay;

use crate::core::unit::{Days, NorwegianKrone, SquareMeters};
use crate::error::{Error, Result};
use crate::estimate::{
    EmissionBreakdown, EmissionFactors, Estimate, PricingStrategy, SavedTotals, SavingsReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Repair,
    Demolition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Sisterne,
    Sluk,
    Terskel,
    Ror,
    Flis,
    Varmekabler,
    Gulv,
    Dusjnisje,
    Vegg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Lead {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(Error::IncompleteLead { field });
            }
        }
        Ok(())
    }
}

//Forwarded with the lead so the campaign pages can be told apart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadSubmission {
    pub lead: Lead,
    pub page: PageContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetResults {
    pub cost: NorwegianKrone,
    pub time_in_days: Days,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<EmissionBreakdown>,
    pub savings: SavedTotals,
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    name: &'static str,
    baseline: ScenarioConfig,
    treatments: Vec<(DamageType, ScenarioConfig)>,
    fallback_treatment: Option<ScenarioConfig>,
    default_damage_type: Option<DamageType>,
}

#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub pricing: PricingStrategy,
    pub emissions: Option<EmissionFactors>,
}

impl WidgetConfig {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn damage_types(&self) -> Vec<DamageType> {
        self.treatments.iter().map(|(damage_type, _)| *damage_type).collect()
    }

    pub fn supports(&self, damage_type: DamageType) -> bool {
        self.treatments.iter().any(|(supported, _)| *supported == damage_type)
    }

    pub fn default_damage_type(&self) -> Option<DamageType> {
        self.default_damage_type
    }

    pub fn requires_damage_selection(&self) -> bool {
        !self.treatments.is_empty()
    }

    pub fn has_emissions(&self) -> bool {
        self.baseline.emissions.is_some()
    }

    pub fn estimate(
        &self,
        area: SquareMeters,
        damage_type: Option<DamageType>,
        scenario: Scenario,
    ) -> Result<Estimate> {
        area.check_supported()?;
        let config = match scenario {
            Scenario::Demolition => &self.baseline,
            Scenario::Repair => self.treatment(damage_type)?,
        };
        let quote = config.pricing.quote(area)?;
        let emissions = config.emissions.map(|factors| factors.estimate(area));
        Ok(Estimate {
            cost: quote.cost,
            time_in_days: quote.time,
            emissions,
        })
    }

    pub fn savings(
        &self,
        area: SquareMeters,
        damage_type: Option<DamageType>,
    ) -> Result<SavingsReport> {
        let baseline = self.estimate(area, damage_type, Scenario::Demolition)?;
        let treatment = self.estimate(area, damage_type, Scenario::Repair)?;
        Ok(SavingsReport::compare(&baseline, &treatment))
    }

    fn treatment(&self, damage_type: Option<DamageType>) -> Result<&ScenarioConfig> {
        if self.treatments.is_empty() {
            return self
                .fallback_treatment
                .as_ref()
                .ok_or(Error::MissingDamageType);
        }
        match damage_type {
            None => Err(Error::MissingDamageType),
            Some(damage_type) => self
                .treatments
                .iter()
                .find(|(supported, _)| *supported == damage_type)
                .map(|(_, config)| config)
                .ok_or(Error::UnsupportedDamageType(damage_type)),
        }
    }
}
