use serde::Serialize;

use crate::core::unit::{KilogramCo2e, SquareMeters};

//Each emission source carries a fixed share and a per-m² share
#[derive(Debug, Clone, Copy, Default)]
pub struct EmissionFactors {
    pub material_fixed: f64,
    pub material_per_sqm: f64,
    pub transport_fixed: f64,
    pub waste_fixed: f64,
    pub waste_per_sqm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionBreakdown {
    pub material: KilogramCo2e,
    pub transport: KilogramCo2e,
    pub waste: KilogramCo2e,
    pub total: KilogramCo2e,
}

impl EmissionFactors {
    pub fn estimate(&self, area: SquareMeters) -> EmissionBreakdown {
        let material = self.material_fixed + area.0 * self.material_per_sqm;
        let transport = self.transport_fixed;
        let waste = self.waste_fixed + area.0 * self.waste_per_sqm;
        EmissionBreakdown {
            material: KilogramCo2e(material),
            transport: KilogramCo2e(transport),
            waste: KilogramCo2e(waste),
            total: KilogramCo2e(material + transport + waste),
        }
    }
}
