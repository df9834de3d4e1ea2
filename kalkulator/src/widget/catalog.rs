use crate::core::unit::{Days, NorwegianKrone};
use crate::estimate::{EmissionFactors, LinearPricing, LookupPricing, PriceQuote, PricingStrategy};
use crate::widget::{DamageType, ScenarioConfig, WidgetConfig};

//All M-tett case figures are stated for this bathroom size and scale
//linearly from it
const MTETT_REFERENCE_AREA: f64 = 9.0;

//Demolition priced per m², each repairable damage a fixed offer
pub fn bevar() -> WidgetConfig {
    WidgetConfig {
        name: "Bevar priskalkulator",
        baseline: ScenarioConfig {
            pricing: PricingStrategy::Linear(LinearPricing {
                cost_per_sqm: 8500.0,
                time_per_sqm: 3.0,
                min_cost: NorwegianKrone(45000.0),
                min_time: Days(14),
            }),
            emissions: None,
        },
        treatments: vec![
            //45k-50k quote range averaged
            (DamageType::Sisterne, fixed_repair(47500.0, 2)),
            (DamageType::Sluk, fixed_repair(37500.0, 1)),
            (DamageType::Terskel, fixed_repair(32500.0, 1)),
            (DamageType::Ror, fixed_repair(27500.0, 1)),
            (DamageType::Flis, fixed_repair(12000.0, 1)),
            (DamageType::Varmekabler, fixed_repair(42500.0, 2)),
        ],
        fallback_treatment: None,
        default_damage_type: Some(DamageType::Sisterne),
    }
}

//One renovation offer for the whole room, no damage picker, CO2e
//factors on both scenarios
pub fn mtek() -> WidgetConfig {
    WidgetConfig {
        name: "Kalkulator M-tek",
        baseline: ScenarioConfig {
            pricing: PricingStrategy::Linear(LinearPricing {
                cost_per_sqm: 9500.0,
                time_per_sqm: 0.0,
                min_cost: NorwegianKrone(50000.0),
                min_time: Days(0),
            }),
            //Riving uten gjenbruk, coefficients from the reference sheet
            emissions: Some(EmissionFactors {
                material_per_sqm: 302.9770853070729,
                transport_fixed: 276.48,
                waste_per_sqm: 50.697377709796484,
                ..EmissionFactors::default()
            }),
        },
        treatments: vec![],
        fallback_treatment: Some(ScenarioConfig {
            pricing: PricingStrategy::Fixed(PriceQuote {
                cost: NorwegianKrone(42500.0),
                time: Days(0),
            }),
            //Rehabilitering med gjenbruk av rommet
            emissions: Some(EmissionFactors {
                material_fixed: 2.772268831128445,
                material_per_sqm: 31.99593373339319,
                transport_fixed: 46.08,
                waste_fixed: 0.31166493604653883,
                waste_per_sqm: 3.627543711527616,
            }),
        }),
        default_damage_type: None,
    }
}

//Full rebuild priced from a table keyed by the rounded area, against
//six membrane-preserving repair cases
pub fn mtett() -> WidgetConfig {
    WidgetConfig {
        name: "Kalkulator M-tett",
        baseline: ScenarioConfig {
            pricing: PricingStrategy::Lookup(LookupPricing::new(
                2,
                vec![
                    quote(299000.0, 25),
                    quote(312000.0, 25),
                    quote(322000.0, 25),
                    quote(338000.0, 25),
                    quote(353000.0, 25),
                    quote(368000.0, 25),
                    quote(378000.0, 25),
                    quote(398000.0, 25),
                    quote(413000.0, 25),
                    quote(428000.0, 30),
                    quote(443000.0, 30),
                    quote(443000.0, 30),
                    quote(453000.0, 30),
                    quote(453000.0, 30),
                    quote(463000.0, 30),
                    quote(463000.0, 30),
                    quote(473000.0, 30),
                    quote(483000.0, 30),
                    quote(493000.0, 30),
                    quote(503000.0, 30),
                    quote(513000.0, 30),
                    quote(523000.0, 30),
                    quote(533000.0, 30),
                    quote(543000.0, 30),
                ],
            )),
            emissions: Some(EmissionFactors {
                material_fixed: 425.75,
                material_per_sqm: 232.5,
                ..EmissionFactors::default()
            }),
        },
        treatments: vec![
            (DamageType::Sluk, fixed_case(35000.0, 3, 41.847333005119644)),
            (DamageType::Gulv, scaled_case(130000.0, 7, 1627.8694474703302)),
            (DamageType::Sisterne, fixed_case(65000.0, 5, 233.74103626466453)),
            (DamageType::Terskel, fixed_case(15000.0, 2, 50.451139066157886)),
            (DamageType::Dusjnisje, fixed_case(120000.0, 5, 664.2903186439871)),
            (DamageType::Vegg, fixed_case(90000.0, 7, 1068.4444000282804)),
        ],
        fallback_treatment: None,
        default_damage_type: None,
    }
}

fn quote(cost: f64, days: u32) -> PriceQuote {
    PriceQuote {
        cost: NorwegianKrone(cost),
        time: Days(days),
    }
}

fn fixed_repair(cost: f64, days: u32) -> ScenarioConfig {
    ScenarioConfig {
        pricing: PricingStrategy::Fixed(quote(cost, days)),
        emissions: None,
    }
}

fn fixed_case(cost: f64, days: u32, co2e: f64) -> ScenarioConfig {
    ScenarioConfig {
        pricing: PricingStrategy::Fixed(quote(cost, days)),
        emissions: Some(EmissionFactors {
            material_fixed: co2e,
            ..EmissionFactors::default()
        }),
    }
}

//The whole-floor case is the one M-tett case that grows with the room
fn scaled_case(cost_at_reference: f64, days: u32, co2e_at_reference: f64) -> ScenarioConfig {
    ScenarioConfig {
        pricing: PricingStrategy::Linear(LinearPricing {
            cost_per_sqm: cost_at_reference / MTETT_REFERENCE_AREA,
            time_per_sqm: 0.0,
            min_cost: NorwegianKrone(0.0),
            min_time: Days(days),
        }),
        emissions: Some(EmissionFactors {
            material_per_sqm: co2e_at_reference / MTETT_REFERENCE_AREA,
            ..EmissionFactors::default()
        }),
    }
}
