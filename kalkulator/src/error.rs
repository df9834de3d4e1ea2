use crate::widget::DamageType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error parsing value to float")]
    NumberFormat(#[from] std::num::ParseFloatError),
    #[error("area {value} m² is outside the supported range")]
    InvalidArea { value: f64 },
    #[error("damage type {0} is not offered by this calculator")]
    UnsupportedDamageType(DamageType),
    #[error("no damage type selected")]
    MissingDamageType,
    #[error("missing required contact field: {field}")]
    IncompleteLead { field: &'static str },
    #[error("lead capture is not open")]
    LeadCaptureNotOpen,
    #[error("no price entry for area key {area_key}")]
    LookupMiss { area_key: u32 },
}
