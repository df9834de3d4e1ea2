use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    //Slider bounds on all calculator pages
    pub const MIN: SquareMeters = SquareMeters(2.0);
    pub const MAX: SquareMeters = SquareMeters(50.0);

    pub fn validated(value: f64) -> Result<Self> {
        let area = Self(value);
        area.check_supported()?;
        Ok(area)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let value: f64 = raw.trim().parse()?;
        Self::validated(value)
    }

    pub fn check_supported(&self) -> Result<()> {
        if self.0.is_finite() && (Self::MIN.0..=Self::MAX.0).contains(&self.0) {
            Ok(())
        } else {
            Err(Error::InvalidArea { value: self.0 })
        }
    }
}

impl From<&SquareMeters> for f64 {
    fn from(value: &SquareMeters) -> Self {
        value.0
    }
}

impl From<f64> for SquareMeters {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<SquareMeters> for f64 {
    fn from(value: SquareMeters) -> Self {
        value.0
    }
}

impl Display for SquareMeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m²", self.0)
    }
}
