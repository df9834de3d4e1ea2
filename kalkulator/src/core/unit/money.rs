use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

use crate::core::unit::format_nb;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct NorwegianKrone(pub f64);

impl From<&NorwegianKrone> for f64 {
    fn from(value: &NorwegianKrone) -> Self {
        value.0
    }
}

impl From<f64> for NorwegianKrone {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<NorwegianKrone> for f64 {
    fn from(value: NorwegianKrone) -> Self {
        value.0
    }
}

impl Display for NorwegianKrone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "kr {}", format_nb(self.0, 0))
    }
}

impl std::ops::Add for NorwegianKrone {
    type Output = NorwegianKrone;

    fn add(self, rhs: Self) -> Self::Output {
        NorwegianKrone(self.0 + rhs.0)
    }
}

impl NorwegianKrone {
    //Floored at zero, savings are never negative
    pub fn saved_compared_to(self, baseline: NorwegianKrone) -> NorwegianKrone {
        NorwegianKrone((baseline.0 - self.0).max(0.0))
    }
}
