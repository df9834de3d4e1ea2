use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

use crate::core::unit::format_nb;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct KilogramCo2e(pub f64);

impl KilogramCo2e {
    pub fn saved_compared_to(self, baseline: KilogramCo2e) -> KilogramCo2e {
        KilogramCo2e((baseline.0 - self.0).max(0.0))
    }
}

impl From<&KilogramCo2e> for f64 {
    fn from(value: &KilogramCo2e) -> Self {
        value.0
    }
}

impl From<f64> for KilogramCo2e {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<KilogramCo2e> for f64 {
    fn from(value: KilogramCo2e) -> Self {
        value.0
    }
}

impl Display for KilogramCo2e {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kgCO2e", format_nb(self.0, 1))
    }
}

impl std::ops::Add for KilogramCo2e {
    type Output = KilogramCo2e;

    fn add(self, rhs: Self) -> Self::Output {
        KilogramCo2e(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_one_decimal_and_unit() {
        assert_eq!(KilogramCo2e(369.7752307714622).to_string(), "369,8 kgCO2e");
        assert_eq!(
            KilogramCo2e(1627.8694474703302).to_string(),
            "1\u{a0}627,9 kgCO2e"
        );
        assert_eq!(KilogramCo2e(0.0).to_string(), "0,0 kgCO2e");
    }

    #[test]
    fn saved_emissions_floor_at_zero() {
        let wall_repair = KilogramCo2e(1068.4444000282804);
        let small_demolition = KilogramCo2e(890.75);
        assert_eq!(
            wall_repair.saved_compared_to(small_demolition),
            KilogramCo2e(0.0)
        );
    }
}
