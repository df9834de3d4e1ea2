use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, AsRef, Serialize, Deserialize,
)]
pub struct Days(pub u32);

impl Days {
    pub fn saved_compared_to(self, baseline: Days) -> Days {
        Days(baseline.0.saturating_sub(self.0))
    }
}

impl From<u32> for Days {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Days> for u32 {
    fn from(value: Days) -> Self {
        value.0
    }
}

impl Display for Days {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "1 dag"),
            days if days < 7 => write!(f, "{days} dager"),
            days => {
                let weeks = (f64::from(days) / 7.0).round() as u32;
                if weeks == 1 {
                    write!(f, "1 uke")
                } else {
                    write!(f, "{weeks} uker")
                }
            }
        }
    }
}
