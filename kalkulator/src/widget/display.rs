use crate::widget::{DamageType, Scenario};

pub trait WidgetDisplay {
    fn display(&self) -> &'static str;
}

impl WidgetDisplay for DamageType {
    fn display(&self) -> &'static str {
        match self {
            DamageType::Sisterne => "Sisterne",
            DamageType::Sluk => "Sluk",
            DamageType::Terskel => "Terskel",
            DamageType::Ror => "Rør",
            DamageType::Flis => "Flis",
            DamageType::Varmekabler => "Varmekabler",
            DamageType::Gulv => "Gulv",
            DamageType::Dusjnisje => "Dusjnisje",
            DamageType::Vegg => "Vegg",
        }
    }
}

impl WidgetDisplay for Scenario {
    fn display(&self) -> &'static str {
        match self {
            Scenario::Repair => "Reparasjon",
            Scenario::Demolition => "Riving",
        }
    }
}
