use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::observability::MonitoringConfig;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub hubspot: HubspotSettings,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HubspotSettings {
    pub portal_id: String,
    pub form_id: String,
    #[serde(default = "default_forms_base_url")]
    pub base_url: String,
}

fn default_forms_base_url() -> String {
    "https://api.hsforms.com".to_owned()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::default().separator("_").list_separator(","));

        let s = builder.build()?;
        s.try_deserialize()
    }
}
