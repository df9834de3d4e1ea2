mod hubspot;

pub use hubspot::HubspotForms;
