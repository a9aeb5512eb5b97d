//! Unit Model (operating location)

use serde::{Deserialize, Serialize};

/// Restaurant unit entity (read-only for the application)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    /// Join key for `MenuItem::unit`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "weather_location")]
    pub weather_location: Option<String>,
}

impl Unit {
    /// Name, treating an empty string as missing
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}
