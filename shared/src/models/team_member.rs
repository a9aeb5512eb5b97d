//! Team Member Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{null_as_default, optional_reference};

/// Team member entity (read-only for the application)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub avatar_url: Option<String>,
    /// Unit reference (Unit id, not name)
    #[serde(default, alias = "unit_id", deserialize_with = "optional_reference")]
    pub unit_id: Option<String>,
}
