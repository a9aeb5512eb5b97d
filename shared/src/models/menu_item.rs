//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::serde_helpers::null_as_default;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Price in currency units (BRL)
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Operating unit name; `None` means unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Absent or non-boolean wire values mean available; only `false` flips it
    #[serde(default = "available_by_default", deserialize_with = "deserialize_available")]
    pub available: bool,
}

impl MenuItem {
    /// Unit name, treating an empty string as unassigned
    pub fn unit_name(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }
}

/// Create menu item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MenuPayload {
    /// Same payload targeted at another unit
    pub fn for_unit(&self, unit: impl Into<String>) -> Self {
        Self {
            unit: Some(unit.into()),
            ..self.clone()
        }
    }
}

/// Update menu item payload
///
/// Only the fields that are `Some` are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MenuUpdate {
    /// Single-field availability update
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }
}

impl From<MenuPayload> for MenuUpdate {
    fn from(payload: MenuPayload) -> Self {
        Self {
            name: Some(payload.name),
            description: Some(payload.description),
            price: Some(payload.price),
            category: Some(payload.category),
            available: Some(payload.available),
            unit: payload.unit,
        }
    }
}

/// Prices must never be negative
pub fn is_valid_price(price: Decimal) -> bool {
    !price.is_sign_negative() || price.is_zero()
}

fn available_by_default() -> bool {
    true
}

fn deserialize_available<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(!matches!(value, serde_json::Value::Bool(false)))
}
