//! Menu form
//!
//! Values are kept exactly as typed; [`FormData::validate`] turns them into
//! a backend payload or the first failing rule.

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::is_valid_price;
use shared::{MenuItem, MenuPayload};
use thiserror::Error;

/// Local form validation failure; never reaches the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Informe um nome.")]
    EmptyName,

    #[error("Preço inválido.")]
    InvalidPrice,

    #[error("Selecione uma categoria.")]
    MissingCategory,

    #[error("Selecione uma unidade.")]
    MissingUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub description: String,
    /// As typed; comma or period decimal separator
    pub price: String,
    pub category: String,
    pub unit: String,
    pub available: bool,
    /// Creation only: fan out one record per unit option
    pub apply_all_units: bool,
}

/// Single-field form change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    Name(String),
    Description(String),
    Price(String),
    Category(String),
    Unit(String),
    Available(bool),
    ApplyAllUnits(bool),
}

impl FormData {
    /// Blank form seeded with a unit
    pub fn empty(unit: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            unit: unit.into(),
            available: true,
            apply_all_units: false,
        }
    }

    /// Form pre-filled from an existing item (edit mode)
    pub fn from_item(item: &MenuItem, default_unit: &str) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item
                .price
                .map(|p| p.normalize().to_string())
                .unwrap_or_default(),
            category: item.category.clone(),
            unit: item
                .unit
                .clone()
                .unwrap_or_else(|| default_unit.to_string()),
            available: item.available,
            apply_all_units: false,
        }
    }

    /// Copy with one field replaced
    pub fn with(&self, update: FormUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FormUpdate::Name(v) => next.name = v,
            FormUpdate::Description(v) => next.description = v,
            FormUpdate::Price(v) => next.price = v,
            FormUpdate::Category(v) => next.category = v,
            FormUpdate::Unit(v) => next.unit = v,
            FormUpdate::Available(v) => next.available = v,
            FormUpdate::ApplyAllUnits(v) => next.apply_all_units = v,
        }
        next
    }

    /// Check the rules in order and build the unit-less payload
    pub fn validate(&self) -> Result<MenuPayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let price = parse_price(&self.price)
            .filter(|p| is_valid_price(*p))
            .ok_or(FormError::InvalidPrice)?;
        if self.category.is_empty() {
            return Err(FormError::MissingCategory);
        }
        if !self.apply_all_units && self.unit.is_empty() {
            return Err(FormError::MissingUnit);
        }

        Ok(MenuPayload {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category.clone(),
            available: self.available,
            unit: None,
        })
    }
}

/// Parse a typed amount, accepting a comma as decimal separator
///
/// Blank or non-numeric input yields `None`. Sign is not checked here.
pub fn parse_price(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    // Decimal accepts `_` digit separators; typed amounts never carry them
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}
