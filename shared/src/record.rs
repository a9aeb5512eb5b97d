//! Record normalizer
//!
//! Backends disagree on the primary-key field: the Parse dialect calls it
//! `objectId`, PostgREST calls it `id`. Everything above the gateway only
//! ever sees the canonical `id`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Canonical identifier field
pub const ID_FIELD: &str = "id";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Registro sem identificador")]
    MissingId,

    #[error("Registro inválido: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Backend wire dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Parse-compatible REST (Back4App)
    Parse,
    /// PostgREST-compatible REST (Supabase)
    Postgrest,
}

impl Dialect {
    /// Name of the provider-specific primary-key field
    pub fn primary_key(&self) -> &'static str {
        match self {
            Dialect::Parse => "objectId",
            Dialect::Postgrest => "id",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Parse => write!(f, "parse"),
            Dialect::Postgrest => write!(f, "postgrest"),
        }
    }
}

/// A backend record with its identifier lifted into `id`
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    /// `None` when the backend sent neither key; callers must reject it
    pub id: Option<String>,
    pub fields: Map<String, Value>,
}

impl CanonicalRecord {
    /// Decode into a domain entity
    pub fn into_entity<T: DeserializeOwned>(self) -> Result<T, RecordError> {
        if self.id.is_none() {
            return Err(RecordError::MissingId);
        }
        Ok(serde_json::from_value(Value::Object(self.fields))?)
    }
}

/// Lift `objectId` (falling back to `id`) into the canonical `id` field.
///
/// Total: every other field is kept as-is. String and numeric keys are
/// accepted; anything else yields `id = None`.
pub fn normalize_record(mut fields: Map<String, Value>) -> CanonicalRecord {
    let id = [Dialect::Parse.primary_key(), Dialect::Postgrest.primary_key()]
        .iter()
        .find_map(|key| fields.get(*key).and_then(id_as_string));

    match &id {
        Some(id) => {
            fields.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        }
        None => {
            fields.remove(ID_FIELD);
        }
    }

    CanonicalRecord { id, fields }
}

pub(crate) fn id_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_both_dialects_expose_the_same_id() {
        let parse = normalize_record(object(json!({ "objectId": "xYz1", "name": "Pizza" })));
        let postgrest = normalize_record(object(json!({ "id": "xYz1", "name": "Pizza" })));

        assert_eq!(parse.id.as_deref(), Some("xYz1"));
        assert_eq!(postgrest.id.as_deref(), Some("xYz1"));

        let a: MenuItem = parse.into_entity().unwrap();
        let b: MenuItem = postgrest.into_entity().unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_object_id_wins_over_id() {
        let record = normalize_record(object(json!({ "objectId": "parse", "id": "other" })));
        assert_eq!(record.id.as_deref(), Some("parse"));
        assert_eq!(record.fields["id"], json!("parse"));
        assert_eq!(record.fields["objectId"], json!("parse"));
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let record = normalize_record(object(json!({ "id": 42, "name": "Suco" })));
        assert_eq!(record.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_other_fields_are_untouched() {
        let record = normalize_record(object(json!({
            "objectId": "a",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "price": 30
        })));
        assert_eq!(record.fields["createdAt"], json!("2024-01-01T00:00:00.000Z"));
        assert_eq!(record.fields["price"], json!(30));
    }

    #[test]
    fn test_missing_id_is_a_defect() {
        let record = normalize_record(object(json!({ "name": "Pizza", "id": null })));
        assert!(record.id.is_none());
        assert!(!record.fields.contains_key("id"));
        assert!(matches!(
            record.into_entity::<MenuItem>(),
            Err(RecordError::MissingId)
        ));
    }

    #[test]
    fn test_primary_keys() {
        assert_eq!(Dialect::Parse.primary_key(), "objectId");
        assert_eq!(Dialect::Postgrest.primary_key(), "id");
    }
}
