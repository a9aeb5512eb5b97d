//! Serde helpers for backend columns

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::record::id_as_string;

/// `null` decodes as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Foreign key that may arrive as a string or a number
///
/// Numbers are stringified the same way the normalizer does primary keys,
/// so references compare equal to the canonical `id` they point at.
pub fn optional_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_as_string(&value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("referência inválida: {value}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "optional_reference")]
        unit: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    }

    fn row(value: Value) -> Result<Row, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_reference_accepts_strings_and_numbers() {
        assert_eq!(row(json!({ "unit": "u1" })).unwrap().unit.as_deref(), Some("u1"));
        assert_eq!(row(json!({ "unit": 42 })).unwrap().unit.as_deref(), Some("42"));
        assert_eq!(row(json!({ "unit": null })).unwrap().unit, None);
        assert_eq!(row(json!({})).unwrap().unit, None);
        assert!(row(json!({ "unit": [1] })).is_err());
    }

    #[test]
    fn test_null_as_default() {
        assert_eq!(row(json!({ "name": null })).unwrap().name, "");
        assert_eq!(row(json!({ "name": "Ana" })).unwrap().name, "Ana");
    }
}
