//! Argument normalization and schema validation (spec §4.G steps 2-3, §4.H
//! `validate_tool_args`).

use serde_json::Value;

use crate::schema::{InputSchema, PropertyType};

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("tool arguments must decode to a JSON object, got: {0}")]
    NotAnObject(String),
    #[error("tool arguments string did not parse as JSON: {0}")]
    InvalidJson(String),
}

/// `normalize_args` (spec §4.G step 2, §8 property 4): a `Value::Object`
/// passes through unchanged; a JSON string is parsed iff it decodes to an
/// object; anything else is rejected. Idempotent: re-normalizing an
/// already-normalized object returns the same value.
pub fn normalize_args(raw: &Value) -> Result<Value, NormalizeError> {
    match raw {
        Value::Object(_) => Ok(raw.clone()),
        Value::String(s) => {
            let parsed: Value = serde_json::from_str(s).map_err(|e| NormalizeError::InvalidJson(e.to_string()))?;
            match parsed {
                Value::Object(_) => Ok(parsed),
                other => Err(NormalizeError::NotAnObject(other.to_string())),
            }
        }
        other => Err(NormalizeError::NotAnObject(other.to_string())),
    }
}

/// A single schema violation (spec §4.G step 3: "collect all errors, not
/// just first").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Validates `args` (already normalized) against `schema`, collecting
/// every violation rather than short-circuiting on the first (spec §4.G
/// step 3, §4.H `validate_tool_args`).
pub fn validate_args(schema: &InputSchema, args: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Value::Object(map) = args else {
        errors.push(ValidationError {
            field: String::new(),
            message: "arguments must be a JSON object".to_string(),
        });
        return errors;
    };

    for field in &schema.required {
        if !map.contains_key(field) || map.get(field).is_some_and(Value::is_null) {
            errors.push(ValidationError {
                field: field.clone(),
                message: "missing required field".to_string(),
            });
        }
    }

    for (name, prop) in &schema.properties {
        let Some(value) = map.get(name) else { continue };
        if value.is_null() {
            if !prop.is_nullable() {
                errors.push(ValidationError {
                    field: name.clone(),
                    message: "field is not nullable but value was null".to_string(),
                });
            }
            continue;
        }
        if let Some(message) = type_mismatch(&prop.r#type, value) {
            errors.push(ValidationError { field: name.clone(), message });
        }
    }

    errors
}

fn type_mismatch(expected: &PropertyType, value: &Value) -> Option<String> {
    match expected {
        PropertyType::Nullable { inner } => type_mismatch(inner, value),
        PropertyType::String { r#enum } => {
            let Some(s) = value.as_str() else {
                return Some(format!("expected string, got {value}"));
            };
            if let Some(allowed) = r#enum {
                if !allowed.iter().any(|v| v == s) {
                    return Some(format!("{s:?} is not one of {allowed:?}"));
                }
            }
            None
        }
        PropertyType::Integer { minimum, maximum } => {
            let Some(n) = value.as_i64() else {
                return Some(format!("expected integer, got {value}"));
            };
            if let Some(min) = minimum {
                if n < *min {
                    return Some(format!("{n} is below minimum {min}"));
                }
            }
            if let Some(max) = maximum {
                if n > *max {
                    return Some(format!("{n} is above maximum {max}"));
                }
            }
            None
        }
        PropertyType::Number => {
            if value.as_f64().is_none() {
                Some(format!("expected number, got {value}"))
            } else {
                None
            }
        }
        PropertyType::Boolean => {
            if value.as_bool().is_none() {
                Some(format!("expected boolean, got {value}"))
            } else {
                None
            }
        }
        PropertyType::Array { items } => {
            let Some(arr) = value.as_array() else {
                return Some(format!("expected array, got {value}"));
            };
            arr.iter().find_map(|item| type_mismatch(items, item))
        }
        PropertyType::Object => {
            if value.as_object().is_none() {
                Some(format!("expected object, got {value}"))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertySchema;
    use std::collections::BTreeMap;

    fn schema_with_nullable_ref() -> InputSchema {
        let mut properties = BTreeMap::new();
        properties.insert(
            "full_name".to_string(),
            PropertySchema::new(PropertyType::String { r#enum: None }),
        );
        properties.insert(
            "ref".to_string(),
            PropertySchema::new(PropertyType::Nullable {
                inner: Box::new(PropertyType::String { r#enum: None }),
            }),
        );
        InputSchema::object(properties, vec!["full_name".to_string()])
    }

    #[test]
    fn normalize_is_idempotent_on_objects() {
        let value = serde_json::json!({"a": 1});
        let once = normalize_args(&value).unwrap();
        let twice = normalize_args(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_parses_json_string_object() {
        let value = Value::String(r#"{"a": 1}"#.to_string());
        let normalized = normalize_args(&value).unwrap();
        assert_eq!(normalized, serde_json::json!({"a": 1}));
    }

    #[test]
    fn normalize_rejects_non_object_json_string() {
        let value = Value::String("[1,2,3]".to_string());
        assert!(normalize_args(&value).is_err());
    }

    #[test]
    fn normalize_rejects_invalid_json_string() {
        let value = Value::String("not json".to_string());
        assert!(matches!(normalize_args(&value), Err(NormalizeError::InvalidJson(_))));
    }

    #[test]
    fn normalize_rejects_non_mapping_values() {
        assert!(normalize_args(&serde_json::json!(42)).is_err());
    }

    #[test]
    fn missing_required_field_is_collected() {
        let schema = schema_with_nullable_ref();
        let errors = validate_args(&schema, &serde_json::json!({}));
        assert!(errors.iter().any(|e| e.field == "full_name"));
    }

    #[test]
    fn nullable_field_accepts_explicit_null() {
        let schema = schema_with_nullable_ref();
        let errors = validate_args(&schema, &serde_json::json!({"full_name": "o/r", "ref": null}));
        assert!(errors.is_empty());
    }

    #[test]
    fn non_nullable_field_rejects_null() {
        let schema = schema_with_nullable_ref();
        let errors = validate_args(&schema, &serde_json::json!({"full_name": null}));
        assert!(errors.iter().any(|e| e.field == "full_name"));
    }

    #[test]
    fn collects_every_violation_not_just_the_first() {
        let mut properties = BTreeMap::new();
        properties.insert("a".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }));
        properties.insert("b".to_string(), PropertySchema::new(PropertyType::Integer { minimum: None, maximum: None }));
        let schema = InputSchema::object(properties, vec!["a".to_string(), "b".to_string()]);
        let errors = validate_args(&schema, &serde_json::json!({}));
        assert_eq!(errors.len(), 2);
    }
}
