//! Typed `input_schema` model (spec §3): a JSON-Schema-shaped object
//! `{type: "object", properties, required}` plus a deterministic
//! `input_schema_hash` digest for cache coherence (spec §8 property 1).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Semantic scalar/collection types a property can declare. `Nullable`
/// wraps another type to express "optional field mapped to a sum type, not
/// a language-specific nullable" (spec §9 design note).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyType {
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        r#enum: Option<Vec<String>>,
    },
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        minimum: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        maximum: Option<i64>,
    },
    Number,
    Boolean,
    Array {
        items: Box<PropertyType>,
    },
    Object,
    /// Wraps an underlying type as nullable: the schema accepts either the
    /// wrapped type or JSON `null` (spec §4.H: "Optional fields with `null`
    /// values are accepted iff the schema marks them nullable").
    Nullable {
        inner: Box<PropertyType>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    pub r#type: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    pub fn new(r#type: PropertyType) -> Self {
        Self { r#type, description: None }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self.r#type, PropertyType::Nullable { .. })
    }
}

/// `{type: "object", properties, required}` (spec §3). `BTreeMap` keeps
/// property iteration order stable, which matters for
/// `input_schema_hash`'s determinism (spec §8 property 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    pub r#type: &'static str,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

impl InputSchema {
    pub fn object(properties: BTreeMap<String, PropertySchema>, required: Vec<String>) -> Self {
        Self { r#type: "object", properties, required }
    }

    /// Deterministic digest of the schema shape (spec §3
    /// `input_schema_hash`, §8 property 1: "stable across process restarts
    /// with unchanged signature"). Hashes the canonical JSON serialization
    /// rather than `Hash`-deriving the struct so the digest is stable
    /// across Rust versions and independent of in-memory layout.
    pub fn stable_hash(&self) -> String {
        let canonical = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> InputSchema {
        let mut properties = BTreeMap::new();
        properties.insert(
            "full_name".to_string(),
            PropertySchema::new(PropertyType::String { r#enum: None }).describe("owner/repo"),
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
    fn hash_is_stable_across_independent_builds() {
        let a = sample_schema();
        let b = sample_schema();
        assert_eq!(a.stable_hash(), b.stable_hash());
    }

    #[test]
    fn hash_changes_when_shape_changes() {
        let a = sample_schema();
        let mut b_props = a.properties.clone();
        b_props.insert(
            "extra".to_string(),
            PropertySchema::new(PropertyType::Boolean),
        );
        let b = InputSchema::object(b_props, a.required.clone());
        assert_ne!(a.stable_hash(), b.stable_hash());
    }

    #[test]
    fn nullable_property_is_detected() {
        let schema = sample_schema();
        assert!(schema.properties["ref"].is_nullable());
        assert!(!schema.properties["full_name"].is_nullable());
    }
}
