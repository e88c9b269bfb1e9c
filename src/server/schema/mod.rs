//! Declarative payload schemas and the validator that enforces them.
//!
//! A `Schema` names the key the payload must be nested under and the rules for each field
//! of that nested object. Validation is pure: it never touches the store, reports every
//! violated rule at once, and on success returns the nested object with numeric fields
//! converted from their textual form (form submissions carry every value as a string).

pub mod payload;

use serde_json::{Map, Number, Value};
use std::fmt;

use crate::server::error::validation::ValidationError;

/// Rule applied to a single field of a schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Non-empty string.
    String,
    /// Any finite number, optionally bounded below.
    Number { min: Option<f64> },
    /// Whole number within an inclusive range.
    Integer { min: i64, max: i64 },
}

/// A named field and the rule its value must satisfy. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Shape of a payload: an object under `key` with exactly the declared `fields`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    pub key: &'static str,
    pub fields: &'static [FieldRule],
}

/// Schema for campground create and update payloads.
pub const CAMPGROUND_SCHEMA: Schema = Schema {
    key: "campground",
    fields: &[
        FieldRule {
            name: "title",
            kind: FieldKind::String,
        },
        FieldRule {
            name: "price",
            kind: FieldKind::Number { min: Some(0.0) },
        },
        FieldRule {
            name: "description",
            kind: FieldKind::String,
        },
        FieldRule {
            name: "location",
            kind: FieldKind::String,
        },
    ],
};

/// Schema for review create payloads.
pub const REVIEW_SCHEMA: Schema = Schema {
    key: "review",
    fields: &[
        FieldRule {
            name: "rating",
            kind: FieldKind::Integer { min: 1, max: 5 },
        },
        FieldRule {
            name: "body",
            kind: FieldKind::String,
        },
    ],
};

/// Identifier of a declared schema, selected per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaName {
    Campground,
    Review,
}

impl SchemaName {
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Campground => &CAMPGROUND_SCHEMA,
            Self::Review => &REVIEW_SCHEMA,
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema().key)
    }
}

/// Validates `payload` against the named schema.
///
/// # Arguments
/// - `name` - Schema to validate against
/// - `payload` - Raw payload, expected to look like `{ "<key>": { ... } }`
///
/// # Returns
/// - `Ok(Map)` - The nested object with values normalized to their declared types
/// - `Err(ValidationError)` - One message per violated rule
pub fn validate(name: SchemaName, payload: &Value) -> Result<Map<String, Value>, ValidationError> {
    name.schema().validate(payload)
}

impl Schema {
    /// Validates `payload` against this schema.
    ///
    /// See [`validate`].
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, ValidationError> {
        let Some(root) = payload.as_object() else {
            return Err(ValidationError::new(vec![
                "\"value\" must be of type object".to_string(),
            ]));
        };

        let unknown_root: Vec<String> = root
            .keys()
            .filter(|key| key.as_str() != self.key)
            .map(|key| format!("\"{}\" is not allowed", key))
            .collect();

        let inner = match root.get(self.key) {
            None | Some(Value::Null) => {
                let mut details = vec![format!("\"{}\" is required", self.key)];
                details.extend(unknown_root);
                return Err(ValidationError::new(details));
            }
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                let mut details = vec![format!("\"{}\" must be of type object", self.key)];
                details.extend(unknown_root);
                return Err(ValidationError::new(details));
            }
        };

        let mut details = Vec::new();
        let mut normalized = Map::new();

        for rule in self.fields {
            let path = format!("{}.{}", self.key, rule.name);
            match check_field(&path, rule.kind, inner.get(rule.name)) {
                Ok(value) => {
                    normalized.insert(rule.name.to_string(), value);
                }
                Err(message) => details.push(message),
            }
        }

        for key in inner.keys() {
            if !self.fields.iter().any(|rule| rule.name == key) {
                details.push(format!("\"{}.{}\" is not allowed", self.key, key));
            }
        }

        details.extend(unknown_root);

        if details.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError::new(details))
        }
    }
}

/// Checks a single field value, returning its normalized form or the violation message.
fn check_field(path: &str, kind: FieldKind, value: Option<&Value>) -> Result<Value, String> {
    let value = match value {
        None | Some(Value::Null) => return Err(format!("\"{path}\" is required")),
        Some(value) => value,
    };

    match kind {
        FieldKind::String => match value {
            Value::String(s) if s.is_empty() => Err(format!("\"{path}\" is not allowed to be empty")),
            Value::String(s) => Ok(Value::String(s.clone())),
            _ => Err(format!("\"{path}\" must be a string")),
        },
        FieldKind::Number { min } => {
            let number = as_number(value).ok_or_else(|| format!("\"{path}\" must be a number"))?;

            if let Some(min) = min {
                if number < min {
                    return Err(format!(
                        "\"{path}\" must be greater than or equal to {min}"
                    ));
                }
            }

            Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| format!("\"{path}\" must be a number"))
        }
        FieldKind::Integer { min, max } => {
            let number = as_number(value).ok_or_else(|| format!("\"{path}\" must be a number"))?;

            if number.fract() != 0.0 {
                return Err(format!("\"{path}\" must be an integer"));
            }
            if number < min as f64 {
                return Err(format!(
                    "\"{path}\" must be greater than or equal to {min}"
                ));
            }
            if number > max as f64 {
                return Err(format!("\"{path}\" must be less than or equal to {max}"));
            }

            Ok(Value::from(number as i64))
        }
    }
}

/// Reads a finite number from a JSON number or a numeric string.
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}
