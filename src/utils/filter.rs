use serde_json::{Map, Value};

use crate::utils::error::{ClientError, FieldFailure, FilterFailures, Result};

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON type a described field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Boolean => "a boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
        }
    }
}

/// Declares one field of a filter specification.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Checks `input` against `spec` and returns the subset of fields the spec
/// describes. Every violated field is reported in one `FilterValidation`
/// error; a non-object input is a `TypeValidation` error.
pub fn apply(spec: &[FieldSpec], input: &Value) -> Result<Map<String, Value>> {
    let object = match input {
        Value::Object(object) => object,
        other => {
            return Err(ClientError::TypeValidation {
                expected: "a JSON object",
                actual: json_type_name(other),
            })
        }
    };

    let mut filtered = Map::new();
    let mut failures = Vec::new();

    for field in spec {
        match object.get(field.name) {
            Some(value) if field.kind.matches(value) => {
                filtered.insert(field.name.to_string(), value.clone());
            }
            Some(value) => failures.push(FieldFailure {
                field: field.name.to_string(),
                value: Some(value.clone()),
                reason: format!(
                    "expected {}, got {}",
                    field.kind.name(),
                    json_type_name(value)
                ),
            }),
            None if field.required => failures.push(FieldFailure {
                field: field.name.to_string(),
                value: None,
                reason: "required field is missing".to_string(),
            }),
            None => {}
        }
    }

    if !failures.is_empty() {
        let failures = FilterFailures(failures);
        tracing::debug!("input rejected by filter: {}", failures);
        return Err(ClientError::FilterValidation(failures));
    }

    Ok(filtered)
}
