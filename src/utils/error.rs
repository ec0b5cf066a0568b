use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Type validation failed: expected {expected}, got {actual}")]
    TypeValidation {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Filter validation failed: {0}")]
    FilterValidation(FilterFailures),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// One field that failed filtering, with the offending value when present.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    pub field: String,
    pub value: Option<Value>,
    pub reason: String,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "'{}' ({}): {}", self.field, value, self.reason),
            None => write!(f, "'{}': {}", self.field, self.reason),
        }
    }
}

/// Every field-level failure collected from a single filter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterFailures(pub Vec<FieldFailure>);

impl FilterFailures {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|failure| failure.field.as_str())
    }
}

impl fmt::Display for FilterFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|failure| failure.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}
