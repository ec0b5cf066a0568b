use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::{ClientError, FieldFailure, FilterFailures, Result};
use crate::utils::filter::{self, FieldKind, FieldSpec};

/// A labeled hyperlink attached to an API resource, e.g. a "detail" or
/// "wiki" link. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    #[serde(rename = "type")]
    url_type: String,
    url: String,
}

impl Url {
    const FILTER: [FieldSpec; 2] = [
        FieldSpec::required("type", FieldKind::String),
        FieldSpec::required("url", FieldKind::String),
    ];

    pub fn new(url_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url_type: url_type.into(),
            url: url.into(),
        }
    }

    /// The text identifier for the URL, e.g. "detail" or "wiki".
    pub fn url_type(&self) -> &str {
        &self.url_type
    }

    /// The full URL, including scheme, domain, and path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Filters a raw JSON mapping into a `Url`.
    ///
    /// Both `type` and `url` must be present and string-typed; anything else
    /// fails with `FilterValidation` naming every violated field. A
    /// non-object input fails with `TypeValidation`. No URL-syntax
    /// validation is performed.
    pub fn from_value(input: &Value) -> Result<Self> {
        let filtered = filter::apply(&Self::FILTER, input)?;

        let url_type = filtered_string(&filtered, "type")?;
        let url = filtered_string(&filtered, "url")?;

        Ok(Self::new(url_type, url))
    }

    /// Filters a JSON array or object of raw mappings into `Url`s, keeping
    /// the input's key identity and order. Object keys carry over as-is;
    /// array elements are keyed by their decimal index.
    ///
    /// Fails with `TypeValidation` if the input is not a container, and with
    /// `FilterValidation` on the first element that does not filter; no
    /// partial collection is returned.
    pub fn from_values(input: &Value) -> Result<IndexMap<String, Self>> {
        match input {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| Ok((index.to_string(), Self::from_value(item)?)))
                .collect(),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, item)| Ok((key.clone(), Self::from_value(item)?)))
                .collect(),
            other => Err(ClientError::TypeValidation {
                expected: "a JSON array or object",
                actual: filter::json_type_name(other),
            }),
        }
    }
}

// A successful filter pass guarantees both fields; a miss here means the
// filter specification and this lookup disagree.
fn filtered_string(filtered: &Map<String, Value>, field: &str) -> Result<String> {
    filtered
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ClientError::FilterValidation(FilterFailures(vec![FieldFailure {
                field: field.to_string(),
                value: None,
                reason: "missing from filtered result".to_string(),
            }]))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_stores_both_fields() {
        let url = Url::new("detail", "http://example.com/1");
        assert_eq!(url.url_type(), "detail");
        assert_eq!(url.url(), "http://example.com/1");
    }

    #[test]
    fn test_from_value_with_valid_input() {
        let url = Url::from_value(&json!({"type": "detail", "url": "http://example.com/1"})).unwrap();
        assert_eq!(url.url_type(), "detail");
        assert_eq!(url.url(), "http://example.com/1");
    }

    #[test]
    fn test_from_value_rejects_missing_url() {
        let err = Url::from_value(&json!({"type": "detail"})).unwrap_err();
        match err {
            ClientError::FilterValidation(failures) => {
                assert_eq!(failures.fields().collect::<Vec<_>>(), vec!["url"]);
            }
            other => panic!("expected FilterValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_rejects_non_string_type() {
        let err = Url::from_value(&json!({"type": 123, "url": "http://x"})).unwrap_err();
        match err {
            ClientError::FilterValidation(failures) => {
                assert_eq!(failures.fields().collect::<Vec<_>>(), vec!["type"]);
            }
            other => panic!("expected FilterValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_reports_every_bad_field() {
        let err = Url::from_value(&json!({"type": 123, "url": null})).unwrap_err();
        match err {
            ClientError::FilterValidation(failures) => {
                assert_eq!(failures.fields().collect::<Vec<_>>(), vec!["type", "url"]);
            }
            other => panic!("expected FilterValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = Url::from_value(&json!(["type", "url"])).unwrap_err();
        assert!(matches!(err, ClientError::TypeValidation { .. }));
    }

    #[test]
    fn test_from_values_preserves_object_keys_and_order() {
        let input = json!({
            "b": {"type": "t2", "url": "u2"},
            "a": {"type": "t1", "url": "u1"},
        });
        let urls = Url::from_values(&input).unwrap();

        let keys: Vec<&str> = urls.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(urls["a"], Url::new("t1", "u1"));
        assert_eq!(urls["b"], Url::new("t2", "u2"));
    }

    #[test]
    fn test_from_values_keys_array_elements_by_index() {
        let input = json!([
            {"type": "t1", "url": "u1"},
            {"type": "t2", "url": "u2"},
        ]);
        let urls = Url::from_values(&input).unwrap();

        let keys: Vec<&str> = urls.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["0", "1"]);
        assert_eq!(urls["1"], Url::new("t2", "u2"));
    }

    #[test]
    fn test_from_values_rejects_non_container() {
        let err = Url::from_values(&json!("not-an-array")).unwrap_err();
        assert!(matches!(
            err,
            ClientError::TypeValidation {
                expected: "a JSON array or object",
                ..
            }
        ));
    }

    #[test]
    fn test_from_values_fails_on_first_bad_element() {
        let input = json!([
            {"type": "t1", "url": "u1"},
            {"type": 123, "url": "u2"},
        ]);
        let err = Url::from_values(&input).unwrap_err();
        assert!(matches!(err, ClientError::FilterValidation(_)));
    }

    #[test]
    fn test_accessor_round_trip() {
        let original = Url::new("wiki", "http://example.com/wiki");
        let round_tripped = Url::from_value(&json!({
            "type": original.url_type(),
            "url": original.url(),
        }))
        .unwrap();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_serde_uses_wire_key_for_type() {
        let url = Url::new("detail", "http://example.com/1");
        let value = serde_json::to_value(&url).unwrap();
        assert_eq!(
            value,
            json!({"type": "detail", "url": "http://example.com/1"})
        );

        let back: Url = serde_json::from_value(value).unwrap();
        assert_eq!(back, url);
    }
}
