//! Declarative request-body validation.
//!
//! Each request type declares a static table of [`FieldSpec`]s. Bodies are
//! checked against that table before deserialization so that every offending
//! field is reported at once, keyed by field name.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const UNKNOWN_FIELD: &str = "Unknown field.";
pub const INVALID_INPUT_TYPE: &str = "Invalid input type.";

/// Key used for errors that concern the body as a whole
pub const SCHEMA_KEY: &str = "_schema";

/// JSON type accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Float => value.is_number(),
        }
    }

    fn type_error(self) -> &'static str {
        match self {
            FieldKind::String => "Not a valid string.",
            FieldKind::Integer => "Not a valid integer.",
            FieldKind::Float => "Not a valid number.",
        }
    }
}

/// One declared field of a request schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
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

/// Per-field validation messages, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A request body described by a static field table
pub trait RequestSchema: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];
}

/// Checks a JSON object against a field table, collecting every violation
pub fn check_object(fields: &[FieldSpec], body: &Map<String, Value>) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for spec in fields {
        match body.get(spec.name) {
            None if spec.required => errors.add(spec.name, MISSING_FIELD),
            None => {}
            Some(Value::Null) => errors.add(spec.name, NULL_FIELD),
            Some(value) if !spec.kind.accepts(value) => {
                errors.add(spec.name, spec.kind.type_error())
            }
            Some(_) => {}
        }
    }

    for key in body.keys() {
        if !fields.iter().any(|spec| spec.name == key.as_str()) {
            errors.add(key.as_str(), UNKNOWN_FIELD);
        }
    }

    errors
}

/// Validates a parsed JSON body and converts it into `T`
pub fn validate<T: RequestSchema>(body: Value) -> AppResult<T> {
    let Value::Object(map) = body else {
        let mut errors = FieldErrors::default();
        errors.add(SCHEMA_KEY, INVALID_INPUT_TYPE);
        return Err(AppError::Validation(errors));
    };

    let errors = check_object(T::FIELDS, &map);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| AppError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
        #[allow(dead_code)]
        rank: Option<i64>,
        #[allow(dead_code)]
        score: Option<f64>,
    }

    impl RequestSchema for Probe {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("name", FieldKind::String),
            FieldSpec::optional("rank", FieldKind::Integer),
            FieldSpec::optional("score", FieldKind::Float),
        ];
    }

    fn errors_of(body: Value) -> FieldErrors {
        match validate::<Probe>(body) {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body_deserializes() {
        let probe: Probe = validate(json!({ "name": "svm", "rank": 2, "score": 0.5 })).unwrap();
        assert_eq!(probe.name, "svm");
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        assert!(validate::<Probe>(json!({ "name": "svm" })).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let errors = errors_of(json!({}));
        assert_eq!(errors.get("name").unwrap(), [MISSING_FIELD]);
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let errors = errors_of(json!({ "name": 5, "rank": 1.5, "score": "high" }));
        assert_eq!(errors.get("name").unwrap(), ["Not a valid string."]);
        assert_eq!(errors.get("rank").unwrap(), ["Not a valid integer."]);
        assert_eq!(errors.get("score").unwrap(), ["Not a valid number."]);
    }

    #[test]
    fn test_integer_is_a_valid_float() {
        assert!(validate::<Probe>(json!({ "name": "svm", "score": 1 })).is_ok());
    }

    #[test]
    fn test_null_is_rejected_even_when_optional() {
        let errors = errors_of(json!({ "name": "svm", "rank": null }));
        assert_eq!(errors.get("rank").unwrap(), [NULL_FIELD]);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let errors = errors_of(json!({ "name": "svm", "colour": "blue" }));
        assert_eq!(errors.get("colour").unwrap(), [UNKNOWN_FIELD]);
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn test_non_object_body() {
        let errors = errors_of(json!(["name"]));
        assert_eq!(errors.get(SCHEMA_KEY).unwrap(), [INVALID_INPUT_TYPE]);
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let errors = errors_of(json!({ "extra": 1 }));
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["extra", "name"]);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({ "extra": [UNKNOWN_FIELD], "name": [MISSING_FIELD] })
        );
    }
}
