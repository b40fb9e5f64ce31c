//! Request body validation for `/analyze/`
//!
//! The body is checked field by field so every problem in the batch is
//! reported at once, each with its location in the payload.

use hypermodern_core::DataPoint;
use serde::Serialize;
use serde_json::{Map, Value};

/// One segment of a field location, e.g. `["body", 0, "x"]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(
        loc: Vec<LocSegment>,
        kind: &str,
        msg: impl Into<String>,
        input: Option<Value>,
    ) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
            input,
        }
    }

    /// The body could not be parsed as JSON at all
    pub fn json_invalid(detail: impl Into<String>) -> Self {
        Self::new(
            vec!["body".into()],
            "json_invalid",
            format!("JSON decode error: {}", detail.into()),
            None,
        )
    }
}

fn field_loc(index: usize, field: &str) -> Vec<LocSegment> {
    vec!["body".into(), index.into(), field.into()]
}

fn number_field(
    object: &Map<String, Value>,
    index: usize,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match object.get(field) {
        // serde_json already rejects out-of-range literals such as 1e400 while
        // parsing, so this only fires if a non-finite number is ever let through
        Some(Value::Number(n)) => match n.as_f64().filter(|v| v.is_finite()) {
            Some(v) => Some(v),
            None => {
                errors.push(FieldError::new(
                    field_loc(index, field),
                    "finite_number",
                    "Input should be a finite number",
                    Some(Value::Number(n.clone())),
                ));
                None
            }
        },
        Some(Value::String(s)) => {
            errors.push(FieldError::new(
                field_loc(index, field),
                "float_parsing",
                "Input should be a valid number, unable to parse string as a number",
                Some(Value::String(s.clone())),
            ));
            None
        }
        Some(other) => {
            errors.push(FieldError::new(
                field_loc(index, field),
                "float_type",
                "Input should be a valid number",
                Some(other.clone()),
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                field_loc(index, field),
                "missing",
                "Field required",
                Some(Value::Object(object.clone())),
            ));
            None
        }
    }
}

fn string_field(
    object: &Map<String, Value>,
    index: usize,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                field_loc(index, field),
                "string_type",
                "Input should be a valid string",
                Some(other.clone()),
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                field_loc(index, field),
                "missing",
                "Field required",
                Some(Value::Object(object.clone())),
            ));
            None
        }
    }
}

/// Turn a JSON body into typed points
///
/// Numbers must be JSON numbers (numeric strings are rejected) and labels
/// JSON strings. Unknown fields are ignored. On failure every offending
/// field is returned, in payload order.
pub fn parse_points(body: &Value) -> Result<Vec<DataPoint>, Vec<FieldError>> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(vec![FieldError::new(
                vec!["body".into()],
                "list_type",
                "Input should be a valid list",
                Some(other.clone()),
            )]);
        }
    };

    let mut points = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            errors.push(FieldError::new(
                vec!["body".into(), index.into()],
                "model_attributes_type",
                "Input should be a valid dictionary or object to extract fields from",
                Some(item.clone()),
            ));
            continue;
        };

        let x = number_field(object, index, "x", &mut errors);
        let y = number_field(object, index, "y", &mut errors);
        let label = string_field(object, index, "label", &mut errors);

        if let (Some(x), Some(y), Some(label)) = (x, y, label) {
            points.push(DataPoint { x, y, label });
        }
    }

    if errors.is_empty() {
        Ok(points)
    } else {
        Err(errors)
    }
}
