//! Conversions over untyped JSON values.
//!
//! Text reaching the library through `&str` is always valid. Values decoded
//! from JSON may be anything, so this is where non-text input is rejected
//! with [`CaseError::InvalidInputType`].

use crate::case::{convert, Style};
use crate::error::CaseError;
use serde_json::{Deserializer, Value};

/// Convert a JSON value, failing unless it is a string.
pub fn convert_value(value: &Value, style: Style) -> Result<String, CaseError> {
    match value {
        Value::String(text) => Ok(convert(text, style)),
        other => Err(CaseError::InvalidInputType {
            found: type_name(other),
        }),
    }
}

pub fn to_camel_case_value(value: &Value) -> Result<String, CaseError> {
    convert_value(value, Style::Camel)
}

pub fn to_dot_case_value(value: &Value) -> Result<String, CaseError> {
    convert_value(value, Style::Dot)
}

/// Parse a batch of inputs.
///
/// A single top-level array contributes each element as one input; anything
/// else is read as a stream of whitespace-separated JSON values.
pub fn parse_values(text: &str) -> Result<Vec<Value>, CaseError> {
    let values = Deserializer::from_str(text)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [Value::Array(items)] => Ok(items.clone()),
        _ => Ok(values),
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_convert() {
        assert_eq!(to_camel_case_value(&json!("user_id")).unwrap(), "userId");
        assert_eq!(to_dot_case_value(&json!("SCREEN_NAME")).unwrap(), "screen.name");
        assert_eq!(to_camel_case_value(&json!("")).unwrap(), "");
    }

    #[test]
    fn test_non_strings_are_rejected() {
        for (value, expected) in [
            (json!(null), "null"),
            (json!(42), "number"),
            (json!(true), "boolean"),
            (json!(["a"]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            for style in [Style::Camel, Style::Dot] {
                match convert_value(&value, style) {
                    Err(CaseError::InvalidInputType { found }) => assert_eq!(found, expected),
                    other => panic!("expected InvalidInputType, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_parse_array_batch() {
        let values = parse_values(r#"["hello world", 1, null]"#).unwrap();
        assert_eq!(values, vec![json!("hello world"), json!(1), json!(null)]);
    }

    #[test]
    fn test_parse_value_stream() {
        let values = parse_values("\"a b\"\n42\n\"c_d\"\n").unwrap();
        assert_eq!(values, vec![json!("a b"), json!(42), json!("c_d")]);
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_values("").unwrap().is_empty());
        assert!(matches!(parse_values("\"open"), Err(CaseError::Json(_))));
    }
}
