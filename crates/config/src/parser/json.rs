//! JSON adapter built on `serde_json` (with `preserve_order`).

use serde_json::Value as JsonValue;

use super::{NotScalar, parse_error, top_level_not_mapping};
use crate::error::ConfigError;
use crate::node::FieldKind;
use crate::value::{Mapping, Scalar, Value};

pub(crate) fn parse(text: &str, origin: &str) -> Result<Mapping, ConfigError> {
    let document: JsonValue = serde_json::from_str(text).map_err(|e| parse_error(origin, e))?;
    match document {
        JsonValue::Object(object) => convert_object(object),
        other => Err(top_level_not_mapping(origin, kind_of(&other))),
    }
}

/// Converts an in-memory JSON object into a `Mapping`.
///
/// Handy for building mappings with `serde_json::json!`.
///
/// # Errors
/// `ConfigError::Construction` if `value` is not an object, a list holds
/// anything other than scalars, or an integer does not fit in `i64`.
pub fn mapping_from_json(value: JsonValue) -> Result<Mapping, ConfigError> {
    match value {
        JsonValue::Object(object) => convert_object(object),
        other => Err(top_level_not_mapping("JSON value", kind_of(&other))),
    }
}

fn convert_object(object: serde_json::Map<String, JsonValue>) -> Result<Mapping, ConfigError> {
    object
        .into_iter()
        .map(|(key, value)| {
            let value = convert_value(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

fn convert_value(key: &str, value: JsonValue) -> Result<Value, ConfigError> {
    match value {
        JsonValue::Object(object) => convert_object(object).map(Value::Section),
        JsonValue::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                convert_scalar(item).map_err(|rejected| rejected.in_list(key, index))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        scalar => convert_scalar(scalar)
            .map(Value::Scalar)
            .map_err(|rejected| rejected.for_key(key)),
    }
}

fn convert_scalar(value: JsonValue) -> Result<Scalar, NotScalar> {
    match value {
        JsonValue::Null => Ok(Scalar::Null),
        JsonValue::Bool(b) => Ok(Scalar::Bool(b)),
        JsonValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Ok(Scalar::Integer(i)),
            (None, Some(u)) => Err(NotScalar::IntegerOverflow(u)),
            (None, None) => Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        JsonValue::String(s) => Ok(Scalar::String(s)),
        other => Err(NotScalar::Kind(kind_of(&other))),
    }
}

fn kind_of(value: &JsonValue) -> FieldKind {
    match value {
        JsonValue::Null => FieldKind::Null,
        JsonValue::Bool(_) => FieldKind::Bool,
        JsonValue::Number(n) if n.is_i64() => FieldKind::Integer,
        JsonValue::Number(_) => FieldKind::Float,
        JsonValue::String(_) => FieldKind::String,
        JsonValue::Array(_) => FieldKind::List,
        JsonValue::Object(_) => FieldKind::Section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_preserves_key_order() {
        let mapping = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, "test").unwrap();
        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_numbers_split_into_integer_and_float() {
        let mapping = parse(r#"{"i": -300, "f": 3000.13, "max": 9223372036854775807}"#, "test")
            .unwrap();
        assert_eq!(mapping["i"], Value::from(-300i64));
        assert_eq!(mapping["f"], Value::from(3000.13));
        assert_eq!(mapping["max"], Value::from(i64::MAX));
    }

    #[test]
    fn test_integer_beyond_i64_is_rejected() {
        let err = parse(r#"{"big": 18446744073709551615}"#, "test").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Construction(ref m) if m.contains("'big'") && m.contains("18446744073709551615")
        ));

        let err = parse(r#"{"ids": [1, 9223372036854775808]}"#, "test").unwrap_err();
        assert!(matches!(err, ConfigError::Construction(ref m) if m.contains("element 1 of list 'ids'")));
    }

    #[test]
    fn test_nested_sections_and_lists() {
        let mapping = mapping_from_json(json!({
            "server": {"hosts": ["a", "b"], "tls": {"enabled": false}},
            "proxy": null
        }))
        .unwrap();

        let Value::Section(server) = &mapping["server"] else {
            panic!("server should be a section");
        };
        assert_eq!(
            server["hosts"],
            Value::List(vec![Scalar::from("a"), Scalar::from("b")])
        );
        assert_eq!(server["tls"].kind(), FieldKind::Section);
        assert_eq!(mapping["proxy"], Value::Scalar(Scalar::Null));
    }

    #[test]
    fn test_list_of_objects_is_rejected() {
        let err = mapping_from_json(json!({"items": [1, {"x": 1}]})).unwrap_err();
        match err {
            ConfigError::Construction(message) => {
                assert!(message.contains("element 1 of list 'items'"));
                assert!(message.contains("section"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            parse("[1, 2]", "test"),
            Err(ConfigError::Construction(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse(r#"{"a": "#, "broken.json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref origin, .. } if origin == "broken.json"));
    }
}
