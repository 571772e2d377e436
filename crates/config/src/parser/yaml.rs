//! YAML adapter built on `serde_yaml`.
//!
//! Tags are dropped, an empty document is an empty mapping, and keys must be
//! strings.

use serde_yaml::Value as YamlValue;

use super::{NotScalar, parse_error, top_level_not_mapping};
use crate::error::ConfigError;
use crate::node::FieldKind;
use crate::value::{Mapping, Scalar, Value};

pub(crate) fn parse(text: &str, origin: &str) -> Result<Mapping, ConfigError> {
    let document: YamlValue = serde_yaml::from_str(text).map_err(|e| parse_error(origin, e))?;
    match untag(document) {
        YamlValue::Null => Ok(Mapping::new()),
        YamlValue::Mapping(mapping) => convert_mapping(mapping),
        other => Err(top_level_not_mapping(origin, kind_of(&other))),
    }
}

fn untag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping) -> Result<Mapping, ConfigError> {
    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = match untag(key) {
                YamlValue::String(key) => key,
                other => {
                    return Err(ConfigError::Construction(format!(
                        "mapping keys must be strings, found {} key",
                        kind_of(&other)
                    )));
                }
            };
            let value = convert_value(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

fn convert_value(key: &str, value: YamlValue) -> Result<Value, ConfigError> {
    match untag(value) {
        YamlValue::Mapping(mapping) => convert_mapping(mapping).map(Value::Section),
        YamlValue::Sequence(items) => items
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

fn convert_scalar(value: YamlValue) -> Result<Scalar, NotScalar> {
    match untag(value) {
        YamlValue::Null => Ok(Scalar::Null),
        YamlValue::Bool(b) => Ok(Scalar::Bool(b)),
        YamlValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Ok(Scalar::Integer(i)),
            (None, Some(u)) => Err(NotScalar::IntegerOverflow(u)),
            (None, None) => Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        YamlValue::String(s) => Ok(Scalar::String(s)),
        other => Err(NotScalar::Kind(kind_of(&other))),
    }
}

fn kind_of(value: &YamlValue) -> FieldKind {
    match value {
        YamlValue::Null => FieldKind::Null,
        YamlValue::Bool(_) => FieldKind::Bool,
        YamlValue::Number(n) if n.is_i64() => FieldKind::Integer,
        YamlValue::Number(_) => FieldKind::Float,
        YamlValue::String(_) => FieldKind::String,
        YamlValue::Sequence(_) => FieldKind::List,
        YamlValue::Mapping(_) => FieldKind::Section,
        YamlValue::Tagged(tagged) => kind_of(&tagged.value),
    }
}
