//! TOML adapter built on the `toml` crate (with `preserve_order`).
//!
//! Datetimes have no scalar counterpart and are kept as their RFC 3339 text.

use ::toml::{Table, Value as TomlValue};

use super::{nested_in_list, parse_error};
use crate::error::ConfigError;
use crate::node::FieldKind;
use crate::value::{Mapping, Scalar, Value};

pub(crate) fn parse(text: &str, origin: &str) -> Result<Mapping, ConfigError> {
    let table: Table = ::toml::from_str(text).map_err(|e| parse_error(origin, e))?;
    convert_table(table)
}

fn convert_table(table: Table) -> Result<Mapping, ConfigError> {
    table
        .into_iter()
        .map(|(key, value)| {
            let value = convert_value(&key, value)?;
            Ok((key, value))
        })
        .collect()
}

fn convert_value(key: &str, value: TomlValue) -> Result<Value, ConfigError> {
    match value {
        TomlValue::Table(table) => convert_table(table).map(Value::Section),
        TomlValue::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                convert_scalar(item).map_err(|found| nested_in_list(key, index, found))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        scalar => convert_scalar(scalar)
            .map(Value::Scalar)
            .map_err(|found| ConfigError::Construction(format!("unexpected {found} for '{key}'"))),
    }
}

fn convert_scalar(value: TomlValue) -> Result<Scalar, FieldKind> {
    match value {
        TomlValue::String(s) => Ok(Scalar::String(s)),
        TomlValue::Integer(i) => Ok(Scalar::Integer(i)),
        TomlValue::Float(f) => Ok(Scalar::Float(f)),
        TomlValue::Boolean(b) => Ok(Scalar::Bool(b)),
        TomlValue::Datetime(dt) => Ok(Scalar::String(dt.to_string())),
        TomlValue::Array(_) => Err(FieldKind::List),
        TomlValue::Table(_) => Err(FieldKind::Section),
    }
}
