//! Plain value types exchanged with parser adapters.
//!
//! Responsibilities:
//! - Define `Scalar`, the leaf values a config file can hold.
//! - Define `Value` and `Mapping`, the nested structure a parser adapter returns
//!   and `ConfigNode::to_mapping` gives back.
//!
//! Does NOT handle:
//! - Parsing text (see `parser`).
//! - Field access with error reporting (see `node`).
//!
//! Invariants:
//! - `Mapping` preserves insertion order, so `to_mapping(build(m)) == m`
//!   compares keys in the order the file declared them.
//! - Lists only hold scalars.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::node::FieldKind;

/// Insertion-ordered mapping from key to value.
pub type Mapping = IndexMap<String, Value>;

/// A leaf value: string, number, boolean, or null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> FieldKind {
        match self {
            Scalar::Null => FieldKind::Null,
            Scalar::Bool(_) => FieldKind::Bool,
            Scalar::Integer(_) => FieldKind::Integer,
            Scalar::Float(_) => FieldKind::Float,
            Scalar::String(_) => FieldKind::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Strings print raw; everything else prints as its JSON literal.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => match serde_json::Number::from_f64(*x) {
                Some(number) => write!(f, "{number}"),
                // NaN and infinities have no JSON literal.
                None => write!(f, "{x}"),
            },
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// A value as produced by a parser adapter.
///
/// The variant is fixed when the adapter converts its native tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Section(Mapping),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Scalar(s) => s.kind(),
            Value::List(_) => FieldKind::List,
            Value::Section(_) => FieldKind::Section,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

value_from_scalar!(bool, i64, i32, f64, &str, String);

impl From<Vec<Scalar>> for Value {
    fn from(value: Vec<Scalar>) -> Self {
        Value::List(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Section(value)
    }
}

/// Nesting depth of a mapping. A flat (or empty) mapping has depth 1.
pub fn mapping_depth(mapping: &Mapping) -> usize {
    1 + mapping
        .values()
        .filter_map(|value| match value {
            Value::Section(child) => Some(mapping_depth(child)),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(pairs: Vec<(&str, Value)>) -> Value {
        Value::Section(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(Scalar::Null.kind(), FieldKind::Null);
        assert_eq!(Scalar::from(true).kind(), FieldKind::Bool);
        assert_eq!(Scalar::from(8080i64).kind(), FieldKind::Integer);
        assert_eq!(Scalar::from(0.5).kind(), FieldKind::Float);
        assert_eq!(Scalar::from("x").kind(), FieldKind::String);
    }

    #[test]
    fn test_integer_widens_to_float() {
        assert_eq!(Scalar::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Scalar::Float(3.5).as_i64(), None);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from("localhost").to_string(), "localhost");
        assert_eq!(Scalar::from(-300i64).to_string(), "-300");
        assert_eq!(Scalar::from(3.14159).to_string(), "3.14159");
        assert_eq!(Scalar::Null.to_string(), "null");
    }

    #[test]
    fn test_value_serializes_untagged() {
        let value = section(vec![
            ("port", Value::from(8080i64)),
            ("tags", Value::List(vec![Scalar::from("a"), Scalar::Null])),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"port":8080,"tags":["a",null]}"#);
    }

    #[test]
    fn test_mapping_depth() {
        let flat: Mapping = [("a".to_string(), Value::from(1i64))].into_iter().collect();
        assert_eq!(mapping_depth(&flat), 1);
        assert_eq!(mapping_depth(&Mapping::new()), 1);

        let Value::Section(nested) = section(vec![
            ("a", section(vec![("b", section(vec![("c", Value::from(1i64))]))])),
            ("d", section(vec![])),
        ]) else {
            unreachable!()
        };
        assert_eq!(mapping_depth(&nested), 3);
    }
}
