//! The configuration tree.
//!
//! Responsibilities:
//! - Build a `ConfigNode` tree from a parsed `Mapping`.
//! - Field access by name, by dotted path, and with typed conversion.
//! - Project a node back into a plain `Mapping`.
//!
//! Does NOT handle:
//! - Reading or parsing files (see `parser` and `config`).
//! - Rendering text (see `export`).
//!
//! Invariants:
//! - A field's kind (scalar, list, or section) is fixed by `build` and never changes;
//!   there is no public mutation API.
//! - A node exclusively owns its children; there are no back references.
//! - Absent fields are always an explicit `ConfigError::FieldNotFound`.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::value::{Mapping, Scalar, Value};

/// The kind of a field, as reported by `Field::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    List,
    Section,
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Null,
        FieldKind::Bool,
        FieldKind::Integer,
        FieldKind::Float,
        FieldKind::String,
        FieldKind::List,
        FieldKind::Section,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Null => "null",
            FieldKind::Bool => "bool",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::List => "list",
            FieldKind::Section => "section",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = FieldKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown field kind '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// A single field of a `ConfigNode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Node(ConfigNode),
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Scalar(s) => s.kind(),
            Field::List(_) => FieldKind::List,
            Field::Node(_) => FieldKind::Section,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Field::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Field::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            Field::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Converts the field back into a plain `Value`.
    pub fn to_value(&self) -> Value {
        match self {
            Field::Scalar(s) => Value::Scalar(s.clone()),
            Field::List(items) => Value::List(items.clone()),
            Field::Node(node) => Value::Section(node.to_mapping()),
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(s) => Field::Scalar(s),
            Value::List(items) => Field::List(items),
            Value::Section(mapping) => Field::Node(ConfigNode::build(mapping)),
        }
    }
}

/// One level of the configuration tree: an ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigNode {
    fields: IndexMap<String, Field>,
}

impl ConfigNode {
    /// Recursively wraps a parsed mapping. Nested mappings become child nodes,
    /// everything else is stored as-is. Key order is preserved.
    pub fn build(mapping: Mapping) -> Self {
        let fields = mapping
            .into_iter()
            .map(|(key, value)| (key, Field::from(value)))
            .collect();
        Self { fields }
    }

    /// Returns the field stored under `name`.
    ///
    /// # Errors
    /// `ConfigError::FieldNotFound` if the node has no such field.
    pub fn get(&self, name: &str) -> Result<&Field, ConfigError> {
        self.fields
            .get(name)
            .ok_or_else(|| ConfigError::FieldNotFound {
                field: name.to_string(),
            })
    }

    /// Returns the field under `name` converted to `T`.
    ///
    /// ```rust,ignore
    /// let port: u16 = node.get_as("port")?;
    /// let host: &str = node.get_as("host")?;
    /// ```
    pub fn get_as<'a, T: FromField<'a>>(&'a self, name: &str) -> Result<T, ConfigError> {
        T::from_field(name, self.get(name)?)
    }

    /// Like `get_as`, but returns `default` when the field is absent.
    ///
    /// A present field of the wrong kind is still an error.
    pub fn get_or<'a, T: FromField<'a>>(
        &'a self,
        name: &str,
        default: T,
    ) -> Result<T, ConfigError> {
        match self.fields.get(name) {
            Some(field) => T::from_field(name, field),
            None => Ok(default),
        }
    }

    pub fn section(&self, name: &str) -> Result<&ConfigNode, ConfigError> {
        self.get_as(name)
    }

    pub fn list(&self, name: &str) -> Result<&[Scalar], ConfigError> {
        self.get_as(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Field::Node(_)))
    }

    pub fn has_list(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(Field::List(_)))
    }

    /// Resolves a dotted path such as `server.tls.cert`.
    ///
    /// Equivalent to calling `get` once per segment. Use `lookup_segments` when a
    /// key itself contains a dot.
    pub fn lookup(&self, path: &str) -> Result<&Field, ConfigError> {
        let segments: Vec<&str> = path.split('.').collect();
        self.lookup_segments(&segments)
    }

    /// Resolves a path given as individual keys.
    ///
    /// # Errors
    /// - `FieldNotFound` naming the dotted path walked so far.
    /// - `TypeMismatch` if an intermediate segment is not a section.
    pub fn lookup_segments(&self, segments: &[&str]) -> Result<&Field, ConfigError> {
        let Some((last, parents)) = segments.split_last() else {
            return Err(ConfigError::FieldNotFound {
                field: String::new(),
            });
        };

        let mut node = self;
        for (depth, segment) in parents.iter().enumerate() {
            node = node
                .section(segment)
                .map_err(|e| scoped(e, &parents[..depth]))?;
        }
        node.get(last).map_err(|e| scoped(e, parents))
    }

    /// Resolves a dotted path and converts the field to `T`.
    pub fn lookup_as<'a, T: FromField<'a>>(&'a self, path: &str) -> Result<T, ConfigError> {
        T::from_field(path, self.lookup(path)?)
    }

    /// Returns the kind of the field at `path`, or `None` if the path does not resolve.
    pub fn kind_at(&self, path: &str) -> Option<FieldKind> {
        self.lookup(path).ok().map(Field::kind)
    }

    /// Returns true if the field at `path` exists and has `kind`.
    pub fn has_kind(&self, path: &str, kind: FieldKind) -> bool {
        self.kind_at(path) == Some(kind)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over the nested sections of this node only.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.iter()
            .filter_map(|(k, field)| field.as_node().map(|node| (k, node)))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Depth of the tree rooted here. A node without child sections has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .sections()
            .map(|(_, node)| node.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of fields in this node and all descendants.
    pub fn field_count(&self) -> usize {
        self.len()
            + self
                .sections()
                .map(|(_, node)| node.field_count())
                .sum::<usize>()
    }

    /// Projects the tree back into a plain nested mapping.
    pub fn to_mapping(&self) -> Mapping {
        self.fields
            .iter()
            .map(|(key, field)| (key.clone(), field.to_value()))
            .collect()
    }
}

impl From<Mapping> for ConfigNode {
    fn from(mapping: Mapping) -> Self {
        Self::build(mapping)
    }
}

impl<'a> IntoIterator for &'a ConfigNode {
    type Item = (&'a String, &'a Field);
    type IntoIter = indexmap::map::Iter<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn scoped(err: ConfigError, parents: &[&str]) -> ConfigError {
    if parents.is_empty() {
        err
    } else {
        err.within(&parents.join("."))
    }
}

fn mismatch(name: &str, expected: FieldKind, field: &Field) -> ConfigError {
    ConfigError::TypeMismatch {
        field: name.to_string(),
        expected,
        found: field.kind(),
    }
}

/// Conversion from a borrowed `Field` into a concrete Rust type.
///
/// `name` is only used to build error messages.
pub trait FromField<'a>: Sized {
    fn from_field(name: &str, field: &'a Field) -> Result<Self, ConfigError>;
}

impl<'a> FromField<'a> for &'a Field {
    fn from_field(_name: &str, field: &'a Field) -> Result<Self, ConfigError> {
        Ok(field)
    }
}

impl<'a> FromField<'a> for &'a ConfigNode {
    fn from_field(name: &str, field: &'a Field) -> Result<Self, ConfigError> {
        field
            .as_node()
            .ok_or_else(|| mismatch(name, FieldKind::Section, field))
    }
}

impl<'a> FromField<'a> for &'a [Scalar] {
    fn from_field(name: &str, field: &'a Field) -> Result<Self, ConfigError> {
        field
            .as_list()
            .ok_or_else(|| mismatch(name, FieldKind::List, field))
    }
}

impl<'a> FromField<'a> for &'a str {
    fn from_field(name: &str, field: &'a Field) -> Result<Self, ConfigError> {
        field
            .as_scalar()
            .and_then(Scalar::as_str)
            .ok_or_else(|| mismatch(name, FieldKind::String, field))
    }
}

impl FromField<'_> for String {
    fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
        <&str>::from_field(name, field).map(str::to_string)
    }
}

impl FromField<'_> for bool {
    fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
        field
            .as_scalar()
            .and_then(Scalar::as_bool)
            .ok_or_else(|| mismatch(name, FieldKind::Bool, field))
    }
}

impl FromField<'_> for f64 {
    fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
        field
            .as_scalar()
            .and_then(Scalar::as_f64)
            .ok_or_else(|| mismatch(name, FieldKind::Float, field))
    }
}

/// Finite values beyond `f32::MAX` are `OutOfRange`; infinities and NaN carry over.
impl FromField<'_> for f32 {
    fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
        let value = f64::from_field(name, field)?;
        let narrowed = value as f32;
        if value.is_finite() && !narrowed.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: name.to_string(),
                value: value.to_string(),
                target: "f32",
            });
        }
        Ok(narrowed)
    }
}

impl FromField<'_> for i64 {
    fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
        field
            .as_scalar()
            .and_then(Scalar::as_i64)
            .ok_or_else(|| mismatch(name, FieldKind::Integer, field))
    }
}

macro_rules! from_field_integer {
    ($($ty:ty),*) => {
        $(
            impl FromField<'_> for $ty {
                fn from_field(name: &str, field: &Field) -> Result<Self, ConfigError> {
                    let value = i64::from_field(name, field)?;
                    <$ty>::try_from(value).map_err(|_| ConfigError::OutOfRange {
                        field: name.to_string(),
                        value: value.to_string(),
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

from_field_integer!(i8, i16, i32, u8, u16, u32, u64, usize);

impl<'a, T: FromField<'a>> FromField<'a> for Option<T> {
    /// Null maps to `None`; anything else converts as `T`.
    fn from_field(name: &str, field: &'a Field) -> Result<Self, ConfigError> {
        match field {
            Field::Scalar(Scalar::Null) => Ok(None),
            other => T::from_field(name, other).map(Some),
        }
    }
}
