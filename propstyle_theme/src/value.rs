// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop and token values.
//!
//! This module provides [`Scalar`] for single values, [`PropValue`] for the
//! (possibly responsive) values found in prop bags, and [`StyleObject`] for
//! partial style declarations such as theme variants.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::document::ThemeDocument;

/// A single, non-responsive value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A number, e.g. a scale index or a length in pixels.
    Number(f64),
    /// A string, e.g. a scale key or a verbatim CSS value.
    Str(String),
    /// A boolean. Never a valid style value, but common in attribute props.
    Bool(bool),
}

impl Scalar {
    /// Returns the number, if this is a [`Scalar::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a [`Scalar::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a scale index: a non-negative integer number.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        self.as_number().and_then(index_of)
    }

    /// Converts a JSON scalar. Returns `None` for `null`, arrays, and objects.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns a short name for the kind of value, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        match self {
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Str(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Formats a number the way it appears in CSS: no trailing `.0`, no `-0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".into();
    }
    format!("{n}")
}

/// Converts a number to an index if it is a non-negative integer.
pub(crate) fn index_of(n: f64) -> Option<usize> {
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, reason = "range checked above")]
    Some(n as usize)
}

/// A value as it appears in a prop bag.
///
/// Responsive values come in two shapes: an ordered array aligned to the
/// theme's breakpoints (index 0 is the base layer), or a map from breakpoint
/// name to value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A single value applying at every viewport width.
    Scalar(Scalar),
    /// Positional responsive value; `None` entries are skipped slots.
    Array(Vec<Option<Scalar>>),
    /// Responsive value keyed by breakpoint name (`_` or `default` is the base).
    Map(Vec<(String, Scalar)>),
    /// A shape with no style meaning (objects of objects, nested arrays).
    Nested(Value),
    /// A component-level theme override.
    Theme(Arc<ThemeDocument>),
}

impl PropValue {
    /// Creates a positional responsive value.
    #[must_use]
    pub fn array<I: IntoIterator<Item = Option<Scalar>>>(values: I) -> Self {
        Self::Array(values.into_iter().collect())
    }

    /// Creates a breakpoint-keyed responsive value.
    #[must_use]
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the scalar, if this is a [`PropValue::Scalar`].
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a JSON value. Returns `None` for `null`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => {
                let mut slots = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Null => slots.push(None),
                        _ => match Scalar::from_json(item) {
                            Some(s) => slots.push(Some(s)),
                            None => return Some(Self::Nested(value.clone())),
                        },
                    }
                }
                Some(Self::Array(slots))
            }
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, item) in map {
                    if item.is_null() {
                        continue;
                    }
                    match Scalar::from_json(item) {
                        Some(s) => entries.push((key.clone(), s)),
                        None => return Some(Self::Nested(value.clone())),
                    }
                }
                Some(Self::Map(entries))
            }
            _ => Scalar::from_json(value).map(Self::Scalar),
        }
    }

    /// Returns a short name for the shape of the value, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Array(_) => "array",
            Self::Map(_) => "breakpoint map",
            Self::Nested(_) => "nested object",
            Self::Theme(_) => "theme",
        }
    }
}

impl From<Scalar> for PropValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! scalar_prop_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_prop_value!(f64, i32, &str, String, bool);

/// A partial style declaration keyed by prop or CSS property name.
///
/// Used for theme variants and component defaults. Keys may be prop names
/// from a registry (`bg`, `borderRadius`) or raw CSS properties in either
/// camelCase or kebab-case. Entries keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleObject {
    entries: Vec<(String, PropValue)>,
}

impl StyleObject {
    /// Creates an empty style object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an entry, replacing an existing entry with the same key in place.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an entry, replacing an existing entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Gets the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts a JSON object. Returns `None` if `value` is not an object.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let entries = map
            .iter()
            .filter_map(|(k, v)| PropValue::from_json(v).map(|v| (k.clone(), v)))
            .collect();
        Some(Self { entries })
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_number_drops_trailing_zero() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(-16.0), "-16");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn scalar_as_index() {
        assert_eq!(Scalar::from(3).as_index(), Some(3));
        assert_eq!(Scalar::from(-3).as_index(), None);
        assert_eq!(Scalar::from(1.5).as_index(), None);
        assert_eq!(Scalar::from("3").as_index(), None);
    }

    #[test]
    fn prop_value_from_json_shapes() {
        assert_eq!(PropValue::from_json(&json!(null)), None);
        assert_eq!(PropValue::from_json(&json!(3)), Some(PropValue::from(3)));
        assert_eq!(
            PropValue::from_json(&json!([1, null, "2em"])),
            Some(PropValue::array([
                Some(Scalar::from(1)),
                None,
                Some(Scalar::from("2em")),
            ]))
        );
        assert_eq!(
            PropValue::from_json(&json!({ "_": 1, "md": 2 })),
            Some(PropValue::map([("_", Scalar::from(1)), ("md", Scalar::from(2))]))
        );
    }

    #[test]
    fn prop_value_from_json_nested_is_kept_whole() {
        let raw = json!({ "&:hover": { "color": "red" } });
        assert_eq!(PropValue::from_json(&raw), Some(PropValue::Nested(raw)));

        let raw = json!([[1, 2], 3]);
        assert_eq!(PropValue::from_json(&raw), Some(PropValue::Nested(raw)));
    }

    #[test]
    fn style_object_set_replaces_in_place() {
        let object = StyleObject::new()
            .set("color", "black")
            .set("bg", "tomato")
            .set("color", "red");

        assert_eq!(object.len(), 2);
        let keys: Vec<_> = object.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["color", "bg"]);
        assert_eq!(object.get("color"), Some(&PropValue::from("red")));
    }

    #[test]
    fn style_object_from_json_skips_nulls() {
        let object = StyleObject::from_json(&json!({ "color": "black", "bg": null })).unwrap();
        assert_eq!(object.len(), 1);
        assert!(StyleObject::from_json(&json!("black")).is_none());
    }
}
