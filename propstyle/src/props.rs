// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop bags.

use std::sync::Arc;

use propstyle_theme::{PropValue, ThemeDocument};
use serde_json::Value;

/// The key carrying a component-level theme override.
pub const THEME_PROP: &str = "theme";

/// The props of one component instance, in insertion order.
///
/// # Example
///
/// ```rust
/// use propstyle::Props;
/// use propstyle_theme::PropValue;
///
/// let props = Props::new().set("p", 3).set("bg", "tomato").set("href", "/home");
/// assert_eq!(props.get("bg"), Some(&PropValue::from("tomato")));
/// assert_eq!(props.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, replacing an existing value in place.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a prop, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Gets a prop.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the prop is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no prop is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts a JSON object. Returns `None` if `value` is not an object.
    ///
    /// `null` values are treated as absent. The `theme` key is parsed as a
    /// theme document; if that fails it is kept as a nested value and
    /// reported when composed.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut props = Self::new();
        for (key, item) in map {
            let parsed = if key == THEME_PROP && item.is_object() {
                match ThemeDocument::from_json_value(item.clone()) {
                    Ok(doc) => Some(PropValue::Theme(Arc::new(doc))),
                    Err(_) => Some(PropValue::Nested(item.clone())),
                }
            } else {
                PropValue::from_json(item)
            };
            if let Some(parsed) = parsed {
                props.insert(key.clone(), parsed);
            }
        }
        Some(props)
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}
