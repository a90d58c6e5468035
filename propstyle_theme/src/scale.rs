// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme scales.
//!
//! A [`Scale`] is a lookup table of design tokens: either ordered (addressed
//! by index, like a spacing scale) or keyed (addressed by name, like a color
//! palette). Keyed scales may nest, and nested entries are addressed with
//! dotted paths such as `blue.1`.

use std::fmt;

use serde_json::Value;

use crate::error::ConfigError;
use crate::value::{PropValue, Scalar, StyleObject};

/// Maximum nesting depth of scales and of theme merges.
pub const MAX_NESTING: usize = 32;

/// The name of a scale within a theme.
///
/// Scale keys are plain strings, typically used through the provided
/// constants.
///
/// # Example
///
/// ```rust
/// use propstyle_theme::ScaleKey;
///
/// const RADII: ScaleKey = ScaleKey::new("radii");
/// assert_eq!(RADII, ScaleKey::RADII);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleKey(&'static str);

impl ScaleKey {
    /// Spacing scale for margins, padding, gaps, and offsets.
    pub const SPACE: Self = Self("space");
    /// Font size scale.
    pub const FONT_SIZES: Self = Self("fontSizes");
    /// Color palette.
    pub const COLORS: Self = Self("colors");
    /// Font families.
    pub const FONTS: Self = Self("fonts");
    /// Font weights.
    pub const FONT_WEIGHTS: Self = Self("fontWeights");
    /// Line heights.
    pub const LINE_HEIGHTS: Self = Self("lineHeights");
    /// Letter spacings.
    pub const LETTER_SPACINGS: Self = Self("letterSpacings");
    /// Widths and heights.
    pub const SIZES: Self = Self("sizes");
    /// Border shorthands.
    pub const BORDERS: Self = Self("borders");
    /// Border widths.
    pub const BORDER_WIDTHS: Self = Self("borderWidths");
    /// Border styles.
    pub const BORDER_STYLES: Self = Self("borderStyles");
    /// Border radii.
    pub const RADII: Self = Self("radii");
    /// Box and text shadows.
    pub const SHADOWS: Self = Self("shadows");
    /// Stacking order.
    pub const Z_INDICES: Self = Self("zIndices");

    /// Creates a scale key with the given name.
    #[must_use]
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the scale name.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for ScaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScaleKey").field(&self.0).finish()
    }
}

impl fmt::Display for ScaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<ScaleKey> for String {
    fn from(key: ScaleKey) -> Self {
        key.0.to_owned()
    }
}

/// An entry in a [`Scale`]: a value or a nested scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A concrete token value.
    Value(Scalar),
    /// A nested scale.
    Scale(Scale),
}

impl Token {
    /// Returns the value, if this is a [`Token::Value`].
    #[must_use]
    pub fn as_value(&self) -> Option<&Scalar> {
        match self {
            Self::Value(v) => Some(v),
            Self::Scale(_) => None,
        }
    }

    pub(crate) fn from_json(value: &Value, depth: usize) -> Result<Option<Self>, ConfigError> {
        if depth > MAX_NESTING {
            return Err(ConfigError::NestingTooDeep { limit: MAX_NESTING });
        }
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut tokens = Vec::with_capacity(items.len());
                for item in items {
                    // Holes keep later entries in place and resolve to nothing.
                    let token = Self::from_json(item, depth + 1)?
                        .unwrap_or_else(|| Self::Scale(Scale::from_tokens(Vec::new())));
                    tokens.push(token);
                }
                Ok(Some(Self::Scale(Scale::from_tokens(tokens))))
            }
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, item) in map {
                    if let Some(token) = Self::from_json(item, depth + 1)? {
                        entries.push((key.clone(), token));
                    }
                }
                Ok(Some(Self::Scale(Scale::keyed(entries))))
            }
            _ => Ok(Scalar::from_json(value).map(Self::Value)),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Value(v) => v.to_json(),
            Self::Scale(s) => s.to_json(),
        }
    }

    fn to_prop_value(&self) -> PropValue {
        match self {
            Self::Value(v) => PropValue::Scalar(v.clone()),
            Self::Scale(scale) => {
                let json = scale.to_json();
                PropValue::from_json(&json).unwrap_or(PropValue::Nested(json))
            }
        }
    }
}

macro_rules! scalar_token {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

scalar_token!(Scalar, f64, i32, &str, String, bool);

impl From<Scale> for Token {
    fn from(scale: Scale) -> Self {
        Self::Scale(scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Repr {
    Ordered(Vec<Token>),
    Keyed(KeyedEntries),
}

/// Keyed entries in authored order, with a key-sorted index for lookup.
#[derive(Clone, Debug, Default, PartialEq)]
struct KeyedEntries {
    entries: Vec<(String, Token)>,
    /// Positions into `entries`, sorted by key.
    sorted: Vec<usize>,
}

impl KeyedEntries {
    fn search(&self, key: &str) -> Result<usize, usize> {
        self.sorted
            .binary_search_by(|&i| self.entries[i].0.as_str().cmp(key))
    }

    fn get(&self, key: &str) -> Option<&Token> {
        let pos = self.search(key).ok()?;
        Some(&self.entries[self.sorted[pos]].1)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Token> {
        let pos = self.search(key).ok()?;
        let idx = self.sorted[pos];
        Some(&mut self.entries[idx].1)
    }

    /// Replaces an existing entry in place, or appends a new one.
    fn insert(&mut self, key: String, token: Token) {
        match self.search(&key) {
            Ok(pos) => self.entries[self.sorted[pos]].1 = token,
            Err(pos) => {
                self.sorted.insert(pos, self.entries.len());
                self.entries.push((key, token));
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Token)> + '_ {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }
}

/// A lookup table of design tokens.
///
/// # Example
///
/// ```rust
/// use propstyle_theme::{Scalar, Scale};
///
/// let space = Scale::ordered([0, 4, 8, 16, 32]);
/// assert_eq!(space.lookup(&Scalar::from(3)), Some(&Scalar::from(16)));
///
/// let colors = Scale::keyed([("primary", "#07c"), ("text", "#111")]);
/// assert_eq!(colors.lookup(&Scalar::from("primary")), Some(&Scalar::from("#07c")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    repr: Repr,
}

impl Scale {
    /// Creates an ordered scale.
    #[must_use]
    pub fn ordered<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Self::from_tokens(values.into_iter().map(Into::into).collect())
    }

    /// Creates a keyed scale. Later entries replace earlier ones with the same key.
    #[must_use]
    pub fn keyed<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Token>,
    {
        let mut keyed = KeyedEntries::default();
        for (key, token) in entries {
            keyed.insert(key.into(), token.into());
        }
        Self {
            repr: Repr::Keyed(keyed),
        }
    }

    fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            repr: Repr::Ordered(tokens),
        }
    }

    /// Returns `true` if this scale is addressed by index.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        matches!(self.repr, Repr::Ordered(_))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Ordered(tokens) => tokens.len(),
            Repr::Keyed(entries) => entries.len(),
        }
    }

    /// Returns `true` if the scale has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the entry at an index.
    ///
    /// Keyed scales are looked up by the index's decimal form, so
    /// `{ "0": ..., "1": ... }` behaves like an ordered scale.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Token> {
        match &self.repr {
            Repr::Ordered(tokens) => tokens.get(index),
            Repr::Keyed(_) => self.get_key(&index.to_string()),
        }
    }

    /// Gets the entry for a key, without descending into nested scales.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Token> {
        match &self.repr {
            Repr::Ordered(tokens) => key.parse::<usize>().ok().and_then(|i| tokens.get(i)),
            Repr::Keyed(entries) => entries.get(key),
        }
    }

    /// Gets the entry for a dotted path such as `blue.1`.
    ///
    /// An exact key match wins over path descent, so keys containing dots
    /// still resolve.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Token> {
        if let Some(token) = self.get_key(path) {
            return Some(token);
        }
        let (head, rest) = path.split_once('.')?;
        match self.get_key(head)? {
            Token::Scale(nested) => nested.get_path(rest),
            Token::Value(_) => None,
        }
    }

    /// Looks up a raw prop value in this scale.
    ///
    /// Non-negative integers are indices; strings are keys or dotted paths.
    /// Returns `None` when nothing matches or the match is a nested scale.
    #[must_use]
    pub fn lookup(&self, value: &Scalar) -> Option<&Scalar> {
        let token = match value {
            Scalar::Number(_) => self.get_index(value.as_index()?),
            Scalar::Str(key) => self.get_path(key),
            Scalar::Bool(_) => None,
        }?;
        token.as_value()
    }

    /// Iterates keyed entries in the order they were first added. Ordered
    /// scales yield nothing.
    pub fn keyed_entries(&self) -> impl Iterator<Item = (&str, &Token)> + '_ {
        let entries: &[(String, Token)] = match &self.repr {
            Repr::Keyed(keyed) => &keyed.entries,
            Repr::Ordered(_) => &[],
        };
        entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Interprets a keyed entry as a style object, for variant groups stored
    /// as plain scales.
    pub(crate) fn style_object(&self, name: &str) -> Option<StyleObject> {
        let Token::Scale(entry) = self.get_key(name)? else {
            return None;
        };
        if entry.is_ordered() {
            return None;
        }
        Some(
            entry
                .keyed_entries()
                .map(|(k, token)| (k, token.to_prop_value()))
                .collect(),
        )
    }

    /// Returns how deeply scales nest inside this one (1 for a flat scale).
    #[must_use]
    pub fn depth(&self) -> usize {
        let tokens: Box<dyn Iterator<Item = &Token>> = match &self.repr {
            Repr::Ordered(tokens) => Box::new(tokens.iter()),
            Repr::Keyed(entries) => Box::new(entries.iter().map(|(_, t)| t)),
        };
        1 + tokens
            .filter_map(|t| match t {
                Token::Scale(s) => Some(s.depth()),
                Token::Value(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Merges `other` over `self`.
    ///
    /// Keyed scales merge entry by entry, recursing into nested keyed
    /// scales. Any other combination replaces `self`, except that an empty
    /// ordered replacement is ignored.
    pub(crate) fn merge(&mut self, other: &Self, depth: usize) -> Result<(), ConfigError> {
        if depth > MAX_NESTING {
            return Err(ConfigError::NestingTooDeep { limit: MAX_NESTING });
        }
        if let Repr::Ordered(over) = &other.repr
            && over.is_empty()
        {
            return Ok(());
        }
        if let (Repr::Keyed(base), Repr::Keyed(over)) = (&mut self.repr, &other.repr) {
            for (key, token) in over.iter() {
                if let Some(slot) = base.get_mut(key) {
                    match (slot, token) {
                        (Token::Scale(nested), Token::Scale(over_nested)) => {
                            nested.merge(over_nested, depth + 1)?;
                        }
                        (slot, _) => *slot = token.clone(),
                    }
                } else {
                    base.insert(key.to_owned(), token.clone());
                }
            }
            return Ok(());
        }
        *self = other.clone();
        Ok(())
    }

    fn to_json(&self) -> Value {
        match &self.repr {
            Repr::Ordered(tokens) => Value::Array(tokens.iter().map(Token::to_json).collect()),
            Repr::Keyed(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, t)| (k.to_owned(), t.to_json()))
                    .collect(),
            ),
        }
    }
}
