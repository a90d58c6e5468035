// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved style declarations.
//!
//! This module provides [`StyleDeclaration`], the output of composition: a
//! base layer of CSS properties plus one override layer per breakpoint.

use std::borrow::Cow;

use propstyle_theme::Breakpoint;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::sink::StyleSink;

/// A layer position inside a [`StyleDeclaration`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// No media query.
    Base,
    /// The media query of the breakpoint at this index in the theme.
    Media(usize),
}

/// One layer of CSS `property: value` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    /// Sorted by property for binary search lookup.
    entries: SmallVec<[(Cow<'static, str>, String); 8]>,
}

impl Declarations {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of properties set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no property is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the value of a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|(k, _)| (**k).cmp(property))
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self
            .entries
            .binary_search_by(|(k, _)| (**k).cmp(&*property))
        {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (property, value)),
        }
    }

    /// Iterates `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    /// Copies every entry of `other` into `self`, overwriting collisions.
    pub fn merge_from(&mut self, other: &Self) {
        for (property, value) in &other.entries {
            self.set(property.clone(), value.clone());
        }
    }
}

/// The result of composing a prop bag against a theme.
///
/// Media layers are keyed by breakpoint index. Since theme breakpoints are
/// strictly ascending, index order is also ascending threshold order.
///
/// # Example
///
/// ```rust
/// use propstyle::{Slot, StyleDeclaration};
///
/// let mut style = StyleDeclaration::new();
/// style.set(Slot::Base, "padding", "16px");
/// style.set(Slot::Media(1), "padding", "32px");
///
/// assert_eq!(style.get(Slot::Base, "padding"), Some("16px"));
/// assert_eq!(style.get(Slot::Media(0), "padding"), None);
/// assert_eq!(style.media_layers().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    base: Declarations,
    /// Sorted by breakpoint index.
    media: Vec<(usize, Declarations)>,
}

impl StyleDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no layer sets any property.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.media.iter().all(|(_, d)| d.is_empty())
    }

    /// Returns the base layer.
    #[must_use]
    pub fn base(&self) -> &Declarations {
        &self.base
    }

    /// Returns the layer for a breakpoint index, if anything was set there.
    #[must_use]
    pub fn media(&self, index: usize) -> Option<&Declarations> {
        self.media
            .binary_search_by_key(&index, |(i, _)| *i)
            .ok()
            .map(|idx| &self.media[idx].1)
    }

    /// Iterates the non-empty media layers in ascending breakpoint order.
    pub fn media_layers(&self) -> impl Iterator<Item = (usize, &Declarations)> + '_ {
        self.media
            .iter()
            .filter(|(_, d)| !d.is_empty())
            .map(|(i, d)| (*i, d))
    }

    /// Gets a property in a slot.
    #[must_use]
    pub fn get(&self, slot: Slot, property: &str) -> Option<&str> {
        match slot {
            Slot::Base => self.base.get(property),
            Slot::Media(index) => self.media(index)?.get(property),
        }
    }

    /// Sets a property in a slot, replacing any previous value there.
    pub fn set(
        &mut self,
        slot: Slot,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) {
        self.layer_mut(slot).set(property, value);
    }

    fn layer_mut(&mut self, slot: Slot) -> &mut Declarations {
        let index = match slot {
            Slot::Base => return &mut self.base,
            Slot::Media(index) => index,
        };
        let idx = match self.media.binary_search_by_key(&index, |(i, _)| *i) {
            Ok(idx) => idx,
            Err(idx) => {
                self.media.insert(idx, (index, Declarations::new()));
                idx
            }
        };
        &mut self.media[idx].1
    }

    /// Folds `other` over `self` slot by slot.
    ///
    /// Only the (property, slot) pairs that `other` sets are overwritten.
    pub fn merge(&mut self, other: &Self) {
        self.base.merge_from(&other.base);
        for (index, layer) in &other.media {
            self.layer_mut(Slot::Media(*index)).merge_from(layer);
        }
    }

    /// Hands every rule to `sink`: the base layer, then each media layer in
    /// ascending breakpoint order.
    ///
    /// Layers whose index has no breakpoint in `breakpoints` are skipped.
    pub fn emit(&self, breakpoints: &[Breakpoint], sink: &mut impl StyleSink) {
        for (property, value) in self.base.iter() {
            sink.rule(None, property, value);
        }
        for (index, layer) in self.media_layers() {
            let Some(breakpoint) = breakpoints.get(index) else {
                tracing::trace!(index, "no breakpoint for media layer; skipping");
                continue;
            };
            for (property, value) in layer.iter() {
                sink.rule(Some(breakpoint), property, value);
            }
        }
    }

    /// Converts to the nested object shape CSS-in-JS runtimes accept:
    /// base properties at the top level, each media layer under its
    /// `@media` prelude.
    ///
    /// Key order is significant: base properties come first, then media
    /// layers in ascending breakpoint order.
    #[must_use]
    pub fn to_json(&self, breakpoints: &[Breakpoint]) -> Value {
        let mut root = Map::new();
        for (property, value) in self.base.iter() {
            root.insert(property.to_owned(), Value::String(value.to_owned()));
        }
        for (index, layer) in self.media_layers() {
            let Some(breakpoint) = breakpoints.get(index) else {
                continue;
            };
            let nested = layer
                .iter()
                .map(|(p, v)| (p.to_owned(), Value::String(v.to_owned())))
                .collect();
            root.insert(breakpoint.media_query(), Value::Object(nested));
        }
        Value::Object(root)
    }
}
