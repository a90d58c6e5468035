// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme definition and lookup.
//!
//! This module provides [`Theme`], an immutable collection of scales,
//! breakpoints, and variant groups, and [`ThemeBuilder`] for constructing it.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use crate::breakpoint::{Breakpoint, check_ascending};
use crate::document::ThemeDocument;
use crate::error::ConfigError;
use crate::scale::{MAX_NESTING, Scale, ScaleKey};
use crate::value::StyleObject;

/// Scales every theme must define with at least one entry.
const REQUIRED_SCALES: [ScaleKey; 2] = [ScaleKey::SPACE, ScaleKey::FONT_SIZES];

/// Named style presets within one group, e.g. the `primary` and `outline`
/// entries of a `buttons` group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantGroup {
    /// Sorted by name for binary search lookup.
    variants: Vec<(String, StyleObject)>,
}

impl VariantGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variant.
    pub fn insert(&mut self, name: impl Into<String>, style: StyleObject) {
        let name = name.into();
        match self.variants.binary_search_by(|(k, _)| k.cmp(&name)) {
            Ok(idx) => self.variants[idx].1 = style,
            Err(idx) => self.variants.insert(idx, (name, style)),
        }
    }

    /// Gets a variant by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleObject> {
        self.variants
            .binary_search_by(|(k, _)| k.as_str().cmp(name))
            .ok()
            .map(|idx| &self.variants[idx].1)
    }

    /// Returns the number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the group has no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterates variant names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(|(k, _)| k.as_str())
    }
}

/// A set of design tokens.
///
/// Themes are immutable after creation and cheap to clone: the data lives
/// behind an [`Arc`], so one theme can serve many concurrent compositions.
/// Use [`ThemeBuilder`] or [`Theme::from_json_str`] to construct them.
///
/// # Example
///
/// ```rust
/// use propstyle_theme::{Scalar, Scale, ScaleKey, ThemeBuilder};
///
/// let theme = ThemeBuilder::defaults()
///     .scale(ScaleKey::COLORS, Scale::keyed([("primary", "#07c")]))
///     .build()
///     .unwrap();
///
/// let space = theme.scale(ScaleKey::SPACE).unwrap();
/// assert_eq!(space.lookup(&Scalar::from(3)), Some(&Scalar::from(16)));
/// assert_eq!(theme.breakpoints().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Arc<ThemeData>,
}

/// Internal storage for theme data.
#[derive(Clone, Debug, Default, PartialEq)]
struct ThemeData {
    /// Sorted by name for binary search lookup.
    scales: Vec<(String, Scale)>,
    breakpoints: Vec<Breakpoint>,
    /// Sorted by group name for binary search lookup.
    variants: Vec<(String, VariantGroup)>,
}

impl ThemeData {
    fn validate(&self) -> Result<(), ConfigError> {
        for key in REQUIRED_SCALES {
            if self.scale(key.name()).is_none_or(Scale::is_empty) {
                return Err(ConfigError::EmptyScale {
                    scale: key.name().into(),
                });
            }
        }
        for (_, scale) in &self.scales {
            if scale.depth() > MAX_NESTING {
                return Err(ConfigError::NestingTooDeep { limit: MAX_NESTING });
            }
        }
        check_ascending(&self.breakpoints)
    }

    fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales
            .binary_search_by(|(k, _)| k.as_str().cmp(name))
            .ok()
            .map(|idx| &self.scales[idx].1)
    }

    fn set_scale(&mut self, name: String, scale: Scale) {
        match self.scales.binary_search_by(|(k, _)| k.cmp(&name)) {
            Ok(idx) => self.scales[idx].1 = scale,
            Err(idx) => self.scales.insert(idx, (name, scale)),
        }
    }

    fn merge_scale(&mut self, name: String, scale: &Scale) -> Result<(), ConfigError> {
        match self.scales.binary_search_by(|(k, _)| k.cmp(&name)) {
            Ok(idx) => self.scales[idx].1.merge(scale, 1),
            Err(idx) => {
                self.scales.insert(idx, (name, scale.clone()));
                Ok(())
            }
        }
    }

    /// Copies the style-object entries of an overriding scale into the
    /// variant group of the same name, if the theme declares one.
    fn fold_into_group(&mut self, name: &str, scale: &Scale) {
        let Ok(idx) = self.variants.binary_search_by(|(k, _)| k.as_str().cmp(name)) else {
            return;
        };
        let group = &mut self.variants[idx].1;
        for (variant, _) in scale.keyed_entries() {
            if let Some(style) = scale.style_object(variant) {
                group.insert(variant, style);
            }
        }
    }

    fn group_mut(&mut self, group: String) -> &mut VariantGroup {
        let idx = match self.variants.binary_search_by(|(k, _)| k.cmp(&group)) {
            Ok(idx) => idx,
            Err(idx) => {
                self.variants.insert(idx, (group, VariantGroup::new()));
                idx
            }
        };
        &mut self.variants[idx].1
    }
}

impl Theme {
    /// Loads a theme from a JSON document.
    ///
    /// The document must define `space` and `fontSizes`; breakpoints default
    /// to none.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::from_document(&ThemeDocument::from_json_str(json)?)
    }

    /// Loads a theme from a JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        Self::from_document(&ThemeDocument::from_json_value(value)?)
    }

    /// Builds a theme from a parsed document.
    pub fn from_document(doc: &ThemeDocument) -> Result<Self, ConfigError> {
        let mut builder = ThemeBuilder::new();
        if let Some(breakpoints) = doc.to_breakpoints()? {
            builder = builder.breakpoints(breakpoints);
        }
        for (name, scale) in doc.to_scales()? {
            builder = builder.scale(name, scale);
        }
        for (group, variants) in doc.to_variant_groups()? {
            builder.data.group_mut(group).variants = variants.variants;
        }
        builder.build()
    }

    /// Returns a new theme with `overrides` merged over this one.
    ///
    /// Keyed scales merge entry by entry; ordered scales and breakpoints are
    /// replaced unless the replacement is empty; variants are replaced one
    /// by one within their group. A keyed scale named after a declared
    /// variant group also replaces that group's variants, so
    /// `{ "buttons": { "primary": { ... } } }` overrides `buttons.primary`
    /// however the ambient theme declared it.
    pub fn with_overrides(&self, overrides: &ThemeDocument) -> Result<Self, ConfigError> {
        let mut data = ThemeData::clone(&self.inner);
        if let Some(breakpoints) = overrides.to_breakpoints()?
            && !breakpoints.is_empty()
        {
            data.breakpoints = breakpoints;
        }
        for (name, scale) in overrides.to_scales()? {
            data.fold_into_group(&name, &scale);
            data.merge_scale(name, &scale)?;
        }
        for (group, variants) in overrides.to_variant_groups()? {
            let target = data.group_mut(group);
            for (name, style) in variants.variants {
                target.insert(name, style);
            }
        }
        data.validate()?;
        tracing::debug!(
            scales = data.scales.len(),
            breakpoints = data.breakpoints.len(),
            "merged theme overrides"
        );
        Ok(Self {
            inner: Arc::new(data),
        })
    }

    /// Gets a scale by key.
    #[must_use]
    #[inline]
    pub fn scale(&self, key: ScaleKey) -> Option<&Scale> {
        self.inner.scale(key.name())
    }

    /// Gets a scale by name.
    #[must_use]
    pub fn scale_named(&self, name: &str) -> Option<&Scale> {
        self.inner.scale(name)
    }

    /// Returns the spacing scale.
    #[must_use]
    pub fn space(&self) -> Option<&Scale> {
        self.scale(ScaleKey::SPACE)
    }

    /// Returns the font size scale.
    #[must_use]
    pub fn font_sizes(&self) -> Option<&Scale> {
        self.scale(ScaleKey::FONT_SIZES)
    }

    /// Returns the color palette.
    #[must_use]
    pub fn colors(&self) -> Option<&Scale> {
        self.scale(ScaleKey::COLORS)
    }

    /// Iterates scale names in order.
    pub fn scale_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.scales.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the breakpoints, ascending.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.inner.breakpoints
    }

    /// Finds the index of the breakpoint addressed by a responsive map key.
    #[must_use]
    pub fn breakpoint_index(&self, key: &str) -> Option<usize> {
        self.inner.breakpoints.iter().position(|b| b.matches_key(key))
    }

    /// Gets a variant group by name.
    #[must_use]
    pub fn variant_group(&self, group: &str) -> Option<&VariantGroup> {
        self.inner
            .variants
            .binary_search_by(|(k, _)| k.as_str().cmp(group))
            .ok()
            .map(|idx| &self.inner.variants[idx].1)
    }

    /// Looks up a variant.
    ///
    /// Explicit variant groups are checked first. Failing that, a keyed scale
    /// named after the group is consulted, so a theme shaped like
    /// `{ "buttons": { "primary": { ... } } }` works without a `variants` key.
    #[must_use]
    pub fn variant(&self, group: &str, name: &str) -> Option<Cow<'_, StyleObject>> {
        if let Some(style) = self.variant_group(group).and_then(|g| g.get(name)) {
            return Some(Cow::Borrowed(style));
        }
        self.scale_named(group)
            .and_then(|scale| scale.style_object(name))
            .map(Cow::Owned)
    }
}

impl Default for Theme {
    /// The default theme: a spacing scale, a font size scale, and three
    /// breakpoints (`sm`, `md`, `lg`).
    fn default() -> Self {
        Self {
            inner: Arc::new(ThemeBuilder::defaults().data),
        }
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

/// Builder for constructing [`Theme`] instances.
///
/// # Example
///
/// ```rust
/// use propstyle_theme::{Breakpoint, Scale, ScaleKey, StyleObject, ThemeBuilder};
///
/// let theme = ThemeBuilder::new()
///     .scale(ScaleKey::SPACE, Scale::ordered([0, 4, 8, 16, 32]))
///     .scale(ScaleKey::FONT_SIZES, Scale::ordered([12, 14, 16]))
///     .breakpoint(Breakpoint::named("md", "52em").unwrap())
///     .variant("buttons", "primary", StyleObject::new().set("bg", "tomato"))
///     .build()
///     .unwrap();
///
/// assert!(theme.variant("buttons", "primary").is_some());
/// ```
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    data: ThemeData,
}

impl ThemeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with the default scales and breakpoints.
    #[must_use]
    pub fn defaults() -> Self {
        let breakpoints = [("sm", 40.0), ("md", 52.0), ("lg", 64.0)]
            .into_iter()
            .map(|(name, width)| Breakpoint::em(name, width))
            .collect::<Vec<_>>();
        Self::new()
            .scale(ScaleKey::SPACE, Scale::ordered([0, 4, 8, 16, 32, 64, 128, 256, 512]))
            .scale(
                ScaleKey::FONT_SIZES,
                Scale::ordered([12, 14, 16, 20, 24, 32, 48, 64, 72]),
            )
            .breakpoints(breakpoints)
    }

    /// Sets a scale, replacing any existing scale with the same name.
    #[must_use]
    pub fn scale(mut self, name: impl Into<String>, scale: Scale) -> Self {
        self.data.set_scale(name.into(), scale);
        self
    }

    /// Appends a breakpoint.
    #[must_use]
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.data.breakpoints.push(breakpoint);
        self
    }

    /// Replaces all breakpoints.
    #[must_use]
    pub fn breakpoints(mut self, breakpoints: impl IntoIterator<Item = Breakpoint>) -> Self {
        self.data.breakpoints = breakpoints.into_iter().collect();
        self
    }

    /// Adds or replaces a variant in a group.
    #[must_use]
    pub fn variant(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        style: StyleObject,
    ) -> Self {
        self.data.group_mut(group.into()).insert(name, style);
        self
    }

    /// Validates and builds the theme.
    ///
    /// Fails if `space` or `fontSizes` is missing or empty, if scales nest
    /// too deeply, or if breakpoints are not strictly ascending.
    pub fn build(self) -> Result<Theme, ConfigError> {
        self.data.validate()?;
        tracing::debug!(
            scales = self.data.scales.len(),
            breakpoints = self.data.breakpoints.len(),
            variant_groups = self.data.variants.len(),
            "built theme"
        );
        Ok(Theme {
            inner: Arc::new(self.data),
        })
    }
}
