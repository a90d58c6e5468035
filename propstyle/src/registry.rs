// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop spec registry.
//!
//! This module provides [`PropSpec`], the resolution rule for one style prop,
//! and [`PropRegistry`], the ordered vocabulary a component accepts.

use std::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;
use propstyle_theme::{Scalar, ScaleKey, Theme};

use crate::resolve::{Transform, Unit, resolve};
use crate::specs;

/// Props that steer composition itself and are never styled or forwarded.
pub const RESERVED_PROPS: [&str; 4] = ["as", "variant", "theme", "children"];

/// The resolution rule for one style prop.
///
/// Specs are plain `const` values, so vocabularies can live in statics.
///
/// # Example
///
/// ```rust
/// use propstyle::{PropSpec, Unit};
/// use propstyle_theme::{Scalar, ScaleKey, Theme};
///
/// const GAP: PropSpec = PropSpec::new("gap", &["gap"])
///     .with_scale(ScaleKey::SPACE)
///     .with_unit(Unit::Px);
///
/// let theme = Theme::default();
/// assert_eq!(GAP.resolve(&Scalar::from(2), &theme).as_deref(), Some("8px"));
/// ```
#[derive(Copy, Clone)]
pub struct PropSpec {
    name: &'static str,
    aliases: &'static [&'static str],
    properties: &'static [&'static str],
    scale: Option<ScaleKey>,
    transform: Option<Transform>,
    unit: Unit,
}

impl PropSpec {
    /// Creates a spec writing to one or more CSS properties.
    #[must_use]
    pub const fn new(name: &'static str, properties: &'static [&'static str]) -> Self {
        Self {
            name,
            aliases: &[],
            properties,
            scale: None,
            transform: None,
            unit: Unit::None,
        }
    }

    /// Sets alternative names for the prop.
    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the theme scale values are looked up in.
    #[must_use]
    pub const fn with_scale(mut self, scale: ScaleKey) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets a transform that runs before scale lookup.
    #[must_use]
    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets how bare numbers are written.
    #[must_use]
    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns the primary prop name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the alternative names.
    #[must_use]
    #[inline]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Returns the CSS properties this prop writes.
    #[must_use]
    #[inline]
    pub const fn properties(&self) -> &'static [&'static str] {
        self.properties
    }

    /// Returns the theme scale, if any.
    #[must_use]
    #[inline]
    pub const fn scale(&self) -> Option<ScaleKey> {
        self.scale
    }

    /// Returns the unit policy.
    #[must_use]
    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns `true` if `name` is the primary name or an alias.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    /// Resolves one scalar against a theme.
    #[must_use]
    pub fn resolve(&self, value: &Scalar, theme: &Theme) -> Option<String> {
        let scale = self.scale.and_then(|key| theme.scale(key));
        resolve(value, scale, self.transform, self.unit)
    }
}

impl fmt::Debug for PropSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("properties", &self.properties)
            .field("scale", &self.scale)
            .field("has_transform", &self.transform.is_some())
            .field("unit", &self.unit)
            .finish()
    }
}

/// How a component treats a prop.
#[derive(Copy, Clone, Debug)]
pub enum PropClass<'a> {
    /// One of [`RESERVED_PROPS`].
    Reserved,
    /// A style prop the component accepts.
    Style(&'a PropSpec),
    /// A style prop of the standard vocabulary the component does not
    /// accept. It is neither styled nor forwarded as an attribute.
    Filtered,
    /// Anything else; forwarded as an element attribute.
    Attribute,
}

/// An ordered set of prop specs.
///
/// Declaration order is resolution order: when two props write the same CSS
/// property, the one registered later wins. Names and aliases share one
/// namespace.
///
/// # Example
///
/// ```rust
/// use propstyle::{PropClass, PropRegistry, specs};
///
/// let registry = PropRegistry::new().with(specs::SPACE).with(specs::COLOR);
///
/// assert_eq!(registry.lookup("bg").map(|s| s.name()), Some("backgroundColor"));
/// assert!(matches!(registry.classify("mt"), PropClass::Style(_)));
/// assert!(matches!(registry.classify("fontSize"), PropClass::Filtered));
/// assert!(matches!(registry.classify("href"), PropClass::Attribute));
/// assert!(matches!(registry.classify("variant"), PropClass::Reserved));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropRegistry {
    specs: Vec<PropSpec>,
    by_name: HashMap<&'static str, usize>,
}

impl PropRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry holding every built-in vocabulary.
    ///
    /// Used to resolve keys of variant and default style objects, and to
    /// recognize style props a component filters out.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: LazyLock<PropRegistry> = LazyLock::new(|| {
            specs::ALL
                .iter()
                .fold(PropRegistry::new(), |registry, vocabulary| registry.with(vocabulary))
        });
        &STANDARD
    }

    /// Registers a spec at the end of the resolution order.
    ///
    /// # Panics
    ///
    /// Panics if the prop's name or one of its aliases is already taken.
    pub fn register(&mut self, spec: PropSpec) {
        let index = self.specs.len();
        for name in std::iter::once(spec.name).chain(spec.aliases.iter().copied()) {
            assert!(
                !self.by_name.contains_key(name),
                "Prop '{name}' is already registered"
            );
            self.by_name.insert(name, index);
        }
        self.specs.push(spec);
    }

    /// Appends a vocabulary, skipping specs whose name or any alias is
    /// already registered.
    ///
    /// This lets overlapping vocabularies (say, one with `fontSize` and one
    /// including it) be combined freely.
    #[must_use]
    pub fn with(mut self, specs: &[PropSpec]) -> Self {
        for spec in specs {
            let taken = std::iter::once(spec.name)
                .chain(spec.aliases.iter().copied())
                .find(|name| self.by_name.contains_key(name));
            match taken {
                None => self.register(*spec),
                Some(name) if name != spec.name => {
                    tracing::debug!(prop = spec.name, alias = name, "skipping prop with a taken alias");
                }
                Some(_) => {}
            }
        }
        self
    }

    /// Returns the number of specs.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if no spec is registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Looks up a spec by name or alias.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&PropSpec> {
        self.by_name.get(name).map(|&index| &self.specs[index])
    }

    /// Iterates specs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &PropSpec> + '_ {
        self.specs.iter()
    }

    /// Classifies a prop for this registry.
    #[must_use]
    pub fn classify(&self, name: &str) -> PropClass<'_> {
        if RESERVED_PROPS.contains(&name) {
            PropClass::Reserved
        } else if let Some(spec) = self.lookup(name) {
            PropClass::Style(spec)
        } else if Self::standard().lookup(name).is_some() {
            PropClass::Filtered
        } else {
            PropClass::Attribute
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PropSpec = PropSpec::new("a", &["a-prop"]).with_aliases(&["alpha"]);
    const B: PropSpec = PropSpec::new("b", &["b-prop"]);

    #[test]
    fn lookup_by_name_and_alias() {
        let mut registry = PropRegistry::new();
        registry.register(A);
        registry.register(B);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("a").map(PropSpec::name), Some("a"));
        assert_eq!(registry.lookup("alpha").map(PropSpec::name), Some("a"));
        assert!(registry.lookup("beta").is_none());
        assert!(A.answers_to("alpha"));
        assert!(!B.answers_to("alpha"));
    }

    #[test]
    fn iteration_follows_registration_order() {
        let registry = PropRegistry::new().with(&[B, A]);
        let names: Vec<_> = registry.iter().map(PropSpec::name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    #[should_panic(expected = "Prop 'alpha' is already registered")]
    fn alias_collision_panics() {
        let mut registry = PropRegistry::new();
        registry.register(A);
        registry.register(PropSpec::new("alpha", &["x"]));
    }

    #[test]
    fn with_skips_duplicates() {
        let registry = PropRegistry::new().with(&[A, B]).with(&[B, A]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn with_skips_alias_collisions() {
        const C: PropSpec = PropSpec::new("c", &["c-prop"]).with_aliases(&["alpha"]);
        let registry = PropRegistry::new().with(&[A]).with(&[C, B]);

        let names: Vec<_> = registry.iter().map(PropSpec::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(registry.lookup("alpha").map(PropSpec::name), Some("a"));
        assert!(registry.lookup("c").is_none());
    }

    #[test]
    fn standard_registry_has_every_vocabulary() {
        let standard = PropRegistry::standard();
        for vocabulary in specs::ALL {
            for spec in *vocabulary {
                assert!(
                    standard.lookup(spec.name()).is_some(),
                    "missing {}",
                    spec.name()
                );
            }
        }
    }

    #[test]
    fn classify_truth_table() {
        let registry = PropRegistry::new().with(specs::SPACE);
        assert!(matches!(registry.classify("as"), PropClass::Reserved));
        assert!(matches!(registry.classify("theme"), PropClass::Reserved));
        assert!(matches!(registry.classify("children"), PropClass::Reserved));
        assert!(matches!(registry.classify("margin"), PropClass::Style(s) if s.name() == "m"));
        assert!(matches!(registry.classify("color"), PropClass::Filtered));
        assert!(matches!(registry.classify("onClick"), PropClass::Attribute));
        assert!(matches!(registry.classify("src"), PropClass::Attribute));
    }
}
