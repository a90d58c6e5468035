// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style composition.
//!
//! [`Composer`] drives a full pass: it merges a `theme` prop over the ambient
//! theme, resolves the component defaults, the selected variant, and the
//! explicit props into separate layers, then folds them with [`LayerStack`].

use std::borrow::Cow;

use propstyle_theme::{PropValue, Scalar, StyleObject, Theme, ThemeDocument};

use crate::declaration::StyleDeclaration;
use crate::diagnostics::{Diagnostics, ResolutionWarning};
use crate::merge::{Layer, LayerStack};
use crate::props::{Props, THEME_PROP};
use crate::registry::{PropRegistry, PropSpec};
use crate::resolve::Unit;
use crate::responsive::expand;

/// The key selecting a theme variant.
pub const VARIANT_PROP: &str = "variant";

/// The variant group used when a component names none.
pub const DEFAULT_VARIANT_GROUP: &str = "variants";

/// The outcome of one composition pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composition {
    /// The resolved declaration.
    pub style: StyleDeclaration,
    /// Everything that was skipped or passed through along the way, each
    /// reported once.
    pub warnings: Vec<ResolutionWarning>,
}

/// Composes prop bags for one component declaration.
///
/// # Example
///
/// ```rust
/// use propstyle::{Composer, PropRegistry, Props, Slot, specs};
/// use propstyle_theme::{StyleObject, ThemeBuilder};
///
/// let registry = PropRegistry::new().with(specs::SPACE).with(specs::COLOR);
/// let defaults = StyleObject::new().set("px", 3).set("color", "white");
/// let theme = ThemeBuilder::defaults()
///     .variant("buttons", "primary", StyleObject::new().set("bg", "blue"))
///     .build()
///     .unwrap();
///
/// let composer = Composer::new(&registry)
///     .defaults(&defaults)
///     .variant_group("buttons")
///     .default_variant("primary");
///
/// let composition = composer.compose(&Props::new().set("color", "black"), &theme);
/// let style = &composition.style;
/// assert_eq!(style.get(Slot::Base, "padding-left"), Some("16px"));
/// assert_eq!(style.get(Slot::Base, "background-color"), Some("blue"));
/// assert_eq!(style.get(Slot::Base, "color"), Some("black"));
/// assert!(composition.warnings.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Composer<'a> {
    registry: &'a PropRegistry,
    defaults: Option<&'a StyleObject>,
    variant_group: &'a str,
    default_variant: Option<&'a str>,
}

impl<'a> Composer<'a> {
    /// Creates a composer accepting the props in `registry`.
    #[must_use]
    pub fn new(registry: &'a PropRegistry) -> Self {
        Self {
            registry,
            defaults: None,
            variant_group: DEFAULT_VARIANT_GROUP,
            default_variant: None,
        }
    }

    /// Sets the lowest-precedence style applied before variants and props.
    #[must_use]
    pub fn defaults(mut self, defaults: &'a StyleObject) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Sets the theme variant group `variant` props select from.
    #[must_use]
    pub fn variant_group(mut self, group: &'a str) -> Self {
        self.variant_group = group;
        self
    }

    /// Sets the variant used when no `variant` prop is given.
    #[must_use]
    pub fn default_variant(mut self, name: &'a str) -> Self {
        self.default_variant = Some(name);
        self
    }

    /// Composes `props` against `theme`.
    ///
    /// Never fails: problems are skipped and reported in
    /// [`Composition::warnings`].
    #[must_use]
    pub fn compose(&self, props: &Props, theme: &Theme) -> Composition {
        let mut diagnostics = Diagnostics::new();
        let style = self.compose_into(props, theme, &mut diagnostics);
        Composition {
            style,
            warnings: diagnostics.into_vec(),
        }
    }

    /// Composes `props` against `theme`, reporting into a caller-owned
    /// collector.
    ///
    /// Use this when the caller has warnings of its own for the same pass.
    pub fn compose_into(
        &self,
        props: &Props,
        theme: &Theme,
        diagnostics: &mut Diagnostics,
    ) -> StyleDeclaration {
        let theme = effective_theme(props, theme, diagnostics);

        let mut stack = LayerStack::new();
        if let Some(defaults) = self.defaults {
            let declaration = self.resolve_object(defaults, &theme, diagnostics);
            stack.push(Layer::Defaults, declaration);
        }
        if let Some(variant) = self.select_variant(props, &theme, diagnostics) {
            let declaration = self.resolve_object(&variant, &theme, diagnostics);
            stack.push(Layer::Variant, declaration);
        }
        let declaration = self.resolve_props(props, &theme, diagnostics);
        stack.push(Layer::Props, declaration);

        let style = stack.flatten();
        tracing::trace!(
            base = style.base().len(),
            media_layers = style.media_layers().count(),
            warnings = diagnostics.len(),
            "composed style"
        );
        style
    }

    fn select_variant<'t>(
        &self,
        props: &Props,
        theme: &'t Theme,
        diagnostics: &mut Diagnostics,
    ) -> Option<Cow<'t, StyleObject>> {
        let (name, explicit) = match props.get(VARIANT_PROP) {
            Some(PropValue::Scalar(Scalar::Str(name))) => (name.as_str(), true),
            Some(other) => {
                diagnostics.push(ResolutionWarning::MalformedValue {
                    prop: VARIANT_PROP.into(),
                    found: other.kind(),
                });
                return None;
            }
            None => (self.default_variant?, false),
        };
        let variant = theme.variant(self.variant_group, name);
        if variant.is_none() && explicit {
            diagnostics.push(ResolutionWarning::UnknownVariant {
                group: self.variant_group.into(),
                variant: name.into(),
            });
        }
        variant
    }

    /// Resolves explicit props in registry order.
    fn resolve_props(
        &self,
        props: &Props,
        theme: &Theme,
        diagnostics: &mut Diagnostics,
    ) -> StyleDeclaration {
        let mut declaration = StyleDeclaration::new();
        for spec in self.registry.iter() {
            if let Some((key, value)) = pick(spec, props, diagnostics) {
                apply_spec(spec, key, value, theme, &mut declaration, diagnostics);
            }
        }
        declaration
    }

    /// Resolves a style object in its own entry order.
    ///
    /// Keys are looked up in the component registry, then in the standard
    /// vocabulary; anything else is a raw CSS property.
    fn resolve_object(
        &self,
        object: &StyleObject,
        theme: &Theme,
        diagnostics: &mut Diagnostics,
    ) -> StyleDeclaration {
        let standard = PropRegistry::standard();
        let mut declaration = StyleDeclaration::new();
        for (key, value) in object.iter() {
            match self.registry.lookup(key).or_else(|| standard.lookup(key)) {
                Some(spec) => apply_spec(spec, key, value, theme, &mut declaration, diagnostics),
                None => apply_raw(key, value, theme, &mut declaration, diagnostics),
            }
        }
        declaration
    }
}

/// Composes `props` against `theme` with no defaults and the default variant
/// group.
#[must_use]
pub fn compose(props: &Props, theme: &Theme, registry: &PropRegistry) -> Composition {
    Composer::new(registry).compose(props, theme)
}

/// Merges a `theme` prop over the ambient theme.
fn effective_theme<'t>(
    props: &Props,
    theme: &'t Theme,
    diagnostics: &mut Diagnostics,
) -> Cow<'t, Theme> {
    let mut reject = |reason: String| {
        diagnostics.push(ResolutionWarning::InvalidThemeOverride { reason });
        Cow::Borrowed(theme)
    };
    let overrides = match props.get(THEME_PROP) {
        None => return Cow::Borrowed(theme),
        Some(PropValue::Theme(doc)) => Cow::Borrowed(doc.as_ref()),
        Some(PropValue::Nested(raw)) => match ThemeDocument::from_json_value(raw.clone()) {
            Ok(doc) => Cow::Owned(doc),
            Err(err) => return reject(err.to_string()),
        },
        Some(other) => {
            return reject(format!("expected a theme object, found {}", other.kind()));
        }
    };
    match theme.with_overrides(&overrides) {
        Ok(merged) => Cow::Owned(merged),
        Err(err) => reject(err.to_string()),
    }
}

/// Finds the value for a spec, preferring the primary name over aliases.
fn pick<'p>(
    spec: &PropSpec,
    props: &'p Props,
    diagnostics: &mut Diagnostics,
) -> Option<(&'static str, &'p PropValue)> {
    let mut chosen: Option<(&'static str, &'p PropValue)> = None;
    for name in std::iter::once(spec.name()).chain(spec.aliases().iter().copied()) {
        let Some(value) = props.get(name) else {
            continue;
        };
        match chosen {
            None => chosen = Some((name, value)),
            Some((prop, _)) => diagnostics.push(ResolutionWarning::ShadowedAlias {
                prop: prop.into(),
                alias: name.into(),
            }),
        }
    }
    chosen
}

fn apply_spec(
    spec: &PropSpec,
    key: &str,
    value: &PropValue,
    theme: &Theme,
    declaration: &mut StyleDeclaration,
    diagnostics: &mut Diagnostics,
) {
    let Some(expanded) = expand(key, value, theme.breakpoints(), diagnostics) else {
        return;
    };
    for (slot, scalar) in expanded.slots() {
        let Some(css) = spec.resolve(scalar, theme) else {
            diagnostics.push(ResolutionWarning::MalformedValue {
                prop: key.into(),
                found: scalar.kind(),
            });
            continue;
        };
        for property in spec.properties() {
            declaration.set(slot, *property, css.clone());
        }
    }
}

fn apply_raw(
    key: &str,
    value: &PropValue,
    theme: &Theme,
    declaration: &mut StyleDeclaration,
    diagnostics: &mut Diagnostics,
) {
    let Some(expanded) = expand(key, value, theme.breakpoints(), diagnostics) else {
        return;
    };
    let property = css_property_name(key);
    for (slot, scalar) in expanded.slots() {
        if let Scalar::Bool(_) = scalar {
            diagnostics.push(ResolutionWarning::MalformedValue {
                prop: key.into(),
                found: scalar.kind(),
            });
            continue;
        }
        declaration.set(slot, property.clone(), Unit::None.format(scalar));
    }
}

/// Converts a camelCase key to a kebab-case CSS property name.
fn css_property_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::Slot;
    use crate::specs;
    use propstyle_theme::{Scale, ScaleKey, ThemeBuilder};
    use serde_json::json;

    fn registry() -> PropRegistry {
        PropRegistry::new()
            .with(specs::SPACE)
            .with(specs::COLOR)
            .with(specs::LAYOUT)
            .with(specs::BORDER)
    }

    #[test]
    fn kebab_case_keys() {
        assert_eq!(css_property_name("textDecoration"), "text-decoration");
        assert_eq!(css_property_name("cursor"), "cursor");
        assert_eq!(css_property_name("border-top-color"), "border-top-color");
    }

    #[test]
    fn end_to_end_props() {
        let theme = ThemeBuilder::defaults()
            .scale(ScaleKey::SPACE, Scale::ordered([0, 4, 8, 16, 32]))
            .build()
            .unwrap();
        let props = Props::new().set("p", 3).set("bg", "tomato").set("borderRadius", 8);
        let composition = compose(&props, &theme, &registry());

        let base: Vec<_> = composition.style.base().iter().collect();
        assert_eq!(
            base,
            [
                ("background-color", "tomato"),
                ("border-radius", "8px"),
                ("padding", "16px"),
            ]
        );
        assert!(composition.style.media_layers().next().is_none());
        assert!(composition.warnings.is_empty());
    }

    #[test]
    fn longhand_beats_shorthand() {
        let props = Props::new().set("mt", 1).set("m", 2).set("my", 3);
        let style = compose(&props, &Theme::default(), &registry()).style;
        assert_eq!(style.get(Slot::Base, "margin"), Some("8px"));
        assert_eq!(style.get(Slot::Base, "margin-top"), Some("4px"));
        assert_eq!(style.get(Slot::Base, "margin-bottom"), Some("16px"));
    }

    #[test]
    fn primary_name_shadows_alias() {
        let props = Props::new().set("bg", "red").set("backgroundColor", "blue");
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(
            composition.style.get(Slot::Base, "background-color"),
            Some("blue")
        );
        assert_eq!(
            composition.warnings,
            [ResolutionWarning::ShadowedAlias {
                prop: "backgroundColor".into(),
                alias: "bg".into(),
            }]
        );
    }

    #[test]
    fn malformed_prop_does_not_stop_others() {
        let props = Props::new()
            .set("p", true)
            .set("m", PropValue::Nested(json!({ "a": { "b": 1 } })))
            .set("color", "red");
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(composition.style.get(Slot::Base, "color"), Some("red"));
        assert_eq!(composition.style.get(Slot::Base, "padding"), None);
        assert_eq!(composition.warnings.len(), 2);
    }

    #[test]
    fn responsive_props_fill_media_layers() {
        let props = Props::new().set("width", PropValue::array([
            Some(Scalar::from(1)),
            Some(Scalar::from(0.5)),
            None,
            Some(Scalar::from(0.25)),
        ]));
        let style = compose(&props, &Theme::default(), &registry()).style;
        assert_eq!(style.get(Slot::Base, "width"), Some("100%"));
        assert_eq!(style.get(Slot::Media(0), "width"), Some("50%"));
        assert_eq!(style.get(Slot::Media(1), "width"), None);
        assert_eq!(style.get(Slot::Media(2), "width"), Some("25%"));
    }

    #[test]
    fn unknown_breakpoint_is_reported_once() {
        let props = Props::new()
            .set("p", PropValue::map([("_", Scalar::from(1)), ("xl", Scalar::from(2))]))
            .set("m", PropValue::map([("xl", Scalar::from(2)), ("md", Scalar::from(3))]));
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(
            composition.warnings,
            [ResolutionWarning::UnknownBreakpoint { key: "xl".into() }]
        );
        assert_eq!(composition.style.get(Slot::Base, "padding"), Some("4px"));
        assert_eq!(composition.style.get(Slot::Media(1), "margin"), Some("16px"));
    }

    #[test]
    fn variant_sits_below_props() {
        let theme = ThemeBuilder::defaults()
            .variant(
                DEFAULT_VARIANT_GROUP,
                "danger",
                StyleObject::new()
                    .set("color", "black")
                    .set("backgroundColor", "tomato"),
            )
            .build()
            .unwrap();
        let props = Props::new().set("variant", "danger").set("color", "red");
        let style = compose(&props, &theme, &registry()).style;
        assert_eq!(style.get(Slot::Base, "color"), Some("red"));
        assert_eq!(style.get(Slot::Base, "background-color"), Some("tomato"));
    }

    #[test]
    fn variant_keys_outside_registry_still_resolve() {
        let theme = ThemeBuilder::defaults()
            .variant(
                "text",
                "caps",
                StyleObject::new()
                    .set("fontSize", 2)
                    .set("textTransform", "uppercase")
                    .set("letterSpacing", 0.1),
            )
            .build()
            .unwrap();
        let composition = Composer::new(&registry())
            .variant_group("text")
            .compose(&Props::new().set("variant", "caps"), &theme);
        let style = composition.style;
        assert_eq!(style.get(Slot::Base, "font-size"), Some("16px"));
        assert_eq!(style.get(Slot::Base, "text-transform"), Some("uppercase"));
        assert_eq!(style.get(Slot::Base, "letter-spacing"), Some("0.1px"));
    }

    #[test]
    fn unknown_explicit_variant_warns() {
        let composition = Composer::new(&registry())
            .variant_group("buttons")
            .compose(&Props::new().set("variant", "ghost"), &Theme::default());
        assert!(composition.style.is_empty());
        assert_eq!(
            composition.warnings,
            [ResolutionWarning::UnknownVariant {
                group: "buttons".into(),
                variant: "ghost".into(),
            }]
        );
    }

    #[test]
    fn missing_default_variant_is_silent() {
        let registry = registry();
        let composer = Composer::new(&registry)
            .variant_group("buttons")
            .default_variant("primary");
        let composition = composer.compose(&Props::new().set("p", 1), &Theme::default());
        assert!(composition.warnings.is_empty());
        assert_eq!(composition.style.get(Slot::Base, "padding"), Some("4px"));
    }

    #[test]
    fn theme_prop_overrides_scales() {
        let overrides = ThemeDocument::from_json_value(json!({
            "space": [0, 10, 20],
            "colors": { "primary": "rebeccapurple" }
        }))
        .unwrap();
        let props = Props::new()
            .set("p", 2)
            .set("color", "primary")
            .set("theme", PropValue::Theme(overrides.into()));
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(composition.style.get(Slot::Base, "padding"), Some("20px"));
        assert_eq!(composition.style.get(Slot::Base, "color"), Some("rebeccapurple"));
        assert!(composition.warnings.is_empty());
    }

    #[test]
    fn invalid_theme_prop_falls_back_to_ambient() {
        let overrides =
            ThemeDocument::from_json_value(json!({ "breakpoints": ["52em", "40em"] })).unwrap();
        let props = Props::new()
            .set("p", 2)
            .set("theme", PropValue::Theme(overrides.into()));
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(composition.style.get(Slot::Base, "padding"), Some("8px"));
        assert!(matches!(
            composition.warnings.as_slice(),
            [ResolutionWarning::InvalidThemeOverride { .. }]
        ));
    }

    #[test]
    fn non_object_theme_prop_is_rejected() {
        let props = Props::new().set("theme", "dark");
        let composition = compose(&props, &Theme::default(), &registry());
        assert_eq!(
            composition.warnings,
            [ResolutionWarning::InvalidThemeOverride {
                reason: "expected a theme object, found string".into(),
            }]
        );
    }

    #[test]
    fn defaults_sit_below_variant() {
        let registry = registry();
        let defaults = StyleObject::new().set("color", "white").set("bg", "blue");
        let theme = ThemeBuilder::defaults()
            .variant("buttons", "outline", StyleObject::new().set("bg", "transparent"))
            .build()
            .unwrap();
        let composer = Composer::new(&registry)
            .defaults(&defaults)
            .variant_group("buttons");
        let style = composer
            .compose(&Props::new().set("variant", "outline"), &theme)
            .style;
        assert_eq!(style.get(Slot::Base, "color"), Some("white"));
        assert_eq!(style.get(Slot::Base, "background-color"), Some("transparent"));
    }
}
