// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component declarations.

use propstyle::{
    Composer, DEFAULT_VARIANT_GROUP, Diagnostics, PropClass, PropRegistry, Props,
    ResolutionWarning,
};
use propstyle_theme::{PropValue, Scalar, StyleObject, Theme};

use crate::element::Element;

/// The prop overriding the element tag.
pub const AS_PROP: &str = "as";

/// Static configuration of one component: its tag, the style props it
/// accepts, its default style, and where its variants live in the theme.
///
/// # Example
///
/// ```rust
/// use propstyle::{PropRegistry, Props, Slot, specs};
/// use propstyle_components::ComponentDecl;
/// use propstyle_theme::{StyleObject, Theme};
///
/// let badge = ComponentDecl::new("Badge", "span", PropRegistry::new().with(specs::SPACE))
///     .defaults(StyleObject::new().set("px", 2).set("borderRadius", 9999))
///     .variant_group("badges");
///
/// let element = badge.render(&Props::new().set("mx", 1).set("title", "New"), &Theme::default());
/// assert_eq!(element.tag, "span");
/// assert_eq!(element.style.get(Slot::Base, "padding-left"), Some("8px"));
/// assert_eq!(element.style.get(Slot::Base, "border-radius"), Some("9999px"));
/// assert!(element.has_attribute("title"));
/// ```
#[derive(Clone, Debug)]
pub struct ComponentDecl {
    name: &'static str,
    tag: &'static str,
    registry: PropRegistry,
    defaults: StyleObject,
    variant_group: &'static str,
    default_variant: Option<&'static str>,
}

impl ComponentDecl {
    /// Creates a declaration with no defaults and the default variant group.
    #[must_use]
    pub fn new(name: &'static str, tag: &'static str, registry: PropRegistry) -> Self {
        Self {
            name,
            tag,
            registry,
            defaults: StyleObject::new(),
            variant_group: DEFAULT_VARIANT_GROUP,
            default_variant: None,
        }
    }

    /// Sets the default style.
    #[must_use]
    pub fn defaults(mut self, defaults: StyleObject) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the theme variant group.
    #[must_use]
    pub fn variant_group(mut self, group: &'static str) -> Self {
        self.variant_group = group;
        self
    }

    /// Sets the variant applied when no `variant` prop is given.
    #[must_use]
    pub fn default_variant(mut self, name: &'static str) -> Self {
        self.default_variant = Some(name);
        self
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the default element tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the accepted style props.
    #[must_use]
    pub fn registry(&self) -> &PropRegistry {
        &self.registry
    }

    /// Returns the default style.
    #[must_use]
    pub fn default_style(&self) -> &StyleObject {
        &self.defaults
    }

    /// Returns a composer configured for this component.
    #[must_use]
    pub fn composer(&self) -> Composer<'_> {
        let composer = Composer::new(&self.registry)
            .defaults(&self.defaults)
            .variant_group(self.variant_group);
        match self.default_variant {
            Some(name) => composer.default_variant(name),
            None => composer,
        }
    }

    /// Classifies a prop for this component.
    #[must_use]
    pub fn classify(&self, name: &str) -> PropClass<'_> {
        self.registry.classify(name)
    }

    /// Renders one instance.
    ///
    /// Style props go through composition, attribute props are forwarded,
    /// and style props this component does not accept are dropped.
    #[must_use]
    pub fn render(&self, props: &Props, theme: &Theme) -> Element {
        let mut diagnostics = Diagnostics::new();
        let style = self.composer().compose_into(props, theme, &mut diagnostics);

        let tag = match props.get(AS_PROP) {
            None => self.tag.to_owned(),
            Some(PropValue::Scalar(Scalar::Str(tag))) => tag.clone(),
            Some(other) => {
                diagnostics.push(ResolutionWarning::MalformedValue {
                    prop: AS_PROP.into(),
                    found: other.kind(),
                });
                self.tag.to_owned()
            }
        };

        let mut attributes = Props::new();
        for (key, value) in props.iter() {
            match self.registry.classify(key) {
                PropClass::Attribute => attributes.insert(key, value.clone()),
                PropClass::Filtered => {
                    tracing::debug!(component = self.name, prop = key, "dropping unsupported style prop");
                }
                PropClass::Reserved | PropClass::Style(_) => {}
            }
        }

        Element {
            tag,
            attributes,
            style,
            warnings: diagnostics.into_vec(),
        }
    }
}
