// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in primitives.

use std::sync::LazyLock;

use propstyle::{PropRegistry, Props, specs};
use propstyle_theme::{StyleObject, Theme};

use crate::decl::ComponentDecl;
use crate::element::Element;

/// A built-in primitive component.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// A `div` with space, color, layout, font size, and flex item props.
    Box,
    /// A `Box` with `display: flex` and flex container props.
    Flex,
    /// A `Box` with typography props.
    Text,
    /// An `h2` `Text` with a large bold default.
    Heading,
    /// A `button` with border and shadow props and a `primary` default
    /// variant from the `buttons` group.
    Button,
    /// An `a` colored blue by default.
    Link,
    /// An `img` that never overflows its container.
    Image,
    /// A `Box` with border, shadow, and background props, styled from the
    /// `cards` group.
    Card,
}

impl Component {
    /// Every primitive.
    pub const ALL: [Self; 8] = [
        Self::Box,
        Self::Flex,
        Self::Text,
        Self::Heading,
        Self::Button,
        Self::Link,
        Self::Image,
        Self::Card,
    ];

    /// Returns the declaration.
    #[must_use]
    pub fn decl(self) -> &'static ComponentDecl {
        match self {
            Self::Box => &BOX,
            Self::Flex => &FLEX,
            Self::Text => &TEXT,
            Self::Heading => &HEADING,
            Self::Button => &BUTTON,
            Self::Link => &LINK,
            Self::Image => &IMAGE,
            Self::Card => &CARD,
        }
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.decl().name()
    }

    /// Renders one instance.
    #[must_use]
    pub fn render(self, props: &Props, theme: &Theme) -> Element {
        self.decl().render(props, theme)
    }
}

fn box_registry() -> PropRegistry {
    PropRegistry::new()
        .with(specs::SPACE)
        .with(specs::LAYOUT)
        .with(&[specs::FONT_SIZE])
        .with(specs::COLOR)
        .with(specs::FLEX_ITEM)
}

fn text_registry() -> PropRegistry {
    box_registry().with(specs::TYPOGRAPHY)
}

static BOX: LazyLock<ComponentDecl> = LazyLock::new(|| ComponentDecl::new("Box", "div", box_registry()));

static FLEX: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new("Flex", "div", box_registry().with(specs::FLEX_CONTAINER))
        .defaults(StyleObject::new().set("display", "flex"))
});

static TEXT: LazyLock<ComponentDecl> =
    LazyLock::new(|| ComponentDecl::new("Text", "div", text_registry()).variant_group("text"));

static HEADING: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new("Heading", "h2", text_registry())
        .defaults(StyleObject::new().set("fontSize", 4).set("fontWeight", "bold"))
        .variant_group("text")
});

static BUTTON: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new(
        "Button",
        "button",
        box_registry().with(specs::BORDER).with(specs::SHADOW),
    )
    .defaults(
        StyleObject::new()
            .set("fontSize", "inherit")
            .set("fontWeight", "bold")
            .set("m", 0)
            .set("px", 3)
            .set("py", 2)
            .set("color", "white")
            .set("bg", "blue")
            .set("borderRadius", 4),
    )
    .variant_group("buttons")
    .default_variant("primary")
});

static LINK: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new("Link", "a", box_registry()).defaults(StyleObject::new().set("color", "blue"))
});

static IMAGE: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new("Image", "img", box_registry().with(specs::BORDER)).defaults(
        StyleObject::new()
            .set("maxWidth", "100%")
            .set("height", "auto"),
    )
});

static CARD: LazyLock<ComponentDecl> = LazyLock::new(|| {
    ComponentDecl::new(
        "Card",
        "div",
        box_registry()
            .with(specs::BORDER)
            .with(specs::SHADOW)
            .with(specs::BACKGROUND),
    )
    .variant_group("cards")
});

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle::PropClass;

    #[test]
    fn names_and_tags() {
        let tags: Vec<_> = Component::ALL
            .iter()
            .map(|c| (c.name(), c.decl().tag()))
            .collect();
        assert_eq!(
            tags,
            [
                ("Box", "div"),
                ("Flex", "div"),
                ("Text", "div"),
                ("Heading", "h2"),
                ("Button", "button"),
                ("Link", "a"),
                ("Image", "img"),
                ("Card", "div"),
            ]
        );
    }

    #[test]
    fn vocabularies() {
        let accepts = |c: Component, prop: &str| matches!(c.decl().classify(prop), PropClass::Style(_));
        assert!(accepts(Component::Box, "fontSize"));
        assert!(!accepts(Component::Box, "fontWeight"));
        assert!(accepts(Component::Text, "fontWeight"));
        assert!(accepts(Component::Flex, "alignItems"));
        assert!(!accepts(Component::Box, "alignItems"));
        assert!(accepts(Component::Button, "borderRadius"));
        assert!(accepts(Component::Card, "boxShadow"));
        assert!(accepts(Component::Card, "backgroundImage"));
        assert!(!accepts(Component::Link, "border"));
    }
}
