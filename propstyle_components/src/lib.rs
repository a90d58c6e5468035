// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propstyle Components: primitive building blocks on top of `propstyle`.
//!
//! A [`ComponentDecl`] bundles a default tag, the style props a component
//! accepts, a default style, and the theme variant group it reads from.
//! Rendering one with a prop bag produces an [`Element`]: the tag (possibly
//! replaced by the `as` prop), the attributes to forward, and the resolved
//! [`StyleDeclaration`](propstyle::StyleDeclaration).
//!
//! [`Component`] names the built-in primitives: `Box`, `Flex`, `Text`,
//! `Heading`, `Button`, `Link`, `Image`, and `Card`.
//!
//! ## Example
//!
//! ```rust
//! use propstyle::{Props, Slot};
//! use propstyle_components::Component;
//! use propstyle_theme::Theme;
//!
//! let element = Component::Button.render(
//!     &Props::new().set("mr", 3).set("onClick", "save"),
//!     &Theme::default(),
//! );
//!
//! assert_eq!(element.tag, "button");
//! assert_eq!(element.style.get(Slot::Base, "margin-right"), Some("16px"));
//! assert_eq!(element.style.get(Slot::Base, "background-color"), Some("blue"));
//! assert!(element.has_attribute("onClick"));
//! ```

mod catalog;
mod decl;
mod element;

pub use catalog::Component;
pub use decl::{AS_PROP, ComponentDecl};
pub use element::Element;
