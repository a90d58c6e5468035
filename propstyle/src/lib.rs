// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propstyle: resolve style props against a theme.
//!
//! Components describe their look with a flat bag of props such as
//! `p={3}`, `bg="primary"`, or `width={[1, 1/2]}`. This crate turns such a
//! bag, plus a [`Theme`], into a [`StyleDeclaration`]: CSS properties for the
//! base layer and one override layer per breakpoint.
//!
//! The pieces, leaf first:
//!
//! - [`resolve`]: one scalar through a transform, a theme scale, and a
//!   [`Unit`] policy.
//! - [`expand`]: a responsive array or map split across breakpoints.
//! - [`PropSpec`] and [`PropRegistry`]: which props exist, what CSS they
//!   write, and which scale they read. [`specs`] has the built-in
//!   vocabularies.
//! - [`Composer`]: one full pass, folding component defaults, the selected
//!   variant, and explicit props in [`Layer`] order.
//!
//! ## Example
//!
//! ```rust
//! use propstyle::{PropRegistry, Props, Slot, compose, specs};
//! use propstyle_theme::{PropValue, Scalar, Theme};
//!
//! let registry = PropRegistry::new()
//!     .with(specs::SPACE)
//!     .with(specs::COLOR)
//!     .with(specs::LAYOUT);
//!
//! let props = Props::new()
//!     .set("p", 3)
//!     .set("bg", "tomato")
//!     .set("width", PropValue::array([Some(Scalar::from(1)), Some(Scalar::from(0.5))]));
//!
//! let composition = compose(&props, &Theme::default(), &registry);
//! let style = &composition.style;
//!
//! assert_eq!(style.get(Slot::Base, "padding"), Some("16px"));
//! assert_eq!(style.get(Slot::Base, "background-color"), Some("tomato"));
//! assert_eq!(style.get(Slot::Base, "width"), Some("100%"));
//! assert_eq!(style.get(Slot::Media(0), "width"), Some("50%"));
//! ```
//!
//! Composition never fails. Bad values are skipped and reported as
//! [`ResolutionWarning`]s, which are also logged through `tracing`.
//! Rendering the declaration into stylesheet text is left to a
//! [`StyleSink`].

mod compose;
mod declaration;
mod diagnostics;
mod merge;
mod props;
mod registry;
mod resolve;
mod responsive;
mod sink;

pub mod specs;

pub use compose::{Composer, Composition, DEFAULT_VARIANT_GROUP, VARIANT_PROP, compose};
pub use declaration::{Declarations, Slot, StyleDeclaration};
pub use diagnostics::{Diagnostics, ResolutionWarning};
pub use merge::{Layer, LayerStack};
pub use props::{Props, THEME_PROP};
pub use registry::{PropClass, PropRegistry, PropSpec, RESERVED_PROPS};
pub use resolve::{Transform, Unit, fraction, negative_space, resolve};
pub use responsive::{BASE_KEYS, Expanded, expand};
pub use sink::{Rule, StyleSink};

pub use propstyle_theme::Theme;
