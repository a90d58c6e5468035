// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propstyle Theme: design tokens for style-prop resolution.
//!
//! This crate holds the passive data that `propstyle` resolves props
//! against:
//!
//! - [`Scale`]: an ordered or keyed table of tokens (spacing, font sizes,
//!   colors, radii, ...)
//! - [`Breakpoint`]: a minimum viewport width for responsive values
//! - [`VariantGroup`]: named style presets such as `buttons.primary`
//! - [`Theme`]: all of the above, immutable and cheap to share
//!
//! It also defines the value types found in prop bags ([`Scalar`],
//! [`PropValue`], [`StyleObject`]) and the JSON theme format
//! ([`ThemeDocument`]).
//!
//! ## Building a theme
//!
//! ```rust
//! use propstyle_theme::{Breakpoint, Scalar, Scale, ScaleKey, StyleObject, ThemeBuilder};
//!
//! let theme = ThemeBuilder::new()
//!     .scale(ScaleKey::SPACE, Scale::ordered([0, 4, 8, 16, 32]))
//!     .scale(ScaleKey::FONT_SIZES, Scale::ordered([12, 14, 16, 20, 24]))
//!     .scale(ScaleKey::COLORS, Scale::keyed([("primary", "#07c")]))
//!     .breakpoint(Breakpoint::named("sm", "40em").unwrap())
//!     .breakpoint(Breakpoint::named("md", "52em").unwrap())
//!     .variant("buttons", "primary", StyleObject::new().set("bg", "primary"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(theme.space().unwrap().lookup(&Scalar::from(2)), Some(&Scalar::from(8)));
//! assert_eq!(theme.breakpoint_index("md"), Some(1));
//! ```
//!
//! ## Loading a theme
//!
//! ```rust
//! use propstyle_theme::Theme;
//!
//! let theme = Theme::from_json_str(r##"{
//!     "breakpoints": ["40em", "52em", "64em"],
//!     "space": [0, 4, 8, 16, 32],
//!     "fontSizes": [12, 14, 16, 20, 24],
//!     "colors": { "blue": ["#cdf", "#07c", "#004"] }
//! }"##).unwrap();
//!
//! assert_eq!(theme.breakpoints().len(), 3);
//! ```
//!
//! Invalid themes fail with a [`ConfigError`] when built or loaded. The
//! default theme ([`Theme::default`]) is an ordinary value: nothing in this
//! workspace reads a global theme.

mod breakpoint;
mod document;
mod error;
mod scale;
mod theme;
mod value;

pub use breakpoint::Breakpoint;
pub use document::{BreakpointsDocument, ThemeDocument, Threshold};
pub use error::ConfigError;
pub use scale::{MAX_NESTING, Scale, ScaleKey, Token};
pub use theme::{Theme, ThemeBuilder, VariantGroup};
pub use value::{PropValue, Scalar, StyleObject, format_number};
