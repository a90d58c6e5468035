// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer interface.
//!
//! A [`StyleDeclaration`](crate::StyleDeclaration) is handed to a renderer
//! (typically a CSS-in-JS runtime) through [`StyleSink`]. This crate never
//! produces stylesheet text itself.

use propstyle_theme::Breakpoint;

/// Receives resolved style rules.
///
/// Rules arrive base layer first, then one group per breakpoint in ascending
/// threshold order. `media` is `None` for the base layer.
pub trait StyleSink {
    /// Receives one `property: value` pair.
    fn rule(&mut self, media: Option<&Breakpoint>, property: &str, value: &str);
}

/// A rule captured by the [`StyleSink`] implementation for `Vec<Rule>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Minimum width of the enclosing media query, e.g. `40em`.
    pub media: Option<String>,
    /// CSS property name.
    pub property: String,
    /// CSS value.
    pub value: String,
}

impl StyleSink for Vec<Rule> {
    fn rule(&mut self, media: Option<&Breakpoint>, property: &str, value: &str) {
        self.push(Rule {
            media: media.map(|b| b.min_width().to_owned()),
            property: property.to_owned(),
            value: value.to_owned(),
        });
    }
}
