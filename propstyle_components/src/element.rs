// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendered elements.

use propstyle::{Props, ResolutionWarning, StyleDeclaration};

/// A component rendered down to what a host UI framework needs: a tag, the
/// attributes to forward, and a declaration for the stylesheet renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// The element tag, e.g. `div`.
    pub tag: String,
    /// Props forwarded verbatim as element attributes.
    pub attributes: Props,
    /// The resolved style.
    pub style: StyleDeclaration,
    /// Warnings from rendering and composition.
    pub warnings: Vec<ResolutionWarning>,
}

impl Element {
    /// Returns `true` if an attribute with this name is forwarded.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }
}
