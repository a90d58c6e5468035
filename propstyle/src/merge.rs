// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant merge policy.
//!
//! Composition resolves up to three sources into separate declarations and
//! folds them in [`Layer`] order. A higher layer only overwrites the
//! (property, breakpoint) slots it actually sets.

use crate::declaration::StyleDeclaration;

/// A style source, in ascending precedence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// The component's default style object.
    Defaults = 0,
    /// The matched theme variant.
    Variant = 1,
    /// Explicit style props.
    Props = 2,
}

/// Resolved layers waiting to be folded together.
///
/// # Example
///
/// ```rust
/// use propstyle::{Layer, LayerStack, Slot, StyleDeclaration};
///
/// let mut variant = StyleDeclaration::new();
/// variant.set(Slot::Base, "color", "black");
/// variant.set(Slot::Base, "background-color", "tomato");
///
/// let mut props = StyleDeclaration::new();
/// props.set(Slot::Base, "color", "red");
///
/// let mut stack = LayerStack::new();
/// stack.push(Layer::Props, props);
/// stack.push(Layer::Variant, variant);
///
/// let style = stack.flatten();
/// assert_eq!(style.get(Slot::Base, "color"), Some("red"));
/// assert_eq!(style.get(Slot::Base, "background-color"), Some("tomato"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    layers: Vec<(Layer, StyleDeclaration)>,
}

impl LayerStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolved layer. Layers may be pushed in any order; within one
    /// [`Layer`] kind, later pushes win.
    pub fn push(&mut self, layer: Layer, declaration: StyleDeclaration) {
        self.layers.push((layer, declaration));
    }

    /// Returns the number of pushed layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if nothing was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Folds all layers, lowest precedence first.
    #[must_use]
    pub fn flatten(mut self) -> StyleDeclaration {
        self.layers.sort_by_key(|(layer, _)| *layer);
        let mut layers = self.layers.into_iter();
        let Some((_, mut result)) = layers.next() else {
            return StyleDeclaration::new();
        };
        for (_, declaration) in layers {
            result.merge(&declaration);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::Slot;

    fn declaration(entries: &[(Slot, &'static str, &str)]) -> StyleDeclaration {
        let mut declaration = StyleDeclaration::new();
        for (slot, property, value) in entries {
            declaration.set(*slot, *property, *value);
        }
        declaration
    }

    #[test]
    fn empty_stack_is_empty_declaration() {
        assert!(LayerStack::new().flatten().is_empty());
    }

    #[test]
    fn layers_fold_in_precedence_order() {
        let mut stack = LayerStack::new();
        stack.push(
            Layer::Props,
            declaration(&[(Slot::Base, "padding", "32px")]),
        );
        stack.push(
            Layer::Defaults,
            declaration(&[
                (Slot::Base, "padding", "8px"),
                (Slot::Base, "margin", "0"),
                (Slot::Media(0), "padding", "16px"),
            ]),
        );
        stack.push(
            Layer::Variant,
            declaration(&[(Slot::Base, "padding", "12px"), (Slot::Base, "margin", "4px")]),
        );
        assert_eq!(stack.len(), 3);

        let style = stack.flatten();
        assert_eq!(style.get(Slot::Base, "padding"), Some("32px"));
        assert_eq!(style.get(Slot::Base, "margin"), Some("4px"));
        assert_eq!(style.get(Slot::Media(0), "padding"), Some("16px"));
    }

    #[test]
    fn same_layer_later_push_wins() {
        let mut stack = LayerStack::new();
        stack.push(Layer::Variant, declaration(&[(Slot::Base, "color", "a")]));
        stack.push(Layer::Variant, declaration(&[(Slot::Base, "color", "b")]));
        assert_eq!(stack.flatten().get(Slot::Base, "color"), Some("b"));
    }

    #[test]
    fn layer_ordering() {
        assert!(Layer::Defaults < Layer::Variant);
        assert!(Layer::Variant < Layer::Props);
    }
}
