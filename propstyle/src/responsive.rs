// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive value expansion.

use propstyle_theme::{Breakpoint, PropValue, Scalar};
use smallvec::SmallVec;

use crate::declaration::Slot;
use crate::diagnostics::{Diagnostics, ResolutionWarning};

/// Map keys that address the base layer.
pub const BASE_KEYS: [&str; 2] = ["_", "default"];

/// A prop value split into its base and per-breakpoint parts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expanded<'a> {
    /// The value applying with no media query.
    pub base: Option<&'a Scalar>,
    /// Values keyed by breakpoint index, ascending.
    pub per_breakpoint: SmallVec<[(usize, &'a Scalar); 4]>,
}

impl<'a> Expanded<'a> {
    /// Returns `true` if no layer receives a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.per_breakpoint.is_empty()
    }

    /// Iterates `(slot, value)` pairs, base first.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, &'a Scalar)> + '_ {
        self.base
            .map(|scalar| (Slot::Base, scalar))
            .into_iter()
            .chain(
                self.per_breakpoint
                    .iter()
                    .map(|&(index, scalar)| (Slot::Media(index), scalar)),
            )
    }
}

/// Expands a prop value against the theme's breakpoints.
///
/// - A scalar becomes the base value.
/// - An array maps index 0 to the base and index `i` to breakpoint `i - 1`;
///   `None` entries are skipped.
/// - A map uses `_` or `default` for the base and breakpoint names or
///   thresholds for the rest.
///
/// Unknown map keys and surplus array entries are dropped with a warning.
/// Values that are not responsive at all (nested objects, theme documents)
/// yield `None` and a [`ResolutionWarning::MalformedValue`].
///
/// # Example
///
/// ```rust
/// use propstyle::{Diagnostics, expand};
/// use propstyle_theme::{Breakpoint, PropValue, Scalar};
///
/// let breakpoints = [Breakpoint::new("40em").unwrap()];
/// let value = PropValue::array([Some(Scalar::from(1)), Some(Scalar::from(2))]);
/// let mut diagnostics = Diagnostics::new();
///
/// let expanded = expand("p", &value, &breakpoints, &mut diagnostics).unwrap();
/// assert_eq!(expanded.base, Some(&Scalar::from(1)));
/// assert_eq!(expanded.per_breakpoint.as_slice(), &[(0, &Scalar::from(2))]);
/// ```
pub fn expand<'a>(
    prop: &str,
    value: &'a PropValue,
    breakpoints: &[Breakpoint],
    diagnostics: &mut Diagnostics,
) -> Option<Expanded<'a>> {
    let mut expanded = Expanded::default();
    match value {
        PropValue::Scalar(scalar) => expanded.base = Some(scalar),
        PropValue::Array(values) => {
            let mut slots = values.iter();
            expanded.base = slots.next().and_then(Option::as_ref);
            for (index, slot) in slots.enumerate() {
                if index >= breakpoints.len() {
                    if slot.is_some() {
                        diagnostics.push(ResolutionWarning::ExtraResponsiveValue {
                            prop: prop.to_owned(),
                            count: values.len(),
                            breakpoints: breakpoints.len(),
                        });
                    }
                    continue;
                }
                if let Some(scalar) = slot {
                    expanded.per_breakpoint.push((index, scalar));
                }
            }
        }
        PropValue::Map(entries) => {
            for (key, scalar) in entries {
                if BASE_KEYS.contains(&key.as_str()) {
                    expanded.base = Some(scalar);
                } else if let Some(index) = breakpoints.iter().position(|b| b.matches_key(key)) {
                    expanded.per_breakpoint.push((index, scalar));
                } else {
                    diagnostics.push(ResolutionWarning::UnknownBreakpoint { key: key.clone() });
                }
            }
            expanded.per_breakpoint.sort_by_key(|(index, _)| *index);
        }
        PropValue::Nested(_) | PropValue::Theme(_) => {
            diagnostics.push(ResolutionWarning::MalformedValue {
                prop: prop.to_owned(),
                found: value.kind(),
            });
            return None;
        }
    }
    Some(expanded)
}
