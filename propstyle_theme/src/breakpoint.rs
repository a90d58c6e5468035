// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport breakpoints.

use crate::error::ConfigError;
use crate::value::format_number;

/// A minimum viewport width at which a media-query style layer activates.
///
/// # Example
///
/// ```rust
/// use propstyle_theme::Breakpoint;
///
/// let md = Breakpoint::named("md", "52em").unwrap();
/// assert_eq!(md.threshold(), 52.0);
/// assert_eq!(md.unit(), "em");
/// assert_eq!(md.media_query(), "@media screen and (min-width: 52em)");
/// assert!(md.matches_key("md"));
/// assert!(md.matches_key("52em"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoint {
    name: Option<String>,
    min_width: String,
    threshold: f64,
    unit: String,
}

impl Breakpoint {
    /// Creates an unnamed breakpoint from a CSS length such as `40em`.
    pub fn new(min_width: impl Into<String>) -> Result<Self, ConfigError> {
        let min_width = min_width.into();
        let (threshold, unit) =
            parse_length(&min_width).ok_or_else(|| ConfigError::InvalidBreakpoint {
                value: min_width.clone(),
            })?;
        Ok(Self {
            name: None,
            min_width,
            threshold,
            unit,
        })
    }

    /// Creates a named breakpoint from a CSS length such as `40em`.
    pub fn named(name: impl Into<String>, min_width: impl Into<String>) -> Result<Self, ConfigError> {
        let mut breakpoint = Self::new(min_width)?;
        breakpoint.name = Some(name.into());
        Ok(breakpoint)
    }

    /// Creates an unnamed breakpoint from a width in pixels.
    #[must_use]
    pub fn px(width: f64) -> Self {
        Self {
            name: None,
            min_width: format!("{}px", format_number(width)),
            threshold: width,
            unit: "px".into(),
        }
    }

    pub(crate) fn em(name: &str, width: f64) -> Self {
        Self {
            name: Some(name.into()),
            min_width: format!("{}em", format_number(width)),
            threshold: width,
            unit: "em".into(),
        }
    }

    /// Returns the alias of this breakpoint, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the threshold as written, e.g. `40em`.
    #[must_use]
    pub fn min_width(&self) -> &str {
        &self.min_width
    }

    /// Returns the numeric part of the threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the unit of the threshold, e.g. `em`.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns `true` if a responsive map key addresses this breakpoint,
    /// either by name or by threshold.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.name.as_deref() == Some(key) || self.min_width == key
    }

    /// Returns the media query prelude for this breakpoint.
    #[must_use]
    pub fn media_query(&self) -> String {
        format!("@media screen and (min-width: {})", self.min_width)
    }
}

/// Splits a CSS length into number and unit.
fn parse_length(raw: &str) -> Option<(f64, String)> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return None;
    }
    Some((value, unit.to_ascii_lowercase()))
}

/// Checks that breakpoints are strictly ascending in a single unit.
pub(crate) fn check_ascending(breakpoints: &[Breakpoint]) -> Result<(), ConfigError> {
    for pair in breakpoints.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.unit != next.unit {
            return Err(ConfigError::MixedBreakpointUnits {
                previous: previous.min_width.clone(),
                next: next.min_width.clone(),
            });
        }
        if next.threshold <= previous.threshold {
            return Err(ConfigError::BreakpointOrder {
                previous: previous.min_width.clone(),
                next: next.min_width.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lengths() {
        let bp = Breakpoint::new("40em").unwrap();
        assert_eq!(bp.threshold(), 40.0);
        assert_eq!(bp.unit(), "em");
        assert_eq!(bp.name(), None);

        let bp = Breakpoint::new(" 37.5rem ").unwrap();
        assert_eq!(bp.threshold(), 37.5);
        assert_eq!(bp.unit(), "rem");
    }

    #[test]
    fn rejects_non_lengths() {
        assert!(matches!(
            Breakpoint::new("wide"),
            Err(ConfigError::InvalidBreakpoint { .. })
        ));
        assert!(Breakpoint::new("40 em").is_err());
        assert!(Breakpoint::new("").is_err());
    }

    #[test]
    fn px_breakpoints() {
        let bp = Breakpoint::px(640.0);
        assert_eq!(bp.min_width(), "640px");
        assert!(bp.matches_key("640px"));
    }

    #[test]
    fn ascending_check() {
        let ok = [Breakpoint::new("40em").unwrap(), Breakpoint::new("52em").unwrap()];
        assert!(check_ascending(&ok).is_ok());

        let equal = [Breakpoint::new("40em").unwrap(), Breakpoint::new("40em").unwrap()];
        assert!(matches!(
            check_ascending(&equal),
            Err(ConfigError::BreakpointOrder { .. })
        ));

        let mixed = [Breakpoint::new("40em").unwrap(), Breakpoint::px(800.0)];
        assert!(matches!(
            check_ascending(&mixed),
            Err(ConfigError::MixedBreakpointUnits { .. })
        ));
    }
}
