// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale resolution and unit coercion.
//!
//! [`resolve`] turns one raw scalar into a CSS value string: a transform
//! gets the first chance, then the scale is consulted, then the unit policy
//! formats whatever came out. Unknown tokens pass through verbatim.

use propstyle_theme::{Scalar, Scale, format_number};

/// A custom value transform.
///
/// Returning `Some` fully resolves the value; returning `None` hands it on to
/// scale lookup and unit formatting.
pub type Transform = fn(&Scalar, Option<&Scale>) -> Option<String>;

/// How bare numbers are written out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    /// Numbers are written as-is, e.g. `font-weight: 700`.
    #[default]
    None,
    /// Numbers are pixel lengths, e.g. `16px`. Zero stays unitless.
    Px,
}

impl Unit {
    /// Formats a resolved scalar.
    #[must_use]
    pub fn format(self, value: &Scalar) -> String {
        match (self, value) {
            (Self::Px, Scalar::Number(n)) if *n != 0.0 => format!("{}px", format_number(*n)),
            _ => value.to_string(),
        }
    }
}

/// Resolves a raw value to a CSS value.
///
/// Returns `None` for booleans, which are never valid style values.
///
/// # Example
///
/// ```rust
/// use propstyle::{Unit, resolve};
/// use propstyle_theme::{Scalar, Scale};
///
/// let space = Scale::ordered([0, 4, 8, 16, 32]);
/// assert_eq!(resolve(&Scalar::from(3), Some(&space), None, Unit::Px).as_deref(), Some("16px"));
/// assert_eq!(resolve(&Scalar::from(64), Some(&space), None, Unit::Px).as_deref(), Some("64px"));
/// assert_eq!(resolve(&Scalar::from("auto"), Some(&space), None, Unit::Px).as_deref(), Some("auto"));
/// ```
#[must_use]
pub fn resolve(
    value: &Scalar,
    scale: Option<&Scale>,
    transform: Option<Transform>,
    unit: Unit,
) -> Option<String> {
    if matches!(value, Scalar::Bool(_)) {
        return None;
    }
    if let Some(transform) = transform
        && let Some(resolved) = transform(value, scale)
    {
        return Some(resolved);
    }
    Some(unit.format(lookup(value, scale)))
}

fn lookup<'a>(value: &'a Scalar, scale: Option<&'a Scale>) -> &'a Scalar {
    let Some(scale) = scale else {
        return value;
    };
    scale.lookup(value).unwrap_or_else(|| {
        tracing::trace!(%value, "no scale entry; passing value through");
        value
    })
}

/// Renders numbers in `0..=1` as percentages.
///
/// Used by width and height props, so `width: 1/2` becomes `50%`.
#[must_use]
pub fn fraction(value: &Scalar, _scale: Option<&Scale>) -> Option<String> {
    let n = value.as_number()?;
    (0.0..=1.0)
        .contains(&n)
        .then(|| format!("{}%", format_number(n * 100.0)))
}

/// Resolves negative numbers against the space scale, keeping the sign.
///
/// `-3` looks up index 3 and negates the result. Values the scale does not
/// cover fall through to the default path.
#[must_use]
pub fn negative_space(value: &Scalar, scale: Option<&Scale>) -> Option<String> {
    let n = value.as_number()?;
    if n >= 0.0 {
        return None;
    }
    let resolved = scale?.lookup(&Scalar::Number(-n))?;
    match resolved {
        Scalar::Number(m) => Some(Unit::Px.format(&Scalar::Number(-m))),
        Scalar::Str(s) => Some(match s.strip_prefix('-') {
            Some(positive) => positive.to_owned(),
            None => format!("-{s}"),
        }),
        Scalar::Bool(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> Scale {
        Scale::ordered([0, 4, 8, 16, 32])
    }

    fn px(value: impl Into<Scalar>, scale: Option<&Scale>) -> Option<String> {
        resolve(&value.into(), scale, None, Unit::Px)
    }

    #[test]
    fn index_lookup() {
        let space = space();
        assert_eq!(px(0, Some(&space)).as_deref(), Some("0"));
        assert_eq!(px(2, Some(&space)).as_deref(), Some("8px"));
        assert_eq!(px(4, Some(&space)).as_deref(), Some("32px"));
    }

    #[test]
    fn out_of_range_passes_through_as_pixels() {
        let space = space();
        assert_eq!(px(5, Some(&space)).as_deref(), Some("5px"));
        assert_eq!(px(1.5, Some(&space)).as_deref(), Some("1.5px"));
        assert_eq!(px(100, None).as_deref(), Some("100px"));
    }

    #[test]
    fn unknown_tokens_pass_through_verbatim() {
        let colors = Scale::keyed([("primary", "#07c")]);
        let resolve_color = |v: &str| resolve(&Scalar::from(v), Some(&colors), None, Unit::None);
        assert_eq!(resolve_color("primary").as_deref(), Some("#07c"));
        assert_eq!(resolve_color("tomato").as_deref(), Some("tomato"));
    }

    #[test]
    fn unit_none_prints_bare_numbers() {
        assert_eq!(
            resolve(&Scalar::from(700), None, None, Unit::None).as_deref(),
            Some("700")
        );
        assert_eq!(
            resolve(&Scalar::from(1.25), None, None, Unit::None).as_deref(),
            Some("1.25")
        );
    }

    #[test]
    fn booleans_do_not_resolve() {
        assert_eq!(px(true, Some(&space())), None);
    }

    #[test]
    fn fraction_transform() {
        let width = |v: f64| resolve(&Scalar::from(v), None, Some(fraction), Unit::Px);
        assert_eq!(width(0.5).as_deref(), Some("50%"));
        assert_eq!(width(1.0).as_deref(), Some("100%"));
        assert_eq!(width(0.0).as_deref(), Some("0%"));
        assert_eq!(width(2.0).as_deref(), Some("2px"));
        assert_eq!(width(256.0).as_deref(), Some("256px"));
    }

    #[test]
    fn fraction_runs_before_scale_lookup() {
        let sizes = Scale::ordered(["10em", "20em"]);
        let width = |v: f64| resolve(&Scalar::from(v), Some(&sizes), Some(fraction), Unit::Px);
        assert_eq!(width(1.0).as_deref(), Some("100%"));
        assert_eq!(width(1.0 / 4.0).as_deref(), Some("25%"));
    }

    #[test]
    fn negative_space_keeps_sign() {
        let space = space();
        let margin = |v: i32| resolve(&Scalar::from(v), Some(&space), Some(negative_space), Unit::Px);
        assert_eq!(margin(-3).as_deref(), Some("-16px"));
        assert_eq!(margin(-1).as_deref(), Some("-4px"));
        assert_eq!(margin(3).as_deref(), Some("16px"));
        assert_eq!(margin(-9).as_deref(), Some("-9px"));
    }

    #[test]
    fn negative_space_with_string_entries() {
        let space = Scale::ordered(["0", "0.25rem", "0.5rem"]);
        assert_eq!(
            negative_space(&Scalar::from(-2), Some(&space)).as_deref(),
            Some("-0.5rem")
        );
    }
}
