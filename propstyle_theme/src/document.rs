// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON theme documents.
//!
//! A [`ThemeDocument`] is the serialized form of a theme, used both to load
//! a full theme and as a partial override merged over an ambient theme.
//!
//! ```json
//! {
//!   "breakpoints": { "sm": "40em", "md": "52em" },
//!   "space": [0, 4, 8, 16, 32],
//!   "colors": { "primary": "#07c", "blue": ["#cdf", "#07c"] },
//!   "variants": { "buttons": { "primary": { "color": "white", "bg": "primary" } } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::breakpoint::Breakpoint;
use crate::error::ConfigError;
use crate::scale::{Scale, Token};
use crate::theme::VariantGroup;
use crate::value::StyleObject;

/// A breakpoint threshold as written in a document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// A width in pixels.
    Px(f64),
    /// A CSS length such as `40em`.
    Length(String),
}

/// The breakpoints of a document, positional or named.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BreakpointsDocument {
    /// Unnamed thresholds, which must already be ascending.
    List(Vec<Threshold>),
    /// Named thresholds, ordered by width.
    Named(BTreeMap<String, Threshold>),
}

/// A serialized, possibly partial, theme.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ThemeDocument {
    /// Breakpoints; replaces the ambient list when merged.
    #[serde(default)]
    pub breakpoints: Option<BreakpointsDocument>,
    /// Variant groups: group name → variant name → style object.
    #[serde(default)]
    pub variants: BTreeMap<String, BTreeMap<String, Value>>,
    /// Every other key is a scale.
    #[serde(flatten)]
    pub scales: BTreeMap<String, Value>,
}

impl ThemeDocument {
    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a document from a JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn to_breakpoints(&self) -> Result<Option<Vec<Breakpoint>>, ConfigError> {
        let Some(doc) = &self.breakpoints else {
            return Ok(None);
        };
        let breakpoints = match doc {
            BreakpointsDocument::List(thresholds) => thresholds
                .iter()
                .map(|t| to_breakpoint(None, t))
                .collect::<Result<Vec<_>, _>>()?,
            BreakpointsDocument::Named(named) => {
                let mut breakpoints = named
                    .iter()
                    .map(|(name, t)| to_breakpoint(Some(name), t))
                    .collect::<Result<Vec<_>, _>>()?;
                breakpoints.sort_by(|a, b| a.threshold().total_cmp(&b.threshold()));
                breakpoints
            }
        };
        Ok(Some(breakpoints))
    }

    pub(crate) fn to_scales(&self) -> Result<Vec<(String, Scale)>, ConfigError> {
        let mut scales = Vec::with_capacity(self.scales.len());
        for (name, value) in &self.scales {
            match Token::from_json(value, 1)? {
                Some(Token::Scale(scale)) => scales.push((name.clone(), scale)),
                None => {}
                Some(Token::Value(_)) => {
                    return Err(ConfigError::InvalidScale {
                        scale: name.clone(),
                    });
                }
            }
        }
        Ok(scales)
    }

    pub(crate) fn to_variant_groups(&self) -> Result<Vec<(String, VariantGroup)>, ConfigError> {
        let mut groups = Vec::with_capacity(self.variants.len());
        for (group, variants) in &self.variants {
            let mut variant_group = VariantGroup::new();
            for (variant, value) in variants {
                let object =
                    StyleObject::from_json(value).ok_or_else(|| ConfigError::InvalidVariant {
                        group: group.clone(),
                        variant: variant.clone(),
                    })?;
                variant_group.insert(variant.clone(), object);
            }
            groups.push((group.clone(), variant_group));
        }
        Ok(groups)
    }
}

fn to_breakpoint(name: Option<&String>, threshold: &Threshold) -> Result<Breakpoint, ConfigError> {
    let breakpoint = match threshold {
        Threshold::Px(width) => Breakpoint::px(*width),
        Threshold::Length(length) => Breakpoint::new(length.clone())?,
    };
    Ok(match name {
        Some(name) => Breakpoint::named(name.clone(), breakpoint.min_width())?,
        None => breakpoint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_known_keys_from_scales() {
        let doc = ThemeDocument::from_json_value(json!({
            "breakpoints": ["40em", "52em"],
            "space": [0, 4, 8],
            "colors": { "primary": "#07c" },
            "variants": { "buttons": { "primary": { "color": "white" } } }
        }))
        .unwrap();

        assert!(doc.breakpoints.is_some());
        assert_eq!(doc.scales.len(), 2);
        assert!(doc.scales.contains_key("space"));
        assert!(doc.scales.contains_key("colors"));
        assert_eq!(doc.variants.len(), 1);
    }

    #[test]
    fn named_breakpoints_sort_by_width() {
        let doc = ThemeDocument::from_json_value(json!({
            "breakpoints": { "lg": "64em", "sm": "40em", "md": "52em" }
        }))
        .unwrap();
        let breakpoints = doc.to_breakpoints().unwrap().unwrap();
        let names: Vec<_> = breakpoints.iter().filter_map(Breakpoint::name).collect();
        assert_eq!(names, ["sm", "md", "lg"]);
    }

    #[test]
    fn numeric_breakpoints_are_pixels() {
        let doc = ThemeDocument::from_json_value(json!({ "breakpoints": [640, 832] })).unwrap();
        let breakpoints = doc.to_breakpoints().unwrap().unwrap();
        assert_eq!(breakpoints[0].min_width(), "640px");
        assert_eq!(breakpoints[1].min_width(), "832px");
    }

    #[test]
    fn scalar_scale_is_rejected() {
        let doc = ThemeDocument::from_json_value(json!({ "space": 4 })).unwrap();
        assert!(matches!(
            doc.to_scales(),
            Err(ConfigError::InvalidScale { scale }) if scale == "space"
        ));
    }

    #[test]
    fn non_object_variant_is_rejected() {
        let doc = ThemeDocument::from_json_value(json!({
            "variants": { "buttons": { "primary": "blue" } }
        }))
        .unwrap();
        assert!(matches!(
            doc.to_variant_groups(),
            Err(ConfigError::InvalidVariant { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            ThemeDocument::from_json_str("{ \"space\": "),
            Err(ConfigError::Json(_))
        ));
    }
}
