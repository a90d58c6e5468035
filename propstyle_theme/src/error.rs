// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme configuration errors.

use thiserror::Error;

/// Error returned when a theme is malformed.
///
/// These are raised when a theme is built or loaded, never while styles are
/// being composed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required scale is missing or has no entries.
    #[error("required scale `{scale}` is missing or empty")]
    EmptyScale {
        /// Name of the scale.
        scale: String,
    },
    /// A scale document is neither an array nor an object.
    #[error("scale `{scale}` must be an array or an object")]
    InvalidScale {
        /// Name of the scale.
        scale: String,
    },
    /// A variant entry is not a style object.
    #[error("variant `{group}.{variant}` must be a style object")]
    InvalidVariant {
        /// Name of the variant group.
        group: String,
        /// Name of the variant.
        variant: String,
    },
    /// A breakpoint threshold could not be parsed as a length.
    #[error("breakpoint `{value}` is not a length")]
    InvalidBreakpoint {
        /// The offending threshold.
        value: String,
    },
    /// Breakpoints are not strictly ascending.
    #[error("breakpoint `{next}` must be wider than `{previous}`")]
    BreakpointOrder {
        /// The earlier threshold.
        previous: String,
        /// The threshold that is not wider than `previous`.
        next: String,
    },
    /// Two adjacent breakpoints use different units and cannot be ordered.
    #[error("breakpoints `{previous}` and `{next}` use different units")]
    MixedBreakpointUnits {
        /// The earlier threshold.
        previous: String,
        /// The later threshold.
        next: String,
    },
    /// A scale, or a merge of scales, nests deeper than the limit.
    #[error("theme nesting exceeds {limit} levels")]
    NestingTooDeep {
        /// The nesting limit.
        limit: usize,
    },
    /// A theme document could not be parsed.
    #[error("invalid theme document: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scale_display() {
        let err = ConfigError::EmptyScale {
            scale: "space".into(),
        };
        assert_eq!(err.to_string(), "required scale `space` is missing or empty");
    }

    #[test]
    fn breakpoint_order_display() {
        let err = ConfigError::BreakpointOrder {
            previous: "52em".into(),
            next: "40em".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("40em"), "message names the later breakpoint");
        assert!(msg.contains("52em"), "message names the earlier breakpoint");
    }

    #[test]
    fn json_error_converts() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
