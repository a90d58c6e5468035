// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal resolution diagnostics.

/// A problem found while composing styles.
///
/// Warnings never abort composition: the offending prop (or responsive
/// entry) is skipped or passed through, and the rest of the declaration is
/// resolved as usual.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionWarning {
    /// A responsive map used a key that matches no breakpoint.
    #[error("unknown breakpoint `{key}`")]
    UnknownBreakpoint {
        /// The unmatched key.
        key: String,
    },
    /// A style prop had a value of the wrong shape or type.
    #[error("malformed value for `{prop}`: found {found}")]
    MalformedValue {
        /// The prop as written.
        prop: String,
        /// What was found instead of a usable value.
        found: &'static str,
    },
    /// A responsive array had more entries than the theme has breakpoints.
    #[error("`{prop}` has {count} responsive values but only {breakpoints} breakpoints")]
    ExtraResponsiveValue {
        /// The prop as written.
        prop: String,
        /// Number of array entries.
        count: usize,
        /// Number of theme breakpoints.
        breakpoints: usize,
    },
    /// A `variant` prop named a variant the theme does not define.
    #[error("unknown variant `{variant}` in group `{group}`")]
    UnknownVariant {
        /// The variant group searched.
        group: String,
        /// The requested variant.
        variant: String,
    },
    /// A `theme` prop could not be merged over the ambient theme.
    #[error("invalid theme override: {reason}")]
    InvalidThemeOverride {
        /// Why the override was rejected.
        reason: String,
    },
    /// Both a prop and one of its aliases were set; the alias was ignored.
    #[error("`{alias}` is ignored because `{prop}` is also set")]
    ShadowedAlias {
        /// The name that was used.
        prop: String,
        /// The alias that was ignored.
        alias: String,
    },
}

/// Collects warnings for one composition pass.
///
/// Each distinct warning is kept once and logged once through `tracing`.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<ResolutionWarning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning unless an identical one was already recorded.
    pub fn push(&mut self, warning: ResolutionWarning) {
        if self.warnings.contains(&warning) {
            return;
        }
        tracing::warn!(%warning, "style resolution warning");
        self.warnings.push(warning);
    }

    /// Returns the number of distinct warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Iterates warnings in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = &ResolutionWarning> + '_ {
        self.warnings.iter()
    }

    /// Returns the collected warnings.
    #[must_use]
    pub fn into_vec(self) -> Vec<ResolutionWarning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_reported_once() {
        let mut diagnostics = Diagnostics::new();
        for _ in 0..3 {
            diagnostics.push(ResolutionWarning::UnknownBreakpoint { key: "xl".into() });
        }
        diagnostics.push(ResolutionWarning::UnknownBreakpoint { key: "xxl".into() });
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn warnings_display() {
        let warning = ResolutionWarning::ShadowedAlias {
            prop: "backgroundColor".into(),
            alias: "bg".into(),
        };
        assert_eq!(
            warning.to_string(),
            "`bg` is ignored because `backgroundColor` is also set"
        );
        let warning = ResolutionWarning::MalformedValue {
            prop: "p".into(),
            found: "boolean",
        };
        assert_eq!(warning.to_string(), "malformed value for `p`: found boolean");
    }
}
