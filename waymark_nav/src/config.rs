// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.
//!
//! [`NavConfig`] has defaults via [`Default`] and a fluent
//! [`NavConfig::builder()`] that validates on [`build`](NavConfigBuilder::build).
//! It also deserializes from JSON with missing fields defaulted.
//!
//! # Examples
//!
//! ```
//! use waymark_nav::{BackPolicy, NavConfig, WidthClass};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = NavConfig::builder()
//!     .back_policy(BackPolicy::PopLatest)
//!     .two_pane_min_width(WidthClass::Expanded)
//!     .build()?;
//! assert_eq!(cfg.back_policy, BackPolicy::PopLatest);
//!
//! let cfg = NavConfig::from_json(r#"{ "two_pane_placeholder": false }"#)?;
//! assert!(!cfg.two_pane_placeholder);
//! assert_eq!(cfg.two_pane_min_width, WidthClass::Medium);
//! # Ok(()) }
//! ```
//!
//! # Fields
//! - `back_policy`: how far one back action pops inside a list-detail scene
//!   (default: [`BackPolicy::PopUntilCurrentDestinationChange`]).
//! - `directive`: list-detail panes per width class (default: 1, 3, 3). Each
//!   must be in `1..=3` and must not shrink as the width grows.
//! - `two_pane_min_width`: narrowest width that pairs two-pane entries
//!   (default: [`WidthClass::Medium`]).
//! - `two_pane_placeholder`: pair a lone placeholder-eligible entry with a
//!   placeholder pane (default: `true`).

use serde::{Deserialize, Serialize};
use waymark_scene::{
    BackPolicy, ListDetailStrategy, PaneDirective, SceneSelector, TwoPaneStrategy, WidthClass,
};

/// Navigator configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Back policy for list-detail scenes.
    pub back_policy: BackPolicy,
    /// List-detail pane budget per width class.
    pub directive: PaneDirective,
    /// Narrowest width that shows two panes in the fallback strategy.
    pub two_pane_min_width: WidthClass,
    /// Pair lone placeholder-eligible entries with a placeholder.
    pub two_pane_placeholder: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            back_policy: BackPolicy::default(),
            directive: PaneDirective::default(),
            two_pane_min_width: WidthClass::Medium,
            two_pane_placeholder: true,
        }
    }
}

impl NavConfig {
    /// Start from the defaults.
    pub fn builder() -> NavConfigBuilder {
        NavConfigBuilder::default()
    }

    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the invariants documented on each field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.directive;
        for (width, panes) in [
            (WidthClass::Compact, d.compact),
            (WidthClass::Medium, d.medium),
            (WidthClass::Expanded, d.expanded),
        ] {
            if !(1..=PaneDirective::MAX_PANES).contains(&panes) {
                return Err(ConfigError::PaneCount { width, panes });
            }
        }
        if d.compact > d.medium || d.medium > d.expanded {
            return Err(ConfigError::ShrinkingDirective(d));
        }
        Ok(())
    }

    /// Scene selector configured from this config.
    pub fn selector(&self) -> SceneSelector {
        SceneSelector::new(
            ListDetailStrategy::new(self.directive),
            TwoPaneStrategy::new(self.two_pane_min_width, self.two_pane_placeholder),
        )
    }
}

/// Builder for [`NavConfig`].
#[derive(Clone, Debug, Default)]
pub struct NavConfigBuilder {
    inner: NavConfig,
}

impl NavConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut NavConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    /// Set the back policy.
    pub fn back_policy(self, policy: BackPolicy) -> Self {
        self.map(|c| c.back_policy = policy)
    }

    /// Set the list-detail pane budget per width class.
    pub fn directive(self, directive: PaneDirective) -> Self {
        self.map(|c| c.directive = directive)
    }

    /// Set the narrowest two-pane width.
    pub fn two_pane_min_width(self, width: WidthClass) -> Self {
        self.map(|c| c.two_pane_min_width = width)
    }

    /// Enable or disable two-pane placeholders.
    pub fn two_pane_placeholder(self, on: bool) -> Self {
        self.map(|c| c.two_pane_placeholder = on)
    }

    /// Validate and build the final config.
    pub fn build(self) -> Result<NavConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// Invalid [`NavConfig`] values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A pane count outside `1..=3`.
    #[error("pane count {panes} for {width:?} is outside 1..=3")]
    PaneCount {
        /// Width class the count applies to.
        width: WidthClass,
        /// Offending count.
        panes: u8,
    },
    /// Fewer panes on a wider window than on a narrower one.
    #[error("pane directive shrinks as width grows: {0:?}")]
    ShrinkingDirective(PaneDirective),
    /// The JSON text did not parse.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
