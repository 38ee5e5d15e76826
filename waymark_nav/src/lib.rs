// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Nav: the app-facing navigator.
//!
//! ## Overview
//!
//! This crate wires [`waymark_stack`] and [`waymark_scene`] into one
//! [`Navigator`] for the app's [`Destination`]s:
//!
//! - a [`Registry`] of static role metadata per destination variant,
//! - a validated [`NavConfig`] (back policy, pane budgets, two-pane options),
//! - change notifications ([`NavEvent`]) for renderers,
//! - an explicit [`TransitionContext`] for render calls,
//! - JSON persistence of the back stack across process death.
//!
//! ## Example
//!
//! ```
//! use waymark_nav::{Destination, NavConfig, Navigator, Registry, WidthClass};
//!
//! let mut nav = Navigator::new(Destination::Home, Registry::app(), NavConfig::default());
//! nav.switch_section(Destination::Profile);
//! nav.open(Destination::ProfileDetail(7));
//! assert_eq!(
//!     nav.visible_stack(),
//!     &[Destination::Home, Destination::Profile, Destination::ProfileDetail(7)]
//! );
//!
//! let json = nav.save()?;
//! let restored = Navigator::restore(&json, Registry::app(), NavConfig::default())?;
//! assert_eq!(restored.visible_stack(), nav.visible_stack());
//!
//! nav.back(WidthClass::Compact)?;
//! nav.back(WidthClass::Compact)?;
//! assert_eq!(nav.visible_stack(), &[Destination::Home]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod destination;
mod error;
mod navigator;
mod observer;
mod registry;
mod transition;

pub use config::{ConfigError, NavConfig, NavConfigBuilder};
pub use destination::{Destination, DestinationCodec, StartRoute, TOP_LEVEL};
pub use error::{NavError, PersistError};
pub use navigator::Navigator;
pub use observer::{Direction, NavEvent, SubscriptionId};
pub use registry::Registry;
pub use transition::{BOTTOM_NAVIGATION, TransitionContext};

pub use waymark_scene::{BackPolicy, PaneDirective, Scene, WidthClass};
