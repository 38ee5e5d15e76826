// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The app's destinations and their persisted string form.
//!
//! ## Encoding
//!
//! A payload-less destination encodes as its tag (`"Profile"`); a destination
//! with an id encodes as `"<Tag>:<id>"` (`"HomeDetail:482913"`). Decoding is
//! exhaustive at both ends: an unknown tag, a missing or unexpected payload,
//! or a non-integer payload is a [`DecodeError`].

use core::fmt;
use core::str::FromStr;

use waymark_stack::{DecodeError, KeyCodec};

/// A navigable screen.
///
/// Destinations are immutable identifiers compared by variant and payload.
/// Role metadata lives in the [`Registry`](crate::Registry), not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Destination {
    /// Home list; the start section when logged in.
    Home,
    /// One item picked from the home list.
    HomeDetail(i32),
    /// Supplementary information next to a home detail.
    HomeInfo,
    /// Further information, replacing [`HomeInfo`](Self::HomeInfo) in the extra pane.
    HomeMoreInfo,
    /// Profile section root.
    Profile,
    /// One item picked from the profile.
    ProfileDetail(i32),
    /// A dialog or sheet.
    Overlay,
    /// Login screen; the start section when logged out.
    Login,
    /// Shown until the login state is known.
    Loading,
}

/// Top-level sections offered by the bottom bar, in display order.
pub const TOP_LEVEL: [Destination; 2] = [Destination::Home, Destination::Profile];

impl Destination {
    /// Every payload-less destination, plus one representative of each payload variant.
    pub const SAMPLES: [Self; 9] = [
        Self::Home,
        Self::HomeDetail(0),
        Self::HomeInfo,
        Self::HomeMoreInfo,
        Self::Profile,
        Self::ProfileDetail(0),
        Self::Overlay,
        Self::Login,
        Self::Loading,
    ];

    /// Variant tag used in the persisted form.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::HomeDetail(_) => "HomeDetail",
            Self::HomeInfo => "HomeInfo",
            Self::HomeMoreInfo => "HomeMoreInfo",
            Self::Profile => "Profile",
            Self::ProfileDetail(_) => "ProfileDetail",
            Self::Overlay => "Overlay",
            Self::Login => "Login",
            Self::Loading => "Loading",
        }
    }

    /// Integer payload, for the variants that carry one.
    pub fn payload(&self) -> Option<i32> {
        match self {
            Self::HomeDetail(id) | Self::ProfileDetail(id) => Some(*id),
            Self::Home
            | Self::HomeInfo
            | Self::HomeMoreInfo
            | Self::Profile
            | Self::Overlay
            | Self::Login
            | Self::Loading => None,
        }
    }

    /// Returns `true` for sections offered by the bottom bar.
    pub fn is_top_level(&self) -> bool {
        TOP_LEVEL.contains(self)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(id) => write!(f, "{}:{id}", self.tag()),
            None => f.write_str(self.tag()),
        }
    }
}

impl FromStr for Destination {
    type Err = DecodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (tag, payload) = match raw.split_once(':') {
            Some((tag, payload)) => (tag, Some(payload)),
            None => (raw, None),
        };
        let id = || -> Result<i32, DecodeError> {
            let payload = payload.ok_or_else(|| DecodeError::MissingPayload {
                tag: tag.to_owned(),
            })?;
            payload.parse().map_err(|_| DecodeError::InvalidPayload {
                raw: raw.to_owned(),
            })
        };
        let unit = |d: Self| match payload {
            None => Ok(d),
            Some(_) => Err(DecodeError::UnexpectedPayload {
                tag: tag.to_owned(),
            }),
        };
        match tag {
            "Home" => unit(Self::Home),
            "HomeDetail" => id().map(Self::HomeDetail),
            "HomeInfo" => unit(Self::HomeInfo),
            "HomeMoreInfo" => unit(Self::HomeMoreInfo),
            "Profile" => unit(Self::Profile),
            "ProfileDetail" => id().map(Self::ProfileDetail),
            "Overlay" => unit(Self::Overlay),
            "Login" => unit(Self::Login),
            "Loading" => unit(Self::Loading),
            _ => Err(DecodeError::UnknownTag {
                tag: tag.to_owned(),
            }),
        }
    }
}

/// [`KeyCodec`] for [`Destination`] using its `Display`/`FromStr` form.
#[derive(Copy, Clone, Debug, Default)]
pub struct DestinationCodec;

impl KeyCodec<Destination> for DestinationCodec {
    fn encode(&self, key: &Destination) -> String {
        key.to_string()
    }

    fn decode(&self, raw: &str) -> Result<Destination, DecodeError> {
        raw.parse()
    }
}

/// Where a fresh navigator starts, from the persisted login state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StartRoute;

impl StartRoute {
    /// `None` while the login state loads, then [`Login`](Destination::Login)
    /// or [`Home`](Destination::Home).
    pub fn for_session(logged_in: Option<bool>) -> Destination {
        match logged_in {
            None => Destination::Loading,
            Some(false) => Destination::Login,
            Some(true) => Destination::Home,
        }
    }
}
