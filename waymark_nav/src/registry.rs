// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static role metadata per destination variant.

use std::collections::BTreeMap;

use waymark_scene::{Entry, EntryMeta};

use crate::destination::Destination;

/// Role metadata registered per destination variant.
///
/// Metadata is keyed by [`Destination::tag`], so every `HomeDetail(id)`
/// shares one registration regardless of `id`. Lookups of unregistered
/// variants fall back to [`EntryMeta::NONE`] (single pane) with a warning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    metas: BTreeMap<&'static str, EntryMeta>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The app's registrations.
    ///
    /// | Destination | Metadata |
    /// |---|---|
    /// | `Home` | list pane of `"home"`, bottom bar, detail placeholder |
    /// | `HomeDetail` | detail pane of `"home"` |
    /// | `HomeInfo`, `HomeMoreInfo` | extra pane of `"home"` |
    /// | `Profile` | list pane of `"profile"`, bottom bar, two-pane |
    /// | `ProfileDetail` | two-pane with placeholder |
    /// | `Overlay` | overlay |
    /// | `Login`, `Loading` | none |
    pub fn app() -> Self {
        Self::new()
            .with(
                Destination::Home,
                EntryMeta::list_pane("home")
                    .with_bottom_bar()
                    .with_detail_placeholder(),
            )
            .with(Destination::HomeDetail(0), EntryMeta::detail_pane("home"))
            .with(Destination::HomeInfo, EntryMeta::extra_pane("home"))
            .with(Destination::HomeMoreInfo, EntryMeta::extra_pane("home"))
            .with(
                Destination::Profile,
                EntryMeta::list_pane("profile").with_bottom_bar().two_pane(),
            )
            .with(
                Destination::ProfileDetail(0),
                EntryMeta::NONE.two_pane().with_placeholder(),
            )
            .with(Destination::Overlay, EntryMeta::overlay())
            .with(Destination::Login, EntryMeta::NONE)
            .with(Destination::Loading, EntryMeta::NONE)
    }

    /// Register `meta` for the variant of `destination`, replacing any earlier registration.
    pub fn register(&mut self, destination: Destination, meta: EntryMeta) {
        self.metas.insert(destination.tag(), meta);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, destination: Destination, meta: EntryMeta) -> Self {
        self.register(destination, meta);
        self
    }

    /// Returns `true` if the variant of `destination` is registered.
    pub fn contains(&self, destination: &Destination) -> bool {
        self.metas.contains_key(destination.tag())
    }

    /// Metadata of `destination`.
    pub fn meta(&self, destination: &Destination) -> EntryMeta {
        match self.metas.get(destination.tag()) {
            Some(meta) => *meta,
            None => {
                log::warn!("{destination} is not registered; showing it as a single pane");
                EntryMeta::NONE
            }
        }
    }

    /// Tag every destination of `stack` with its metadata.
    pub fn entries(&self, stack: &[Destination]) -> Vec<Entry<Destination>> {
        stack.iter().map(|d| Entry::new(*d, self.meta(d))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_scene::{GroupKey, PaneRole};

    #[test]
    fn payload_does_not_affect_lookup() {
        let registry = Registry::app();
        assert_eq!(
            registry.meta(&Destination::HomeDetail(7)),
            registry.meta(&Destination::HomeDetail(-99))
        );
        assert_eq!(
            registry.meta(&Destination::HomeDetail(7)).role(),
            Some(PaneRole::Detail)
        );
    }

    #[test]
    fn app_registrations() {
        let registry = Registry::app();
        for d in Destination::SAMPLES {
            assert!(registry.contains(&d), "{d} unregistered");
        }
        let home = registry.meta(&Destination::Home);
        assert_eq!(home.group(), Some(GroupKey("home")));
        assert!(home.shows_bottom_bar());
        assert!(home.provides_detail_placeholder());
        assert!(registry.meta(&Destination::Overlay).is_overlay());
        assert!(registry.meta(&Destination::ProfileDetail(1)).wants_placeholder());
        assert_eq!(registry.meta(&Destination::Login), EntryMeta::NONE);
    }

    #[test]
    fn unregistered_is_plain() {
        let registry = Registry::new().with(Destination::Home, EntryMeta::list_pane("home"));
        assert!(!registry.contains(&Destination::Profile));
        assert_eq!(registry.meta(&Destination::Profile), EntryMeta::NONE);
        let entries = registry.entries(&[Destination::Home, Destination::Profile]);
        assert_eq!(entries[0].meta.role(), Some(PaneRole::List));
        assert_eq!(entries[1].meta, EntryMeta::NONE);
    }
}
