// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scene::{OverlayPresentation, OverlayScene, Scene};
use crate::strategy::SceneStrategy;
use crate::types::{Entry, WidthClass};

/// Claims the last entry when it carries an overlay request.
///
/// Overlays are presented as a bottom sheet on compact windows and as a
/// dialog otherwise. Everything below the overlay is rendered underneath it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayStrategy;

impl OverlayStrategy {
    /// Presentation used for overlays at `width`.
    pub fn presentation(width: WidthClass) -> OverlayPresentation {
        match width {
            WidthClass::Compact => OverlayPresentation::BottomSheet,
            WidthClass::Medium | WidthClass::Expanded => OverlayPresentation::Dialog,
        }
    }
}

impl SceneStrategy for OverlayStrategy {
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        let index = entries.len().checked_sub(1)?;
        let request = entries[index].meta.overlay?;
        Some(Scene::Overlay(OverlayScene {
            index,
            request,
            presentation: Self::presentation(width),
        }))
    }
}
