// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predictive back gesture tracking.
//!
//! ## Overview
//!
//! A back gesture is a cancelable progress stream rather than a single event.
//! The plan is computed once when the gesture begins and held by a
//! [`BackGestureTracker`] until the gesture ends:
//!
//! - [`begin`](BackGestureTracker::begin) stores the plan,
//! - [`progress`](BackGestureTracker::progress) reports where a renderer
//!   should seek its transition,
//! - [`complete`](BackGestureTracker::complete) hands the plan back for the
//!   caller to apply,
//! - [`cancel`](BackGestureTracker::cancel) discards it.
//!
//! At most one gesture is in flight. Beginning a second one fails with
//! [`GestureError::AlreadyInFlight`] and leaves the first untouched.

use crate::back::BackPlan;
use crate::shape::PaneShape;

/// Errors from [`BackGestureTracker`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// A gesture is already in flight.
    #[error("a back gesture is already in flight")]
    AlreadyInFlight,
    /// No gesture is in flight.
    #[error("no back gesture is in flight")]
    NotInFlight,
}

/// Where a renderer should seek the back transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeekTarget {
    /// Gesture progress in `0.0..=1.0`.
    pub fraction: f32,
    /// Shape being revealed, or `None` if the gesture leaves the scene.
    pub target: Option<PaneShape>,
}

#[derive(Copy, Clone, Debug)]
struct InFlight {
    plan: BackPlan,
    fraction: f32,
}

/// Holds the plan of the single in-flight back gesture.
#[derive(Clone, Default)]
pub struct BackGestureTracker {
    in_flight: Option<InFlight>,
}

impl core::fmt::Debug for BackGestureTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BackGestureTracker")
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl BackGestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a gesture is in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Plan of the in-flight gesture.
    pub fn plan(&self) -> Option<&BackPlan> {
        self.in_flight.as_ref().map(|g| &g.plan)
    }

    /// Last reported progress of the in-flight gesture.
    pub fn fraction(&self) -> Option<f32> {
        self.in_flight.map(|g| g.fraction)
    }

    /// Start a gesture that will apply `plan` if it completes.
    pub fn begin(&mut self, plan: BackPlan) -> Result<(), GestureError> {
        if self.in_flight.is_some() {
            log::warn!("rejected back gesture: another is in flight");
            return Err(GestureError::AlreadyInFlight);
        }
        log::debug!("back gesture started: {:?}", plan);
        self.in_flight = Some(InFlight {
            plan,
            fraction: 0.0,
        });
        Ok(())
    }

    /// Report gesture progress. Values are clamped to `0.0..=1.0`; NaN reads as `0.0`.
    pub fn progress(&mut self, fraction: f32) -> Result<SeekTarget, GestureError> {
        let g = self.in_flight.as_mut().ok_or(GestureError::NotInFlight)?;
        g.fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Ok(SeekTarget {
            fraction: g.fraction,
            target: g.plan.previous_shape,
        })
    }

    /// Finish the gesture and return the plan to apply.
    pub fn complete(&mut self) -> Result<BackPlan, GestureError> {
        let g = self.in_flight.take().ok_or(GestureError::NotInFlight)?;
        log::debug!("back gesture completed: {:?}", g.plan);
        Ok(g.plan)
    }

    /// Abandon the gesture; its plan is discarded and nothing is applied.
    pub fn cancel(&mut self) -> Result<(), GestureError> {
        let g = self.in_flight.take().ok_or(GestureError::NotInFlight)?;
        log::debug!("back gesture cancelled at {}", g.fraction);
        Ok(())
    }
}
