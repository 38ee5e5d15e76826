// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator and persistence errors.

use waymark_scene::{BackError, GestureError};
use waymark_stack::{RestoreError, StackError};

/// Errors from [`Navigator`](crate::Navigator) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A back-stack lookup or replacement failed.
    #[error(transparent)]
    Stack(#[from] StackError),
    /// Back planning failed.
    #[error(transparent)]
    Back(#[from] BackError),
    /// A back gesture could not be started or finished.
    #[error(transparent)]
    Gesture(#[from] GestureError),
    /// No strategy produced a scene; every registered destination must match
    /// at least the single-pane fallback.
    #[error("no scene matches the current stack")]
    NoScene,
    /// A discrete back action arrived while a back gesture was in flight.
    #[error("back rejected: a back gesture is in flight")]
    GestureInFlight,
}

/// Errors from saving or restoring navigator state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The record could not be serialized or parsed as JSON.
    #[error("persisted navigation state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The record parsed, but could not be turned back into a stack.
    #[error(transparent)]
    Restore(#[from] RestoreError),
}
