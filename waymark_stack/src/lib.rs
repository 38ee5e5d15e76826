// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Stack: a multi-branch navigation back stack.
//!
//! ## Overview
//!
//! Apps with a bottom bar or tab strip keep one navigation history per
//! top-level section and show a single flattened back stack.
//! [`SectionStack`] tracks those histories and recomputes the flattened
//! [visible stack](SectionStack::visible) on every mutation:
//!
//! - while the start section is active, the visible stack is its history;
//! - otherwise it is the start section's history followed by the active one's.
//!
//! Popping past the root of a non-start section returns to the start section;
//! the start section's root is never popped.
//!
//! ## Persistence
//!
//! [`SectionStack::snapshot`] produces a [`Snapshot`] record with every key
//! encoded by a [`KeyCodec`], and [`SectionStack::restore`] rebuilds an
//! equivalent stack. Restore fails as a whole on the first key that does not
//! decode ([`RestoreError`]); it never drops entries silently.
//!
//! ## Minimal usage
//!
//! ```
//! use waymark_stack::{PopOutcome, SectionStack};
//!
//! let mut stack = SectionStack::new("home");
//! stack.switch_section("profile");
//! stack.push("profile/7");
//! assert_eq!(stack.visible(), &["home", "profile", "profile/7"]);
//!
//! assert_eq!(stack.pop_last(), PopOutcome::Popped("profile/7"));
//! assert_eq!(stack.pop_last(), PopOutcome::ReturnedToStart);
//! assert_eq!(stack.visible(), &["home"]);
//!
//! // The root is never popped.
//! assert_eq!(stack.pop_last(), PopOutcome::AtRoot);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod snapshot;
mod stack;

pub use error::{DecodeError, RestoreError, StackError};
pub use snapshot::{KeyCodec, SNAPSHOT_VERSION, Snapshot};
pub use stack::{PopOutcome, SectionStack};
