// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot/restore of a [`SectionStack`] for surviving process death.
//!
//! ## Overview
//!
//! A [`Snapshot`] is a plain, serializable record: the start section, the
//! active section, and every section history, with each key encoded to a
//! string by a [`KeyCodec`]. The record format is owned by this crate; the
//! byte encoding (JSON, for instance) is left to the host.
//!
//! Round-trip law: for any reachable stack `s`,
//! `SectionStack::restore(&s.snapshot(&c), &c)` has the same visible stack,
//! active section, and section histories as `s`.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, RestoreError};
use crate::stack::SectionStack;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Encode keys to stable strings and decode them back.
///
/// Implementations must map every key variant explicitly at both sites and
/// fail with [`DecodeError`] on anything unrecognized instead of defaulting.
pub trait KeyCodec<K> {
    /// Encode `key` to its persisted form.
    fn encode(&self, key: &K) -> String;
    /// Decode a persisted key.
    fn decode(&self, raw: &str) -> Result<K, DecodeError>;
}

/// Serializable record of a [`SectionStack`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Format version; see [`SNAPSHOT_VERSION`].
    pub version: u32,
    /// Encoded start section key.
    pub start_section_key: String,
    /// Encoded active section key.
    pub active_section_key: String,
    /// Encoded section key → encoded history, oldest first.
    pub section_histories: BTreeMap<String, Vec<String>>,
}

impl<K: Clone + Ord + Debug> SectionStack<K> {
    /// Capture the start section, the active section, and all histories.
    pub fn snapshot(&self, codec: &impl KeyCodec<K>) -> Snapshot {
        let section_histories = self
            .sections()
            .map(|(section, history)| {
                (
                    codec.encode(section),
                    history.iter().map(|k| codec.encode(k)).collect(),
                )
            })
            .collect();
        Snapshot {
            version: SNAPSHOT_VERSION,
            start_section_key: codec.encode(self.start_section()),
            active_section_key: codec.encode(self.active_section()),
            section_histories,
        }
    }

    /// Rebuild a stack from `snapshot`.
    ///
    /// Every key is decoded before anything is built, so a single bad entry
    /// fails the whole restore, as does a record without a history for its
    /// start or active section. The restored stack starts at revision `0`.
    pub fn restore(snapshot: &Snapshot, codec: &impl KeyCodec<K>) -> Result<Self, RestoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RestoreError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let start = codec.decode(&snapshot.start_section_key)?;
        let active = codec.decode(&snapshot.active_section_key)?;
        let mut sections = BTreeMap::new();
        for (section, history) in &snapshot.section_histories {
            if history.is_empty() {
                return Err(RestoreError::EmptyHistory {
                    section: section.clone(),
                });
            }
            let key = codec.decode(section)?;
            let history = history
                .iter()
                .map(|raw| codec.decode(raw))
                .collect::<Result<Vec<_>, _>>()?;
            sections.insert(key, history);
        }
        for (key, raw) in [
            (&start, &snapshot.start_section_key),
            (&active, &snapshot.active_section_key),
        ] {
            if !sections.contains_key(key) {
                return Err(RestoreError::MissingSection {
                    section: raw.clone(),
                });
            }
        }
        log::debug!(
            "restored {} section(s), active {active:?} (start {start:?})",
            sections.len()
        );
        Ok(Self::from_parts(start, active, sections))
    }
}
