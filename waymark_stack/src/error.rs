// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for stack operations, key decoding, and snapshot restore.

use alloc::string::String;

/// A persisted destination string could not be turned back into a key.
///
/// Returned by [`KeyCodec::decode`](crate::KeyCodec::decode). A stale build
/// resuming from a record written by a newer build hits
/// [`UnknownTag`](Self::UnknownTag); this is never recovered from silently.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The `<Variant>` part names no known destination.
    #[error("unrecognized destination tag `{tag}`")]
    UnknownTag {
        /// The tag as it appeared in the record.
        tag: String,
    },
    /// The variant carries a payload but none was present.
    #[error("destination `{tag}` requires a payload")]
    MissingPayload {
        /// The tag as it appeared in the record.
        tag: String,
    },
    /// A payload was present on a variant that takes none.
    #[error("destination `{tag}` does not take a payload")]
    UnexpectedPayload {
        /// The tag as it appeared in the record.
        tag: String,
    },
    /// The payload was not a valid integer.
    #[error("invalid payload in `{raw}`")]
    InvalidPayload {
        /// The full encoded destination.
        raw: String,
    },
}

/// Explicit lookups or replacements that violate a [`SectionStack`](crate::SectionStack) invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// The section was never switched to, so it has no history.
    #[error("section `{section}` has no history")]
    UnknownSection {
        /// Debug rendering of the requested section key.
        section: String,
    },
    /// A section history must always keep at least one entry.
    #[error("a section history cannot be empty")]
    EmptyHistory,
}

/// Failure to rebuild a [`SectionStack`](crate::SectionStack) from a [`Snapshot`](crate::Snapshot).
///
/// Restore is all-or-nothing: any error leaves no partially restored stack behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    /// A section key or history entry failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A persisted section history had no entries.
    #[error("persisted history for section `{section}` is empty")]
    EmptyHistory {
        /// The encoded section key.
        section: String,
    },
    /// The record has no history for its start or active section.
    #[error("persisted record has no history for section `{section}`")]
    MissingSection {
        /// The encoded section key.
        section: String,
    },
    /// The record was written with a format version this build does not read.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the record.
        found: u32,
        /// Version this build writes and reads.
        expected: u32,
    },
}
