//! # Domain Model
//!
//! This module defines the core data structures for notetree: [`Note`], [`Folder`],
//! their identifier [`Id`], and the [`BucketId`] used to address a group of notes.
//!
//! ## Buckets
//!
//! Notes are not nested inside folders in memory. Every note lives in one flat,
//! ordered sequence and carries an optional `folder_id`. A *bucket* is the set of
//! notes sharing the same `folder_id`:
//!
//! ```text
//! notes:  [A(root), B(f1), C(root), D(f1)]
//!
//! root bucket: [A, C]
//! f1 bucket:   [B, D]
//! ```
//!
//! The order inside a bucket is always the order of the global sequence, filtered.
//! Reordering a bucket therefore means reordering the global sequence (see
//! [`crate::ordering`]).
//!
//! ## Snapshot Format
//!
//! Both entities serialize to the JSON shape the snapshots use on disk:
//!
//! ```text
//! Note:   { "id": "...", "title": "...", "content": "...", "folderId": null }
//! Folder: { "id": "...", "name": "...", "isOpen": true }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved bucket identifier for notes that are not filed in any folder.
pub const ROOT_BUCKET: &str = "root";

/// Opaque identifier shared by notes and folders.
///
/// Ids are plain strings so snapshots written by older versions (which used
/// millisecond timestamps) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Addresses a bucket: the root (unfiled) bucket or a folder's bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketId {
    Root,
    Folder(Id),
}

impl BucketId {
    /// Parses a drop-zone identifier. `"root"` is the unfiled bucket, anything
    /// else is taken as a folder id.
    pub fn parse(raw: &str) -> Self {
        if raw == ROOT_BUCKET {
            BucketId::Root
        } else {
            BucketId::Folder(Id::from(raw))
        }
    }

    /// The `folder_id` value a note in this bucket carries.
    pub fn folder_id(&self) -> Option<&Id> {
        match self {
            BucketId::Root => None,
            BucketId::Folder(id) => Some(id),
        }
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketId::Root => f.write_str(ROOT_BUCKET),
            BucketId::Folder(id) => write!(f, "{}", id),
        }
    }
}

/// Which kind of entity an id refers to. Used by rename mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Note,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub folder_id: Option<Id>,
}

impl Note {
    pub fn new(id: Id, title: impl Into<String>, folder_id: Option<Id>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            folder_id,
        }
    }

    pub fn is_in(&self, bucket: &BucketId) -> bool {
        self.folder_id.as_ref() == bucket.folder_id()
    }
}

fn default_open() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Id,
    pub name: String,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

impl Folder {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_open: true,
        }
    }
}

/// Trims a rename candidate, returning `None` when nothing is left.
pub fn clean_name(candidate: &str) -> Option<&str> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
