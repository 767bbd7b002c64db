//! # Storage Layer
//!
//! This module holds the document store and the persistence abstraction beneath it.
//!
//! ## Store vs. Backend
//!
//! - [`note_store::NoteStore`] owns the canonical `notes` and `folders` collections
//!   in memory and enforces their invariants. It is the only thing that mutates them.
//! - [`backend::StorageBackend`] loads and saves whole-collection snapshots. The store
//!   calls it after every mutation that changed something.
//!
//! ## Persistence Is Best-Effort
//!
//! A save that fails does not undo the mutation. The store logs the failure, marks the
//! snapshot dirty, and keeps serving the in-memory state. [`note_store::NoteStore::flush`]
//! retries both snapshots and returns the error to callers that care.
//!
//! ## Load Reconciliation
//!
//! Snapshots on disk may have been edited by hand or written by older versions. When a
//! store is opened, duplicate ids are dropped (first occurrence wins), a folder stored
//! under the reserved `"root"` id is given a fresh id, and notes filed under folders that
//! no longer exist are moved to root. The result is a
//! [`DoctorReport`]; repaired snapshots are written back immediately.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: JSON snapshots on disk, written atomically.
//! - [`mem_backend::MemBackend`]: in-memory snapshots for testing, with write-error
//!   simulation and save counters.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── notes.json      # [{"id","title","content","folderId"}, ...]
//! └── folders.json    # [{"id","name","isOpen"}, ...]
//! ```

use crate::model::{EntityKind, Id};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// Report from load reconciliation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoctorReport {
    pub reparented_orphans: usize,
    pub dropped_duplicate_notes: usize,
    pub dropped_duplicate_folders: usize,
    /// Folders moved off the reserved root id.
    pub reassigned_folders: usize,
    /// Notes that followed a reassigned folder.
    pub refiled_notes: usize,
}

impl DoctorReport {
    /// True if the notes snapshot was changed by reconciliation.
    pub fn touched_notes(&self) -> bool {
        self.reparented_orphans > 0 || self.dropped_duplicate_notes > 0 || self.refiled_notes > 0
    }

    /// True if the folders snapshot was changed by reconciliation.
    pub fn touched_folders(&self) -> bool {
        self.dropped_duplicate_folders > 0 || self.reassigned_folders > 0
    }

    pub fn is_clean(&self) -> bool {
        !self.touched_notes() && !self.touched_folders()
    }
}

/// Existence checks the selection controller validates ids against.
pub trait EntityLookup {
    fn has_note(&self, id: &Id) -> bool;

    fn has_folder(&self, id: &Id) -> bool;

    fn has_entity(&self, kind: EntityKind, id: &Id) -> bool {
        match kind {
            EntityKind::Note => self.has_note(id),
            EntityKind::Folder => self.has_folder(id),
        }
    }
}
