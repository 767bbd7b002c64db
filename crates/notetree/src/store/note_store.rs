use super::backend::StorageBackend;
use super::{DoctorReport, EntityLookup};
use crate::error::Result;
use crate::ids::{IdGenerator, MillisIdGenerator};
use crate::model::{clean_name, BucketId, Folder, Id, Note, ROOT_BUCKET};
use crate::ordering::{self, MoveTransaction};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Titles given to entities before the user renames them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub note_title: String,
    pub folder_name: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            note_title: "New Note".to_string(),
            folder_name: "New Folder".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Dirty {
    notes: bool,
    folders: bool,
}

/// The document store: sole owner of the note and folder collections.
pub struct NoteStore<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    notes: Vec<Note>,
    folders: Vec<Folder>,
    ids: Box<dyn IdGenerator>,
    placeholders: Placeholders,
    dirty: Dirty,
    load_report: DoctorReport,
}

impl<B: StorageBackend> NoteStore<B> {
    /// A store that starts empty without reading the backend.
    /// The first mutation overwrites whatever snapshot the backend held.
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            notes: Vec::new(),
            folders: Vec::new(),
            ids: Box::new(MillisIdGenerator::new()),
            placeholders: Placeholders::default(),
            dirty: Dirty::default(),
            load_report: DoctorReport::default(),
        }
    }

    /// Loads both snapshots with default placeholders and millisecond ids.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with(
            backend,
            Box::new(MillisIdGenerator::new()),
            Placeholders::default(),
        )
    }

    #[instrument(level = "debug", skip(backend, ids))]
    pub fn open_with(
        backend: B,
        mut ids: Box<dyn IdGenerator>,
        placeholders: Placeholders,
    ) -> Result<Self> {
        let mut notes = backend.load_notes()?;
        let mut folders = backend.load_folders()?;
        for id in notes.iter().map(|n| &n.id).chain(folders.iter().map(|f| &f.id)) {
            ids.observe(id);
        }
        let report = reconcile(&mut notes, &mut folders, ids.as_mut());

        info!(
            notes = notes.len(),
            folders = folders.len(),
            "Opened note store"
        );

        let mut store = Self {
            backend,
            notes,
            folders,
            ids,
            placeholders,
            dirty: Dirty::default(),
            load_report: report,
        };

        if report.touched_notes() {
            warn!(?report, "Repaired notes snapshot on load");
            store.persist_notes();
        }
        if report.touched_folders() {
            warn!(?report, "Repaired folders snapshot on load");
            store.persist_folders();
        }

        Ok(store)
    }

    /// What reconciliation fixed while opening the store.
    pub fn load_report(&self) -> DoctorReport {
        self.load_report
    }

    // --- Mutations ---

    /// Appends a new note to the end of `notes`.
    ///
    /// A `folder_id` that names no existing folder files the note at root.
    pub fn create_note(&mut self, folder_id: Option<Id>) -> Note {
        let folder_id = folder_id.filter(|id| {
            let exists = self.has_folder(id);
            if !exists {
                warn!(folder_id = %id, "Unknown folder, creating note at root");
            }
            exists
        });
        let note = Note::new(
            self.ids.next_id(),
            self.placeholders.note_title.clone(),
            folder_id,
        );
        debug!(note_id = %note.id, folder_id = ?note.folder_id, "Created note");
        self.notes.push(note.clone());
        self.persist_notes();
        note
    }

    pub fn create_folder(&mut self) -> Folder {
        let folder = Folder::new(self.ids.next_id(), self.placeholders.folder_name.clone());
        debug!(folder_id = %folder.id, "Created folder");
        self.folders.push(folder.clone());
        self.persist_folders();
        folder
    }

    /// Replaces a note's content in place. Returns `true` if anything changed.
    pub fn update_note_content(&mut self, id: &Id, content: impl Into<String>) -> bool {
        let content = content.into();
        let Some(note) = self.notes.iter_mut().find(|n| &n.id == id) else {
            debug!(note_id = %id, "Content update for unknown note ignored");
            return false;
        };
        if note.content == content {
            return false;
        }
        note.content = content;
        self.persist_notes();
        true
    }

    /// Sets a note's title to the trimmed candidate. Blank candidates are ignored.
    pub fn rename_note(&mut self, id: &Id, title: &str) -> bool {
        let Some(title) = clean_name(title) else {
            debug!(note_id = %id, "Blank note title rejected");
            return false;
        };
        let Some(note) = self.notes.iter_mut().find(|n| &n.id == id) else {
            debug!(note_id = %id, "Rename of unknown note ignored");
            return false;
        };
        if note.title == title {
            return false;
        }
        note.title = title.to_string();
        self.persist_notes();
        true
    }

    /// Sets a folder's name to the trimmed candidate. Blank candidates are ignored.
    pub fn rename_folder(&mut self, id: &Id, name: &str) -> bool {
        let Some(name) = clean_name(name) else {
            debug!(folder_id = %id, "Blank folder name rejected");
            return false;
        };
        let Some(folder) = self.folders.iter_mut().find(|f| &f.id == id) else {
            debug!(folder_id = %id, "Rename of unknown folder ignored");
            return false;
        };
        if folder.name == name {
            return false;
        }
        folder.name = name.to_string();
        self.persist_folders();
        true
    }

    pub fn toggle_folder_open(&mut self, id: &Id) -> bool {
        let Some(folder) = self.folders.iter_mut().find(|f| &f.id == id) else {
            debug!(folder_id = %id, "Toggle of unknown folder ignored");
            return false;
        };
        folder.is_open = !folder.is_open;
        self.persist_folders();
        true
    }

    /// Applies a drag-and-drop transaction. Returns `true` if `notes` changed.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, tx: &MoveTransaction) -> bool {
        let folders = &self.folders;
        let changed = ordering::apply_move(
            &mut self.notes,
            |id| folders.iter().any(|f| &f.id == id),
            tx,
        );
        if changed {
            self.persist_notes();
        } else {
            debug!("Move left notes unchanged");
        }
        changed
    }

    // --- Queries ---

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn note(&self, id: &Id) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn folder(&self, id: &Id) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    /// Notes of one bucket, in stored order.
    pub fn bucket_notes(&self, bucket: &BucketId) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.is_in(bucket)).collect()
    }

    pub fn root_notes(&self) -> Vec<&Note> {
        self.bucket_notes(&BucketId::Root)
    }

    pub fn folder_notes(&self, folder_id: &Id) -> Vec<&Note> {
        self.bucket_notes(&BucketId::Folder(folder_id.clone()))
    }

    /// The navigation tree: root notes first, then each folder with its notes.
    /// Collapsed folders list no notes.
    pub fn sidebar(&self) -> Sidebar<'_> {
        let folders = self
            .folders
            .iter()
            .map(|folder| {
                let notes = if folder.is_open {
                    self.folder_notes(&folder.id)
                } else {
                    Vec::new()
                };
                FolderEntry { folder, notes }
            })
            .collect();
        Sidebar {
            root: self.root_notes(),
            folders,
        }
    }

    // --- Persistence ---

    /// True while a snapshot failed to save and has not been written since.
    pub fn is_dirty(&self) -> bool {
        self.dirty.notes || self.dirty.folders
    }

    /// Writes both snapshots, reporting the first failure.
    #[instrument(level = "debug", skip(self))]
    pub fn flush(&mut self) -> Result<()> {
        let notes = self.backend.save_notes(&self.notes);
        self.dirty.notes = notes.is_err();
        let folders = self.backend.save_folders(&self.folders);
        self.dirty.folders = folders.is_err();
        notes.and(folders)
    }

    fn persist_notes(&mut self) {
        match self.backend.save_notes(&self.notes) {
            Ok(()) => self.dirty.notes = false,
            Err(e) => {
                warn!(error = %e, "Failed to save notes snapshot, keeping in-memory state");
                self.dirty.notes = true;
            }
        }
    }

    fn persist_folders(&mut self) {
        match self.backend.save_folders(&self.folders) {
            Ok(()) => self.dirty.folders = false,
            Err(e) => {
                warn!(error = %e, "Failed to save folders snapshot, keeping in-memory state");
                self.dirty.folders = true;
            }
        }
    }
}

impl<B: StorageBackend> EntityLookup for NoteStore<B> {
    fn has_note(&self, id: &Id) -> bool {
        self.note(id).is_some()
    }

    fn has_folder(&self, id: &Id) -> bool {
        self.folder(id).is_some()
    }
}

#[derive(Debug)]
pub struct Sidebar<'a> {
    pub root: Vec<&'a Note>,
    pub folders: Vec<FolderEntry<'a>>,
}

#[derive(Debug)]
pub struct FolderEntry<'a> {
    pub folder: &'a Folder,
    pub notes: Vec<&'a Note>,
}

/// Repairs loaded snapshots so every invariant holds before the first query.
///
/// 1. **Duplicate ids**: the first occurrence wins, later ones are dropped.
/// 2. **Reserved ids**: a folder stored under the root bucket's id could never be a
///    drop target, so it gets a fresh id from `ids` and its notes follow it.
/// 3. **Orphans**: a note filed under a folder that does not exist moves to root.
fn reconcile(
    notes: &mut Vec<Note>,
    folders: &mut Vec<Folder>,
    ids: &mut dyn IdGenerator,
) -> DoctorReport {
    let mut report = DoctorReport::default();

    let before = folders.len();
    let mut folder_ids = HashSet::new();
    folders.retain(|f| folder_ids.insert(f.id.clone()));
    report.dropped_duplicate_folders = before - folders.len();

    if let Some(folder) = folders.iter_mut().find(|f| f.id.as_str() == ROOT_BUCKET) {
        let reserved = std::mem::replace(&mut folder.id, ids.next_id());
        debug!(folder_id = %folder.id, "Reassigned folder stored under the root id");
        folder_ids.remove(&reserved);
        folder_ids.insert(folder.id.clone());
        for note in notes.iter_mut() {
            if note.folder_id.as_ref() == Some(&reserved) {
                note.folder_id = Some(folder.id.clone());
                report.refiled_notes += 1;
            }
        }
        report.reassigned_folders += 1;
    }

    let before = notes.len();
    let mut seen = HashSet::new();
    notes.retain(|n| seen.insert(n.id.clone()));
    report.dropped_duplicate_notes = before - notes.len();

    for note in notes.iter_mut() {
        if let Some(folder_id) = &note.folder_id {
            if !folder_ids.contains(folder_id) {
                debug!(note_id = %note.id, %folder_id, "Re-filing orphaned note at root");
                note.folder_id = None;
                report.reparented_orphans += 1;
            }
        }
    }

    report
}
