use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::{Folder, Note};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since notetree is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Option<Vec<Note>>>,
    folders: RefCell<Option<Vec<Folder>>>,
    simulate_write_error: Cell<bool>,
    note_saves: Cell<usize>,
    folder_saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with snapshots, as if a previous session saved them.
    pub fn with_snapshots(notes: Vec<Note>, folders: Vec<Folder>) -> Self {
        let backend = Self::new();
        *backend.notes.borrow_mut() = Some(notes);
        *backend.folders.borrow_mut() = Some(folders);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful notes snapshot writes.
    pub fn note_saves(&self) -> usize {
        self.note_saves.get()
    }

    /// Number of successful folders snapshot writes.
    pub fn folder_saves(&self) -> usize {
        self.folder_saves.get()
    }

    /// The last saved notes snapshot, if any.
    pub fn saved_notes(&self) -> Option<Vec<Note>> {
        self.notes.borrow().clone()
    }

    /// The last saved folders snapshot, if any.
    pub fn saved_folders(&self) -> Option<Vec<Folder>> {
        self.folders.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone().unwrap_or_default())
    }

    fn load_folders(&self) -> Result<Vec<Folder>> {
        Ok(self.folders.borrow().clone().unwrap_or_default())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.check_writable()?;
        *self.notes.borrow_mut() = Some(notes.to_vec());
        self.note_saves.set(self.note_saves.get() + 1);
        Ok(())
    }

    fn save_folders(&self, folders: &[Folder]) -> Result<()> {
        self.check_writable()?;
        *self.folders.borrow_mut() = Some(folders.to_vec());
        self.folder_saves.set(self.folder_saves.get() + 1);
        Ok(())
    }
}
