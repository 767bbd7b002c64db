use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use crate::model::{Folder, Note};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const NOTES_FILE: &str = "notes.json";
pub const FOLDERS_FILE: &str = "folders.json";

/// File-based snapshot storage.
///
/// ```text
/// <data_dir>/
/// ├── notes.json      # JSON array of notes, in display order
/// └── folders.json    # JSON array of folders, in insertion order
/// ```
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILE)
    }

    pub fn folders_path(&self) -> PathBuf {
        self.root.join(FOLDERS_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }

    fn load_snapshot<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            debug!(?path, "No snapshot yet, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(NotesError::Io)?;
        let items: Vec<T> = serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(items)
    }

    fn save_snapshot<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        self.ensure_dir()?;

        let target = self.root.join(file);
        let content = serde_json::to_string_pretty(items).map_err(NotesError::Serialization)?;

        // Atomic write: a crash mid-save leaves the previous snapshot intact
        let tmp_file = self.root.join(format!(".{}-{}.tmp", file, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(NotesError::Io)?;
        fs::rename(&tmp_file, &target).map_err(NotesError::Io)?;

        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        self.load_snapshot(NOTES_FILE)
    }

    fn load_folders(&self) -> Result<Vec<Folder>> {
        self.load_snapshot(FOLDERS_FILE)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.save_snapshot(NOTES_FILE, notes)
    }

    fn save_folders(&self, folders: &[Folder]) -> Result<()> {
        self.save_snapshot(FOLDERS_FILE, folders)
    }
}
