use crate::error::Result;
use crate::model::{Folder, Note};

/// Abstract interface for snapshot persistence.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (ordering, invariants, selection side effects).
///
/// Snapshots are whole collections: every save overwrites the previous one.
pub trait StorageBackend {
    /// Load the notes snapshot. A missing snapshot is an empty list.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Load the folders snapshot. A missing snapshot is an empty list.
    fn load_folders(&self) -> Result<Vec<Folder>>;

    /// Overwrite the notes snapshot.
    fn save_notes(&self, notes: &[Note]) -> Result<()>;

    /// Overwrite the folders snapshot.
    fn save_folders(&self, folders: &[Folder]) -> Result<()>;
}

/// Lets a store borrow a backend the caller keeps ownership of.
impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn load_notes(&self) -> Result<Vec<Note>> {
        (**self).load_notes()
    }

    fn load_folders(&self) -> Result<Vec<Folder>> {
        (**self).load_folders()
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        (**self).save_notes(notes)
    }

    fn save_folders(&self, folders: &[Folder]) -> Result<()> {
        (**self).save_folders(folders)
    }
}
