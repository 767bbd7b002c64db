use super::mem_backend::MemBackend;
use super::note_store::NoteStore;

pub type InMemoryStore = NoteStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::empty(MemBackend::new())
    }

    /// The backend this store saves to, for asserting on persisted snapshots.
    pub fn mem_backend(&self) -> &MemBackend {
        &self.backend
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Id;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` root notes titled "Test Note 1".."Test Note N".
        pub fn with_root_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = self.store.create_note(None);
                self.store
                    .rename_note(&note.id, &format!("Test Note {}", i + 1));
                self.store
                    .update_note_content(&note.id, format!("Content for note {}", i + 1));
            }
            self
        }

        /// Adds a folder with the given name holding `count` notes
        /// titled "<name> 1".."<name> N".
        pub fn with_folder(mut self, name: &str, count: usize) -> Self {
            let folder = self.store.create_folder();
            self.store.rename_folder(&folder.id, name);
            for i in 0..count {
                let note = self.store.create_note(Some(folder.id.clone()));
                self.store
                    .rename_note(&note.id, &format!("{} {}", name, i + 1));
            }
            self
        }

        /// Adds a collapsed folder with the given name and no notes.
        pub fn with_closed_folder(mut self, name: &str) -> Self {
            let folder = self.store.create_folder();
            self.store.rename_folder(&folder.id, name);
            self.store.toggle_folder_open(&folder.id);
            self
        }

        /// Looks up a note id by title.
        pub fn note_id(&self, title: &str) -> Id {
            self.store
                .notes()
                .iter()
                .find(|n| n.title == title)
                .map(|n| n.id.clone())
                .unwrap_or_else(|| panic!("no note titled {:?}", title))
        }

        /// Looks up a folder id by name.
        pub fn folder_id(&self, name: &str) -> Id {
            self.store
                .folders()
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.id.clone())
                .unwrap_or_else(|| panic!("no folder named {:?}", name))
        }
    }
}
