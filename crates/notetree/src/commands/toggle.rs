use crate::commands::CmdResult;
use crate::model::Id;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Expands a collapsed folder or collapses an expanded one.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, id: &Id) -> CmdResult {
    if !store.toggle_folder_open(id) {
        return CmdResult::unchanged(format!("Folder not found: {}", id));
    }
    match store.folder(id) {
        Some(folder) => CmdResult::default().with_affected_folders(vec![folder.clone()]),
        None => CmdResult::default(),
    }
}
