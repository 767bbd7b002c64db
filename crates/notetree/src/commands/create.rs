use crate::commands::{CmdMessage, CmdResult};
use crate::model::Id;
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Creates a note at the end of `notes`, filed under `folder_id` (root if `None`).
/// The new note becomes active and opens for editing.
pub fn note<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selection: &mut Selection,
    folder_id: Option<Id>,
) -> CmdResult {
    let requested_folder = folder_id.is_some();
    let note = store.create_note(folder_id);
    selection.on_note_created(&note.id);

    let mut result = CmdResult::default();
    if requested_folder && note.folder_id.is_none() {
        result.add_message(CmdMessage::warning("Folder not found, note created at root"));
    }
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    result.with_affected_notes(vec![note])
}

/// Creates a folder at the end of `folders` and puts it in rename mode.
pub fn folder<B: StorageBackend>(store: &mut NoteStore<B>, selection: &mut Selection) -> CmdResult {
    let folder = store.create_folder();
    selection.on_folder_created(&folder.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Folder created: {}",
        folder.name
    )));
    result.with_affected_folders(vec![folder])
}
