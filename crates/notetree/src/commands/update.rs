use crate::commands::CmdResult;
use crate::model::Id;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Replaces a note's content. Called on every keystroke of the body editor.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, id: &Id, content: String) -> CmdResult {
    if !store.update_note_content(id, content) {
        return CmdResult::unchanged("Content unchanged");
    }
    match store.note(id) {
        Some(note) => CmdResult::default().with_affected_notes(vec![note.clone()]),
        None => CmdResult::default(),
    }
}
