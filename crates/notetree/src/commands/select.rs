use crate::commands::CmdResult;
use crate::model::Id;
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

/// Makes `id` the active note. Reports the note as affected.
pub fn note<B: StorageBackend>(
    store: &NoteStore<B>,
    selection: &mut Selection,
    id: &Id,
) -> CmdResult {
    if !selection.select_note(store, id) {
        return CmdResult::unchanged(format!("Note not found: {}", id));
    }
    match store.note(id) {
        Some(note) => CmdResult::default().with_affected_notes(vec![note.clone()]),
        None => CmdResult::default(),
    }
}

/// Opens the active note's body for editing (the user clicked the content pane).
pub fn begin_edit<B: StorageBackend>(store: &NoteStore<B>, selection: &mut Selection) -> CmdResult {
    if !selection.begin_edit() {
        return CmdResult::unchanged("No active note to edit");
    }
    let active = selection.active_note().and_then(|id| store.note(id));
    CmdResult::default().with_affected_notes(active.into_iter().cloned().collect())
}

/// Closes the body editor (focus left it).
pub fn end_edit(selection: &mut Selection) -> CmdResult {
    if selection.end_edit() {
        CmdResult::default()
    } else {
        CmdResult::unchanged("Not editing")
    }
}
