//! Inline rename flow.
//!
//! The UI swaps an entity's label for an input field ([`begin`]). Pressing the
//! confirm key calls [`commit`] with the typed text; losing focus calls [`cancel`].
//! Both leave rename mode. A blank (after trimming) commit keeps the old name.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{EntityKind, Id};
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;

pub fn begin<B: StorageBackend>(
    store: &NoteStore<B>,
    selection: &mut Selection,
    kind: EntityKind,
    id: &Id,
) -> CmdResult {
    if selection.begin_rename(store, kind, id) {
        CmdResult::default()
    } else {
        CmdResult::unchanged(format!("Nothing to rename: {}", id))
    }
}

pub fn commit<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selection: &mut Selection,
    text: &str,
) -> CmdResult {
    let Some((kind, id)) = selection.clear_rename() else {
        return CmdResult::unchanged("No rename in progress");
    };
    match kind {
        EntityKind::Note => note(store, &id, text),
        EntityKind::Folder => folder(store, &id, text),
    }
}

pub fn cancel(selection: &mut Selection) -> CmdResult {
    match selection.clear_rename() {
        Some(_) => CmdResult::unchanged("Rename cancelled"),
        None => CmdResult::unchanged("No rename in progress"),
    }
}

/// Renames a note directly, outside the inline flow.
pub fn note<B: StorageBackend>(store: &mut NoteStore<B>, id: &Id, title: &str) -> CmdResult {
    if !store.rename_note(id, title) {
        return CmdResult::unchanged("Note title unchanged");
    }
    let mut result = CmdResult::default();
    if let Some(note) = store.note(id) {
        result.add_message(CmdMessage::success(format!("Note renamed: {}", note.title)));
        result.affected_notes.push(note.clone());
    }
    result
}

/// Renames a folder directly, outside the inline flow.
pub fn folder<B: StorageBackend>(store: &mut NoteStore<B>, id: &Id, name: &str) -> CmdResult {
    if !store.rename_folder(id, name) {
        return CmdResult::unchanged("Folder name unchanged");
    }
    let mut result = CmdResult::default();
    if let Some(folder) = store.folder(id) {
        result.add_message(CmdMessage::success(format!(
            "Folder renamed: {}",
            folder.name
        )));
        result.affected_folders.push(folder.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::selection::UiMode;
    use crate::store::memory::InMemoryStore;

    fn setup() -> (InMemoryStore, Selection) {
        (InMemoryStore::new(), Selection::new())
    }

    #[test]
    fn test_commit_renames_new_folder() {
        let (mut store, mut selection) = setup();
        let f = create::folder(&mut store, &mut selection).affected_folders[0].clone();

        let result = commit(&mut store, &mut selection, "  Work ");
        assert_eq!(result.affected_folders[0].name, "Work");
        assert_eq!(store.folder(&f.id).unwrap().name, "Work");
        assert_eq!(selection.mode(), &UiMode::Idle);
    }

    #[test]
    fn test_commit_blank_keeps_name_and_leaves_rename_mode() {
        let (mut store, mut selection) = setup();
        let f = create::folder(&mut store, &mut selection).affected_folders[0].clone();

        let result = commit(&mut store, &mut selection, "");
        assert!(result.is_noop());
        assert_eq!(store.folder(&f.id).unwrap().name, "New Folder");
        assert!(selection.editing_item_id().is_none());
    }

    #[test]
    fn test_begin_and_commit_note_title() {
        let (mut store, mut selection) = setup();
        let n = create::note(&mut store, &mut selection, None).affected_notes[0].clone();

        begin(&store, &mut selection, EntityKind::Note, &n.id);
        assert_eq!(selection.editing_item_id(), Some(&n.id));

        commit(&mut store, &mut selection, "Groceries");
        assert_eq!(store.note(&n.id).unwrap().title, "Groceries");
        assert!(selection.editing_item_id().is_none());
    }

    #[test]
    fn test_begin_unknown_entity_is_noop() {
        let (store, mut selection) = setup();
        let result = begin(&store, &mut selection, EntityKind::Folder, &Id::from("nope"));
        assert!(result.is_noop());
        assert_eq!(selection.mode(), &UiMode::Idle);
    }

    #[test]
    fn test_cancel_discards_text() {
        let (mut store, mut selection) = setup();
        let f = create::folder(&mut store, &mut selection).affected_folders[0].clone();

        cancel(&mut selection);
        assert!(selection.editing_item_id().is_none());
        assert_eq!(store.folder(&f.id).unwrap().name, "New Folder");

        // Nothing to commit afterwards
        assert!(commit(&mut store, &mut selection, "Late").is_noop());
        assert_eq!(store.folder(&f.id).unwrap().name, "New Folder");
    }

    #[test]
    fn test_direct_rename_is_idempotent() {
        let (mut store, mut selection) = setup();
        let n = create::note(&mut store, &mut selection, None).affected_notes[0].clone();

        assert!(!note(&mut store, &n.id, "Plan").is_noop());
        assert!(note(&mut store, &n.id, "Plan").is_noop());
        assert!(note(&mut store, &n.id, " \t ").is_noop());
        assert_eq!(store.note(&n.id).unwrap().title, "Plan");
    }
}
