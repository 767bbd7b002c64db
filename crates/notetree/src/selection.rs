//! # Selection & Edit-Mode Controller
//!
//! Tracks which note is active and what the user is currently typing into.
//!
//! The UI has three mutually exclusive input modes, modelled as [`UiMode`]:
//!
//! ```text
//!                 begin_edit (needs active note)
//!        ┌──────────────────────────────────────────┐
//!        │                                          ▼
//!      Idle ◄──────── end_edit ──────── EditingNoteBody(id)
//!       ▲ │                                         │
//!       │ │ begin_rename              begin_rename  │
//!       │ ▼                                         │
//!      Renaming(kind, id) ◄─────────────────────────┘
//!        │
//!        └── commit_rename / cancel_rename ──► Idle
//! ```
//!
//! Being in rename mode and editing a note body at the same time cannot be expressed.
//! Starting a rename replaces any previous rename; only one entity is ever being
//! renamed.
//!
//! The active note is tracked separately from the mode: selecting a note does not
//! start or stop editing.
//!
//! Ids handed to the controller are validated against the store through
//! [`EntityLookup`]; unknown ids leave the state unchanged.

use crate::model::{EntityKind, Id};
use crate::store::EntityLookup;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Idle,
    EditingNoteBody(Id),
    Renaming(EntityKind, Id),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    active_note: Option<Id>,
    mode: UiMode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_note(&self) -> Option<&Id> {
        self.active_note.as_ref()
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Whether the active note's body is shown as raw editable text.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, UiMode::EditingNoteBody(_))
    }

    /// The entity whose name is currently an input field, if any.
    pub fn editing_item_id(&self) -> Option<&Id> {
        match &self.mode {
            UiMode::Renaming(_, id) => Some(id),
            _ => None,
        }
    }

    /// The rename target, with its kind.
    pub fn rename_target(&self) -> Option<(EntityKind, &Id)> {
        match &self.mode {
            UiMode::Renaming(kind, id) => Some((*kind, id)),
            _ => None,
        }
    }

    pub fn select_note<L: EntityLookup>(&mut self, lookup: &L, id: &Id) -> bool {
        if !lookup.has_note(id) {
            debug!(note_id = %id, "Ignoring selection of unknown note");
            return false;
        }
        self.active_note = Some(id.clone());
        // An open body editor follows the selection.
        if let UiMode::EditingNoteBody(editing) = &mut self.mode {
            *editing = id.clone();
        }
        true
    }

    /// Starts editing the active note's body. No-op without an active note.
    pub fn begin_edit(&mut self) -> bool {
        let Some(active) = &self.active_note else {
            return false;
        };
        self.mode = UiMode::EditingNoteBody(active.clone());
        true
    }

    /// Stops editing the note body (the editor lost focus).
    pub fn end_edit(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.mode = UiMode::Idle;
        true
    }

    pub fn begin_rename<L: EntityLookup>(&mut self, lookup: &L, kind: EntityKind, id: &Id) -> bool {
        if !lookup.has_entity(kind, id) {
            debug!(?kind, entity_id = %id, "Ignoring rename of unknown entity");
            return false;
        }
        self.mode = UiMode::Renaming(kind, id.clone());
        true
    }

    /// Leaves rename mode, returning what was being renamed.
    pub fn clear_rename(&mut self) -> Option<(EntityKind, Id)> {
        match std::mem::take(&mut self.mode) {
            UiMode::Renaming(kind, id) => Some((kind, id)),
            other => {
                self.mode = other;
                None
            }
        }
    }

    /// A freshly created note is selected and opened for editing.
    pub fn on_note_created(&mut self, id: &Id) {
        self.active_note = Some(id.clone());
        self.mode = UiMode::EditingNoteBody(id.clone());
    }

    /// A freshly created folder starts in rename mode. The active note is kept.
    pub fn on_folder_created(&mut self, id: &Id) {
        self.mode = UiMode::Renaming(EntityKind::Folder, id.clone());
    }
}
