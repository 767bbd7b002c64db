//! # Command Layer
//!
//! This module contains the **core business logic** of notetree. Each user action
//! lives in its own submodule as a plain function over the store and the selection.
//!
//! ## Role and Responsibilities
//!
//! Commands are where store mutations meet UI state:
//! - Mutate the [`NoteStore`](crate::store::note_store::NoteStore)
//! - Apply the selection side effects that go with an action (a new note is selected
//!   and opened for editing, a new folder starts in rename mode, ...)
//! - Return a structured [`CmdResult`] with the affected entities and messages
//!
//! ## No Failure Path
//!
//! Every action degrades to a no-op when its target is missing or its input is
//! invalid (blank names, cancelled drags). Commands therefore return a `CmdResult`
//! rather than a `Result`; a no-op shows up as an empty `affected_*` list and an
//! info message.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check both the store and the selection afterwards.
//!
//! ## Command Modules
//!
//! - [`create`]: New notes and folders
//! - [`update`]: Note content edits
//! - [`rename`]: Inline rename flow (begin, commit, cancel)
//! - [`toggle`]: Expand/collapse folders
//! - [`move_notes`]: Drag-and-drop reorder and re-parent
//! - [`select`]: Active note and body edit mode

use crate::model::{Folder, Note};
use serde::Serialize;

pub mod create;
pub mod move_notes;
pub mod rename;
pub mod select;
pub mod toggle;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes as they are after the command.
    pub affected_notes: Vec<Note>,
    /// Folders as they are after the command.
    pub affected_folders: Vec<Folder>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_affected_folders(mut self, folders: Vec<Folder>) -> Self {
        self.affected_folders = folders;
        self
    }

    /// Shorthand for a result that changed nothing.
    pub fn unchanged(reason: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::info(reason));
        result
    }

    pub fn is_noop(&self) -> bool {
        self.affected_notes.is_empty() && self.affected_folders.is_empty()
    }
}
