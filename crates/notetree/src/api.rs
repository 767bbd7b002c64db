//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point a presentation layer drives, one method per user action.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`NoteStore`], the [`Selection`] and the [`Renderer`]
//! - **Dispatches** each action to the matching command
//! - **Answers view queries** (sidebar tree, active note, rendered content)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and the store
//! - **Presentation**: Returns data structures, never markup for the sidebar
//!
//! ## Generic Over StorageBackend
//!
//! `NotesApi<B: StorageBackend>` is generic over persistence:
//! - Production: `NotesApi<FsBackend>` (see [`NotesApi::from_config`])
//! - Testing: `NotesApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::config::NotesConfig;
use crate::error::Result;
use crate::model::{EntityKind, Id, Note};
use crate::ordering::{DropLocation, MoveTransaction};
use crate::render::{MarkdownRenderer, NoteView, Renderer};
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::note_store::{NoteStore, Sidebar};
use tracing::info;

pub struct NotesApi<B: StorageBackend> {
    store: NoteStore<B>,
    selection: Selection,
    renderer: Box<dyn Renderer>,
}

impl<B: StorageBackend> NotesApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self {
            store,
            selection: Selection::new(),
            renderer: Box::new(MarkdownRenderer),
        }
    }

    /// Loads the store from `backend` with default settings.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(NoteStore::open(backend)?))
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    // --- Creation ---

    pub fn create_note(&mut self, folder_id: Option<Id>) -> CmdResult {
        commands::create::note(&mut self.store, &mut self.selection, folder_id)
    }

    pub fn create_folder(&mut self) -> CmdResult {
        commands::create::folder(&mut self.store, &mut self.selection)
    }

    // --- Content & Names ---

    pub fn update_note_content(&mut self, id: &Id, content: impl Into<String>) -> CmdResult {
        commands::update::run(&mut self.store, id, content.into())
    }

    /// Content edit coming from the body editor, which always targets the active note.
    pub fn update_active_content(&mut self, content: impl Into<String>) -> CmdResult {
        match self.selection.active_note().cloned() {
            Some(id) => self.update_note_content(&id, content),
            None => CmdResult::unchanged("No active note"),
        }
    }

    pub fn rename_note(&mut self, id: &Id, title: &str) -> CmdResult {
        commands::rename::note(&mut self.store, id, title)
    }

    pub fn rename_folder(&mut self, id: &Id, name: &str) -> CmdResult {
        commands::rename::folder(&mut self.store, id, name)
    }

    pub fn begin_rename(&mut self, kind: EntityKind, id: &Id) -> CmdResult {
        commands::rename::begin(&self.store, &mut self.selection, kind, id)
    }

    pub fn commit_rename(&mut self, text: &str) -> CmdResult {
        commands::rename::commit(&mut self.store, &mut self.selection, text)
    }

    pub fn cancel_rename(&mut self) -> CmdResult {
        commands::rename::cancel(&mut self.selection)
    }

    pub fn toggle_folder(&mut self, id: &Id) -> CmdResult {
        commands::toggle::run(&mut self.store, id)
    }

    // --- Drag & Drop ---

    pub fn drop_note(
        &mut self,
        source: DropLocation,
        destination: Option<DropLocation>,
        dragged_id: Id,
    ) -> CmdResult {
        commands::move_notes::run(&mut self.store, source, destination, dragged_id)
    }

    pub fn apply_move(&mut self, tx: &MoveTransaction) -> CmdResult {
        commands::move_notes::apply(&mut self.store, tx)
    }

    // --- Selection ---

    pub fn select_note(&mut self, id: &Id) -> CmdResult {
        commands::select::note(&self.store, &mut self.selection, id)
    }

    pub fn begin_edit(&mut self) -> CmdResult {
        commands::select::begin_edit(&self.store, &mut self.selection)
    }

    pub fn end_edit(&mut self) -> CmdResult {
        commands::select::end_edit(&mut self.selection)
    }

    // --- Views ---

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sidebar(&self) -> Sidebar<'_> {
        self.store.sidebar()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.selection
            .active_note()
            .and_then(|id| self.store.note(id))
    }

    /// Raw text while the body is being edited, rendered HTML otherwise.
    pub fn active_note_view(&self) -> Option<NoteView<'_>> {
        let note = self.active_note()?;
        Some(NoteView::build(
            &note.content,
            self.selection.is_editing(),
            self.renderer.as_ref(),
        ))
    }

    /// Retries persisting both snapshots.
    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()
    }
}

impl NotesApi<FsBackend> {
    /// Opens the file-backed store described by `config`.
    pub fn from_config(config: &NotesConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        info!(?data_dir, "Opening notes");
        let store = NoteStore::open_with(
            FsBackend::new(data_dir),
            config.id_generator(),
            config.placeholders(),
        )?;
        Ok(Self::new(store))
    }
}
