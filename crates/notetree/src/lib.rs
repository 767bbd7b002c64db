//! # Notetree Architecture
//!
//! Notetree is a **UI-agnostic note library**: an ordered collection of notes that can be
//! filed into folders, reordered by drag and drop, renamed inline and edited as Markdown.
//! Whatever draws the sidebar and the content pane sits on top of this crate and drives it
//! one user action at a time.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per user action                               │
//! │  - Owns the store, the selection and the renderer           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Couples store mutations with selection side effects      │
//! │  - Returns CmdResult with affected entities and messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, ordering.rs)                        │
//! │  - NoteStore owns notes and folders, enforces invariants    │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Model
//!
//! There is one global sequence of notes. A note's position inside its folder (or at
//! root) is its position among the notes of that same bucket in the global sequence.
//! Drag-and-drop indices are always bucket-relative; [`ordering`] translates them into
//! splices on the global sequence so that notes in other buckets never move.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing here writes to stdout or assumes a particular UI toolkit. Persistence goes
//! through [`store::backend::StorageBackend`], and diagnostics go through `tracing`.
//!
//! ## Testing Strategy
//!
//! 1. **Ordering and store** (`ordering.rs`, `store/`): thorough unit tests of the
//!    invariants. This is where most of the testing lives.
//! 2. **Commands** (`commands/*.rs`): side effects on the selection and result shapes.
//! 3. **API** (`api.rs`): dispatch only.
//! 4. **Integration** (`tests/`): file-backed persistence and end-to-end scenarios.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: Document store and storage backends
//! - [`ordering`]: Drop classification and bucket-relative moves
//! - [`selection`]: Active note and edit mode
//! - [`model`]: Core data types (`Note`, `Folder`, `Id`, `BucketId`)
//! - [`ids`]: Identifier generation
//! - [`render`]: Markdown rendering for the content pane
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod ordering;
pub mod render;
pub mod selection;
pub mod store;
