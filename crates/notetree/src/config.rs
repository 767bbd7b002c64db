//! # Configuration
//!
//! notetree configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `NOTETREE_DATA_DIR`, `NOTETREE_ID_STRATEGY`,
//!    `NOTETREE_NOTE_TITLE`, `NOTETREE_FOLDER_NAME`.
//! 2. **Config file**: the TOML file passed to [`NotesConfig::load`], if it exists.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | platform data dir | Where `notes.json` and `folders.json` live |
//! | `id_strategy` | `millis` | `millis` (timestamp ids) or `uuid` |
//! | `note_title` | `New Note` | Title given to new notes |
//! | `folder_name` | `New Folder` | Name given to new folders |

use crate::error::{NotesError, Result};
use crate::ids::{IdGenerator, IdStrategy};
use crate::store::note_store::Placeholders;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Directory holding the snapshots. Defaults to the platform data directory.
    #[config(env = "NOTETREE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// How new ids are generated: "millis" or "uuid".
    #[config(env = "NOTETREE_ID_STRATEGY", default = "millis")]
    pub id_strategy: IdStrategy,

    /// Title given to new notes.
    #[config(env = "NOTETREE_NOTE_TITLE", default = "New Note")]
    pub note_title: String,

    /// Name given to new folders.
    #[config(env = "NOTETREE_FOLDER_NAME", default = "New Folder")]
    pub folder_name: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        let placeholders = Placeholders::default();
        Self {
            data_dir: None,
            id_strategy: IdStrategy::default(),
            note_title: placeholders.note_title,
            folder_name: placeholders.folder_name,
        }
    }
}

impl NotesConfig {
    /// Loads configuration from the environment, then `file` (if given and present),
    /// then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = NotesConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The configured data directory, or the platform default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "notetree")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| NotesError::Store("Could not determine a data directory".to_string()))
    }

    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            note_title: self.note_title.clone(),
            folder_name: self.folder_name.clone(),
        }
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        self.id_strategy.generator()
    }
}
