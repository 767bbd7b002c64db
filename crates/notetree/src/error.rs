use thiserror::Error;

/// Errors raised at the persistence and configuration boundary.
///
/// Store mutations never return these: a failed save is logged and the
/// snapshot is marked dirty instead (see [`crate::store::note_store`]).
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, NotesError>;
