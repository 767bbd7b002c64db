use crate::commands::CmdResult;
use crate::model::Id;
use crate::ordering::{DropLocation, MoveTransaction};
use crate::store::backend::StorageBackend;
use crate::store::note_store::NoteStore;
use tracing::debug;

/// Handles the end of a drag. `destination` is `None` when the drop was cancelled.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    source: DropLocation,
    destination: Option<DropLocation>,
    dragged_id: Id,
) -> CmdResult {
    let Some(tx) = MoveTransaction::from_drop(source, destination, dragged_id) else {
        debug!("Drop without destination");
        return CmdResult::unchanged("Drop cancelled");
    };
    apply(store, &tx)
}

/// Applies an already classified transaction.
pub fn apply<B: StorageBackend>(store: &mut NoteStore<B>, tx: &MoveTransaction) -> CmdResult {
    // Identify the moved note before indices shift.
    let moved_id = match tx {
        MoveTransaction::WithinBucket {
            bucket, from_index, ..
        } => store
            .bucket_notes(bucket)
            .get(*from_index)
            .map(|note| note.id.clone()),
        MoveTransaction::AcrossBucket { moved_id, .. } => Some(moved_id.clone()),
    };

    if !store.apply_move(tx) {
        return CmdResult::unchanged("Nothing moved");
    }

    let moved = moved_id.and_then(|id| store.note(&id).cloned());
    CmdResult::default().with_affected_notes(moved.into_iter().collect())
}
