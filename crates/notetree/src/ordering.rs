//! # Ordering Engine
//!
//! Computes the effect of a drag-and-drop on the global note sequence.
//!
//! A drop is described by a [`MoveTransaction`]. The two shapes a drop can take are
//! separate variants rather than one function that compares bucket ids:
//!
//! - [`MoveTransaction::WithinBucket`]: the note was dragged to another slot of the
//!   same list. Indices are bucket-relative.
//! - [`MoveTransaction::AcrossBucket`]: the note was dragged into another list. The
//!   dragged note's id is authoritative; indices are only used to place it.
//!
//! ## Splicing a Filtered View
//!
//! The UI shows each bucket as a stable filter of the single `notes` sequence. A
//! bucket-relative index is mapped back to a global position like this:
//!
//! ```text
//! notes:       [A(root), X(f1), B(root), C(root)]
//! root view:   [A, B, C]           positions: [0, 2, 3]
//!
//! move root 2 -> 0:   remove C  -> [A, X, B]
//!                     insert before root[0] (A) -> [C, A, X, B]
//! ```
//!
//! Only the moved note changes position relative to the others, so every other
//! bucket keeps its order untouched.
//!
//! ## Cross-Bucket Placement
//!
//! A note dropped into another bucket is re-parented and then inserted at the drop
//! index of the destination bucket. When the destination bucket is empty there is
//! no neighbour to anchor to, and the note keeps its global position.

use crate::model::{BucketId, Id, Note};

/// One end of a drag: a bucket and the bucket-relative slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLocation {
    pub bucket: BucketId,
    pub index: usize,
}

impl DropLocation {
    pub fn new(bucket: BucketId, index: usize) -> Self {
        Self { bucket, index }
    }

    /// Builds a location from a drop-zone id as the UI names them (`"root"` or a
    /// folder id).
    pub fn parse(droppable_id: &str, index: usize) -> Self {
        Self::new(BucketId::parse(droppable_id), index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTransaction {
    WithinBucket {
        bucket: BucketId,
        from_index: usize,
        to_index: usize,
    },
    AcrossBucket {
        from_bucket: BucketId,
        to_bucket: BucketId,
        moved_id: Id,
        to_index: usize,
    },
}

impl MoveTransaction {
    /// Classifies a finished drag. Returns `None` when the drop was cancelled or
    /// landed outside any bucket.
    pub fn from_drop(
        source: DropLocation,
        destination: Option<DropLocation>,
        dragged_id: Id,
    ) -> Option<Self> {
        let destination = destination?;
        if source.bucket == destination.bucket {
            Some(MoveTransaction::WithinBucket {
                bucket: source.bucket,
                from_index: source.index,
                to_index: destination.index,
            })
        } else {
            Some(MoveTransaction::AcrossBucket {
                from_bucket: source.bucket,
                to_bucket: destination.bucket,
                moved_id: dragged_id,
                to_index: destination.index,
            })
        }
    }
}

/// Applies `tx` to `notes`. Returns `true` if the sequence changed.
///
/// `folder_exists` guards cross-bucket moves: a note is never filed under a folder
/// the store does not know.
pub fn apply_move<F>(notes: &mut Vec<Note>, folder_exists: F, tx: &MoveTransaction) -> bool
where
    F: Fn(&Id) -> bool,
{
    match tx {
        MoveTransaction::WithinBucket {
            bucket,
            from_index,
            to_index,
        } => reorder_within(notes, bucket, *from_index, *to_index),
        MoveTransaction::AcrossBucket {
            to_bucket,
            moved_id,
            to_index,
            ..
        } => {
            if let BucketId::Folder(folder_id) = to_bucket {
                if !folder_exists(folder_id) {
                    return false;
                }
            }
            move_across(notes, to_bucket, moved_id, *to_index)
        }
    }
}

/// Global positions of the members of `bucket`, in order.
pub fn bucket_positions(notes: &[Note], bucket: &BucketId) -> Vec<usize> {
    notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.is_in(bucket))
        .map(|(pos, _)| pos)
        .collect()
}

fn reorder_within(notes: &mut Vec<Note>, bucket: &BucketId, from: usize, to: usize) -> bool {
    let positions = bucket_positions(notes, bucket);
    let Some(&global_from) = positions.get(from) else {
        return false;
    };
    let to = to.min(positions.len() - 1);
    if to == from {
        return false;
    }

    let note = notes.remove(global_from);
    insert_into_bucket(notes, note, bucket, to, global_from);
    true
}

fn move_across(notes: &mut Vec<Note>, to_bucket: &BucketId, moved_id: &Id, to: usize) -> bool {
    let Some(global_from) = notes.iter().position(|note| &note.id == moved_id) else {
        return false;
    };
    if notes[global_from].is_in(to_bucket) {
        return false;
    }

    let mut note = notes.remove(global_from);
    note.folder_id = to_bucket.folder_id().cloned();
    insert_into_bucket(notes, note, to_bucket, to, global_from);
    true
}

/// Inserts `note` so it becomes member `to` of `bucket`. `fallback` is the global
/// position used when the bucket has no other members.
fn insert_into_bucket(
    notes: &mut Vec<Note>,
    note: Note,
    bucket: &BucketId,
    to: usize,
    fallback: usize,
) {
    let positions = bucket_positions(notes, bucket);
    let global_to = match (positions.get(to), positions.last()) {
        (Some(&anchor), _) => anchor,
        (None, Some(&last)) => last + 1,
        (None, None) => fallback.min(notes.len()),
    };
    notes.insert(global_to, note);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, folder: Option<&str>) -> Note {
        Note::new(Id::from(id), format!("Note {}", id), folder.map(Id::from))
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    fn folder(id: &str) -> BucketId {
        BucketId::Folder(Id::from(id))
    }

    fn any_folder(_: &Id) -> bool {
        true
    }

    fn within(bucket: BucketId, from_index: usize, to_index: usize) -> MoveTransaction {
        MoveTransaction::WithinBucket {
            bucket,
            from_index,
            to_index,
        }
    }

    fn across(from: BucketId, to: BucketId, id: &str, to_index: usize) -> MoveTransaction {
        MoveTransaction::AcrossBucket {
            from_bucket: from,
            to_bucket: to,
            moved_id: Id::from(id),
            to_index,
        }
    }

    #[test]
    fn test_reorder_first_to_last() {
        let mut notes = vec![note("1", None), note("2", None)];
        assert!(apply_move(&mut notes, any_folder, &within(BucketId::Root, 0, 1)));
        assert_eq!(ids(&notes), vec!["2", "1"]);
    }

    #[test]
    fn test_reorder_last_to_first() {
        let mut notes = vec![note("1", None), note("2", None), note("3", None)];
        assert!(apply_move(&mut notes, any_folder, &within(BucketId::Root, 2, 0)));
        assert_eq!(ids(&notes), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_reorder_uses_bucket_relative_indices() {
        let mut notes = vec![
            note("a", None),
            note("x", Some("f")),
            note("b", None),
            note("y", Some("f")),
            note("c", None),
        ];
        // Root view is [a, b, c]; move c to the front.
        assert!(apply_move(&mut notes, any_folder, &within(BucketId::Root, 2, 0)));
        assert_eq!(ids(&notes), vec!["c", "a", "x", "b", "y"]);

        // Folder view is [x, y]; move x after y.
        assert!(apply_move(&mut notes, any_folder, &within(folder("f"), 0, 1)));
        let folder_view: Vec<&str> = notes
            .iter()
            .filter(|n| n.is_in(&folder("f")))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(folder_view, vec!["y", "x"]);
        let root_view: Vec<&str> = notes
            .iter()
            .filter(|n| n.is_in(&BucketId::Root))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(root_view, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_every_pair_only_touches_bucket() {
        let original = vec![
            note("a", None),
            note("x", Some("f")),
            note("b", None),
            note("c", None),
            note("y", Some("f")),
        ];
        let others: Vec<Note> = original
            .iter()
            .filter(|n| !n.is_in(&BucketId::Root))
            .cloned()
            .collect();

        for from in 0..3 {
            for to in 0..3 {
                let mut notes = original.clone();
                apply_move(&mut notes, any_folder, &within(BucketId::Root, from, to));

                let root: Vec<&str> = notes
                    .iter()
                    .filter(|n| n.is_in(&BucketId::Root))
                    .map(|n| n.id.as_str())
                    .collect();
                let mut expected = vec!["a", "b", "c"];
                let moved = expected.remove(from);
                expected.insert(to, moved);
                assert_eq!(root, expected, "move {} -> {}", from, to);

                let rest: Vec<Note> = notes
                    .iter()
                    .filter(|n| !n.is_in(&BucketId::Root))
                    .cloned()
                    .collect();
                assert_eq!(rest, others);
            }
        }
    }

    #[test]
    fn test_reorder_onto_itself_is_noop() {
        let mut notes = vec![note("1", None), note("2", None)];
        assert!(!apply_move(&mut notes, any_folder, &within(BucketId::Root, 1, 1)));
        assert_eq!(ids(&notes), vec!["1", "2"]);
    }

    #[test]
    fn test_reorder_in_empty_bucket_is_noop() {
        let mut notes = vec![note("1", None)];
        assert!(!apply_move(&mut notes, any_folder, &within(folder("f"), 0, 0)));
        assert_eq!(ids(&notes), vec!["1"]);
    }

    #[test]
    fn test_reorder_out_of_range_source_is_noop() {
        let mut notes = vec![note("1", None), note("2", None)];
        assert!(!apply_move(&mut notes, any_folder, &within(BucketId::Root, 5, 0)));
        assert_eq!(ids(&notes), vec!["1", "2"]);
    }

    #[test]
    fn test_reorder_clamps_destination_to_bucket_end() {
        let mut notes = vec![note("1", None), note("2", None), note("3", None)];
        assert!(apply_move(&mut notes, any_folder, &within(BucketId::Root, 0, 99)));
        assert_eq!(ids(&notes), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_across_into_empty_folder_keeps_position() {
        let mut notes = vec![note("1", None), note("2", None), note("3", None)];
        assert!(apply_move(
            &mut notes,
            any_folder,
            &across(BucketId::Root, folder("f"), "2", 0)
        ));
        assert_eq!(ids(&notes), vec!["1", "2", "3"]);
        assert_eq!(notes[1].folder_id, Some(Id::from("f")));
    }

    #[test]
    fn test_across_inserts_at_destination_index() {
        let mut notes = vec![
            note("x", Some("f")),
            note("y", Some("f")),
            note("a", None),
        ];
        assert!(apply_move(
            &mut notes,
            any_folder,
            &across(BucketId::Root, folder("f"), "a", 1)
        ));
        assert_eq!(ids(&notes), vec!["x", "a", "y"]);
        assert!(notes.iter().all(|n| n.is_in(&folder("f"))));
    }

    #[test]
    fn test_across_appends_past_bucket_end() {
        let mut notes = vec![note("x", Some("f")), note("a", None), note("b", None)];
        assert!(apply_move(
            &mut notes,
            any_folder,
            &across(folder("f"), BucketId::Root, "x", 10)
        ));
        assert_eq!(ids(&notes), vec!["a", "b", "x"]);
        assert!(notes[2].folder_id.is_none());
    }

    #[test]
    fn test_across_preserves_title_and_content() {
        let mut notes = vec![note("1", None)];
        notes[0].content = "Body".into();
        let before = notes[0].clone();
        apply_move(&mut notes, any_folder, &across(BucketId::Root, folder("f"), "1", 0));
        assert_eq!(notes[0].id, before.id);
        assert_eq!(notes[0].title, before.title);
        assert_eq!(notes[0].content, before.content);
    }

    #[test]
    fn test_across_unknown_note_is_noop() {
        let mut notes = vec![note("1", None)];
        assert!(!apply_move(
            &mut notes,
            any_folder,
            &across(BucketId::Root, folder("f"), "missing", 0)
        ));
        assert!(notes[0].folder_id.is_none());
    }

    #[test]
    fn test_across_to_missing_folder_is_noop() {
        let mut notes = vec![note("1", None)];
        assert!(!apply_move(
            &mut notes,
            |_| false,
            &across(BucketId::Root, folder("ghost"), "1", 0)
        ));
        assert!(notes[0].folder_id.is_none());
    }

    #[test]
    fn test_from_drop_classifies() {
        let cancelled = MoveTransaction::from_drop(
            DropLocation::parse("root", 0),
            None,
            Id::from("1"),
        );
        assert_eq!(cancelled, None);

        let same = MoveTransaction::from_drop(
            DropLocation::parse("root", 0),
            Some(DropLocation::parse("root", 1)),
            Id::from("1"),
        );
        assert_eq!(same, Some(within(BucketId::Root, 0, 1)));

        let cross = MoveTransaction::from_drop(
            DropLocation::parse("root", 0),
            Some(DropLocation::parse("f", 2)),
            Id::from("1"),
        );
        assert_eq!(cross, Some(across(BucketId::Root, folder("f"), "1", 2)));
    }
}
