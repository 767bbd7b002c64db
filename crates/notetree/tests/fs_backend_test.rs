mod common;

use common::TestEnv;
use notetree::error::NotesError;
use notetree::model::{Folder, Id, Note};
use notetree::store::backend::StorageBackend;
use notetree::store::fs_backend::{FsBackend, FOLDERS_FILE, NOTES_FILE};
use std::fs;

fn sample() -> (Vec<Note>, Vec<Folder>) {
    let folder = Folder::new(Id::from("1700000000000"), "Work");
    let mut note = Note::new(
        Id::from("1700000000001"),
        "Plan",
        Some(folder.id.clone()),
    );
    note.content = "# Plan\n\n- [ ] ship".to_string();
    let loose = Note::new(Id::from("1700000000002"), "Loose", None);
    (vec![note, loose], vec![folder])
}

#[test]
fn test_fs_backend_roundtrip() {
    let env = TestEnv::new();
    let backend = env.backend();
    let (notes, folders) = sample();

    backend.save_notes(&notes).unwrap();
    backend.save_folders(&folders).unwrap();

    assert_eq!(backend.load_notes().unwrap(), notes);
    assert_eq!(backend.load_folders().unwrap(), folders);
}

#[test]
fn test_fs_backend_missing_files_load_empty() {
    let env = TestEnv::new();
    let backend = FsBackend::new(env.root.join("not-created-yet"));

    assert!(backend.load_notes().unwrap().is_empty());
    assert!(backend.load_folders().unwrap().is_empty());
}

#[test]
fn test_fs_backend_creates_data_dir_on_save() {
    let env = TestEnv::new();
    let nested = env.root.join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.save_folders(&[]).unwrap();
    assert!(nested.join(FOLDERS_FILE).exists());
}

#[test]
fn test_fs_backend_snapshot_keys() {
    let env = TestEnv::new();
    let backend = env.backend();
    let (notes, folders) = sample();
    backend.save_notes(&notes).unwrap();
    backend.save_folders(&folders).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(backend.notes_path()).unwrap()).unwrap();
    assert_eq!(raw[0]["folderId"], "1700000000000");
    assert!(raw[1]["folderId"].is_null());
    assert_eq!(raw[0]["content"], "# Plan\n\n- [ ] ship");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(backend.folders_path()).unwrap()).unwrap();
    assert_eq!(raw[0]["name"], "Work");
    assert_eq!(raw[0]["isOpen"], true);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let env = TestEnv::new();
    let backend = env.backend();
    let (notes, _) = sample();

    for _ in 0..3 {
        backend.save_notes(&notes).unwrap();
    }

    let leftovers: Vec<_> = fs::read_dir(&env.root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
    assert!(env.root.join(NOTES_FILE).exists());
}

#[test]
fn test_fs_backend_corrupt_snapshot_is_an_error() {
    let env = TestEnv::new();
    let backend = env.backend();
    fs::write(backend.notes_path(), "{ not json").unwrap();

    match backend.load_notes() {
        Err(NotesError::Serialization(_)) => {}
        other => panic!("expected serialization error, got {:?}", other),
    }
}

#[test]
fn test_fs_backend_reads_hand_written_snapshot() {
    let env = TestEnv::new();
    let backend = env.backend();
    fs::write(
        backend.notes_path(),
        r#"[{"id":"1","title":"Bare"}, {"id":"2","title":"Filed","content":"x","folderId":"9"}]"#,
    )
    .unwrap();
    fs::write(backend.folders_path(), r#"[{"id":"9","name":"Old"}]"#).unwrap();

    let notes = backend.load_notes().unwrap();
    assert_eq!(notes[0].content, "");
    assert_eq!(notes[0].folder_id, None);
    assert_eq!(notes[1].folder_id, Some(Id::from("9")));

    let folders = backend.load_folders().unwrap();
    assert!(folders[0].is_open);
}
