use std::fs;
use std::path::PathBuf;

use contact_book::db::*;
use contact_book::error::ContactError;
use contact_book::model::*;
use contact_book::ops::*;
use contact_book::queries::*;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    (dir, path)
}

fn contact_set(store: &ContactStore) -> Vec<Contact> {
    let mut all: Vec<Contact> = store.contacts().cloned().collect();
    all.sort_by(|a, b| a.name.cmp(&b.name));
    all
}

// ==========================================================================
// LOAD TESTS
// ==========================================================================

#[test]
fn load_missing_file_is_empty_without_warning() {
    let (_dir, path) = setup();
    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(warning.is_none());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn load_reads_records() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[
    {"name": "Alice Smith", "phone": "555-1234", "email": "alice@example.com"},
    {"name": "Bob", "phone": "", "email": ""}
]"#,
    )
    .unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(store.len(), 2);
    let alice = contact_queries::find_by_name(&store, "alice smith").unwrap();
    assert_eq!(alice.phone, "555-1234");
}

#[test]
fn load_invalid_json_warns_and_starts_empty() {
    let (_dir, path) = setup();
    fs::write(&path, "{not json").unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(matches!(warning, Some(ContactError::Malformed { .. })));
}

#[test]
fn load_record_missing_name_warns_and_starts_empty() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{"name": "Alice", "phone": "1", "email": ""}, {"phone": "2", "email": ""}]"#,
    )
    .unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(matches!(warning, Some(ContactError::Malformed { .. })));
}

#[test]
fn load_record_missing_phone_is_malformed() {
    let (_dir, path) = setup();
    fs::write(&path, r#"[{"name": "Alice", "email": ""}]"#).unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(warning.is_some());
}

#[test]
fn load_non_array_is_malformed() {
    let (_dir, path) = setup();
    fs::write(&path, r#"{"name": "Alice", "phone": "", "email": ""}"#).unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(warning.is_some());
}

#[test]
fn load_blank_name_is_rejected() {
    let (_dir, path) = setup();
    fs::write(&path, r#"[{"name": "  ", "phone": "", "email": ""}]"#).unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(store.is_empty());
    assert!(matches!(
        warning,
        Some(ContactError::BlankRecordName { index: 0, .. })
    ));
}

#[test]
fn load_keeps_first_of_duplicate_names() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[
    {"name": "Bob", "phone": "111", "email": ""},
    {"name": "BOB", "phone": "222", "email": ""}
]"#,
    )
    .unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(store.len(), 1);
    let bob = contact_queries::find_by_name(&store, "bob").unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.phone, "111");
}

#[test]
fn load_trims_record_names() {
    let (_dir, path) = setup();
    fs::write(&path, r#"[{"name": " Bob ", "phone": "111", "email": ""}]"#).unwrap();

    let (mut store, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(contact_queries::find_by_name(&store, "Bob").unwrap().name, "Bob");

    let result = contact_ops::add_contact(&mut store, "bob", "222", "");
    assert!(matches!(result, Err(ContactError::DuplicateName { .. })));
    assert_eq!(store.len(), 1);
}

#[test]
fn load_treats_padded_names_as_duplicates() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{"name": "Bob", "phone": "111", "email": ""}, {"name": "  bob", "phone": "222", "email": ""}]"#,
    )
    .unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(contact_queries::find_by_name(&store, "bob").unwrap().phone, "111");
}

#[test]
fn load_ignores_extra_keys() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{"name": "Alice", "phone": "", "email": "", "notes": "extra"}]"#,
    )
    .unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(store.len(), 1);
}

// ==========================================================================
// SAVE TESTS
// ==========================================================================

#[test]
fn save_then_load_round_trips_regardless_of_insertion_order() {
    let (_dir, path) = setup();
    let mut first = ContactStore::new(&path);
    contact_ops::add_contact(&mut first, "Zoe", "9", "z@x.com").unwrap();
    contact_ops::add_contact(&mut first, "alice", "1", "").unwrap();
    contact_ops::add_contact(&mut first, "Mallory", "", "m@x.com").unwrap();
    first.save().unwrap();

    let (second, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert_eq!(contact_set(&first), contact_set(&second));

    let (_dir2, other_path) = setup();
    let mut reordered = ContactStore::new(&other_path);
    contact_ops::add_contact(&mut reordered, "Mallory", "", "m@x.com").unwrap();
    contact_ops::add_contact(&mut reordered, "alice", "1", "").unwrap();
    contact_ops::add_contact(&mut reordered, "Zoe", "9", "z@x.com").unwrap();
    let (third, _) = ContactStore::load(&other_path);
    assert_eq!(contact_set(&second), contact_set(&third));
}

#[test]
fn save_writes_json_array_with_four_space_indent() {
    let (_dir, path) = setup();
    let mut store = ContactStore::new(&path);
    contact_ops::add_contact(&mut store, "Alice Smith", "555-1234", "alice@example.com").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n    {\n        \"name\": \"Alice Smith\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    let obj = records[0].as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["phone"], "555-1234");
    assert_eq!(obj["email"], "alice@example.com");
}

#[test]
fn save_empty_store_writes_empty_array() {
    let (_dir, path) = setup();
    let store = ContactStore::new(&path);
    store.save().unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn save_overwrites_previous_contents() {
    let (_dir, path) = setup();
    fs::write(&path, "garbage that is much longer than the new file contents will be").unwrap();

    let (store, warning) = ContactStore::load(&path);
    assert!(warning.is_some());
    store.save().unwrap();

    let (reloaded, warning) = ContactStore::load(&path);
    assert!(warning.is_none());
    assert!(reloaded.is_empty());
}

#[test]
fn save_failure_is_reported() {
    let (dir, _) = setup();
    let store = ContactStore::new(dir.path().join("missing-dir").join("contacts.json"));
    assert!(matches!(store.save(), Err(ContactError::Save { .. })));
}

// ==========================================================================
// CONTACT FILE TESTS
// ==========================================================================

#[test]
fn contact_file_read_missing_returns_none() {
    let (_dir, path) = setup();
    assert!(contact_file::read(&path).unwrap().is_none());
}

#[test]
fn contact_file_write_then_read() {
    let (_dir, path) = setup();
    let alice = Contact::create("Alice".into(), "1".into(), "a@x.com".into());
    let bob = Contact::create("Bob".into(), "".into(), "".into());
    contact_file::write(&path, [&alice, &bob]).unwrap();

    let records = contact_file::read(&path).unwrap().unwrap();
    assert_eq!(records, vec![alice, bob]);
}
